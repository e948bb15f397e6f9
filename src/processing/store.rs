//! Candidate store: the single source of truth for the current view

use crate::processing::candidate::{Candidate, RecommendationResult};

/// Holds the last-fetched recommendation result, as narrowed or reordered by
/// the view pipeline. `set` and `replace` are the only mutation paths; the
/// dashboard recomputes the distribution, narrative, and chart synchronously
/// after each one.
#[derive(Debug, Default)]
pub struct CandidateStore {
    view: Vec<Candidate>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the view wholesale with a fresh recommend response.
    pub fn set(&mut self, result: RecommendationResult) {
        self.view = result;
    }

    /// Current view, in display order.
    pub fn get(&self) -> &[Candidate] {
        &self.view
    }

    /// Install a derived view produced by the sort/filter pipeline. The store
    /// then holds the current view, not the original fetch, so repeated
    /// filters compose.
    pub fn replace(&mut self, view: Vec<Candidate>) {
        self.view = view;
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }
}
