//! Dashboard controller: owns the candidate store, chart session, upload
//! session, and the request sequence guard

use crate::api::{JobQuery, TalentBackend, UploadSession};
use crate::chart::{ChartConfig, ChartHandle, ChartRenderer, ChartSession};
use crate::error::Result;
use crate::output::export::encode_view;
use crate::processing::candidate::{Candidate, RecommendationResult};
use crate::processing::narrative::describe_skills;
use crate::processing::skills::{aggregate_skills, SkillFrequency};
use crate::processing::store::CandidateStore;
use crate::processing::view::{filter_by_skill, sort_by_field, SortField};
use log::warn;
use std::sync::Arc;

/// All dashboard state in one owned struct. Every mutation of the store runs
/// through here and ends in a synchronous `refresh`, so the distribution,
/// narrative, and chart always describe the view being displayed.
pub struct Dashboard {
    backend: Arc<dyn TalentBackend>,
    store: CandidateStore,
    charts: ChartSession,
    upload: UploadSession,
    chart_config: ChartConfig,
    frequency: SkillFrequency,
    narrative: String,
    issued_seq: u64,
}

impl Dashboard {
    pub fn new(
        backend: Arc<dyn TalentBackend>,
        renderer: Box<dyn ChartRenderer>,
        chart_config: ChartConfig,
    ) -> Self {
        Self {
            backend,
            store: CandidateStore::new(),
            charts: ChartSession::new(renderer),
            upload: UploadSession::new(),
            chart_config,
            frequency: SkillFrequency::default(),
            narrative: String::new(),
            issued_seq: 0,
        }
    }

    /// Submit a job query and install the response. Returns the number of
    /// candidates in the new view. Transport and backend failures propagate
    /// for the caller to display; the store is untouched on failure.
    pub async fn submit_query(&mut self, query: &JobQuery) -> Result<usize> {
        let seq = self.begin_query();
        let backend = Arc::clone(&self.backend);
        let result = backend.recommend(query).await?;
        self.install_result(seq, result);
        Ok(self.store.len())
    }

    /// Stamp a new recommend request. Each submission gets a fresh,
    /// monotonically increasing sequence number.
    pub fn begin_query(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Install a recommend response. Only the response for the most recently
    /// issued request wins; a slower, stale response is dropped so it can
    /// never overwrite a newer result. Returns whether the result was
    /// installed.
    pub fn install_result(&mut self, seq: u64, result: RecommendationResult) -> bool {
        if seq != self.issued_seq {
            warn!(
                "Dropping stale recommend response (seq {} < latest {})",
                seq, self.issued_seq
            );
            return false;
        }
        self.store.set(result);
        self.refresh();
        true
    }

    /// Re-sort the current view, descending by the given field. The sorted
    /// sequence becomes the new view.
    pub fn sort(&mut self, field: SortField) {
        let sorted = sort_by_field(self.store.get(), field);
        self.store.replace(sorted);
        self.refresh();
    }

    /// Narrow the current view by a skill term. Filters compound: each call
    /// filters the already-filtered view, and only a fresh query resets it.
    pub fn filter(&mut self, term: &str) {
        let filtered = filter_by_skill(self.store.get(), term);
        self.store.replace(filtered);
        self.refresh();
    }

    /// Encode the current view as a CSV payload.
    pub fn export_csv(&self) -> Result<String> {
        encode_view(self.store.get())
    }

    /// Upload a dataset through the session state machine and return the
    /// resulting status message. Upload failures become status text, not
    /// errors; only a concurrent submission is an `Err`.
    pub async fn upload_dataset(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        self.upload
            .submit(self.backend.as_ref(), file_name, bytes)
            .await?;
        Ok(self.upload.message())
    }

    pub fn view(&self) -> &[Candidate] {
        self.store.get()
    }

    pub fn frequency(&self) -> &SkillFrequency {
        &self.frequency
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn upload_message(&self) -> String {
        self.upload.message()
    }

    pub fn live_chart(&self) -> Option<&ChartHandle> {
        self.charts.live()
    }

    /// Recompute everything derived from the view: distribution, narrative,
    /// chart. Runs synchronously after every store mutation.
    fn refresh(&mut self) {
        self.frequency = aggregate_skills(self.store.get());
        self.narrative = describe_skills(&self.frequency);
        self.charts.render(&self.frequency, &self.chart_config);
    }
}
