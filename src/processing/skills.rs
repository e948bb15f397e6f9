//! Skill frequency aggregation over the current candidate view

use crate::processing::candidate::Candidate;
use std::collections::HashMap;

/// Counts of normalized skill tokens, kept in first-seen order so chart axes
/// stay stable across re-renders of the same view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillFrequency {
    entries: Vec<(String, usize)>,
}

impl SkillFrequency {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct skills
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, skill: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(s, _)| s == skill)
            .map(|(_, n)| *n)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(s, _)| s.clone()).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(s, n)| (s.as_str(), *n))
    }

    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, n)| *n).max()
    }

    pub fn min_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, n)| *n).min()
    }
}

/// Build the skill distribution for a view. Each non-empty `skills` field is
/// split on commas; tokens are trimmed and lower-cased, empties dropped.
/// Candidates without skills contribute nothing. Pure and deterministic.
pub fn aggregate_skills(view: &[Candidate]) -> SkillFrequency {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for candidate in view {
        let Some(skills) = &candidate.skills else {
            continue;
        };
        for token in skills.split(',') {
            let skill = token.trim().to_lowercase();
            if skill.is_empty() {
                continue;
            }
            match index.get(&skill) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(skill.clone(), entries.len());
                    entries.push((skill, 1));
                }
            }
        }
    }

    SkillFrequency { entries }
}
