//! View pipeline: pure sort/filter transforms over the current candidate view

use crate::error::{Result, TalentDashError};
use crate::processing::candidate::Candidate;
use std::str::FromStr;

/// Closed set of numeric fields the view can be sorted by. Parsing anything
/// else fails with a descriptive error instead of producing a meaningless
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Score,
    Views,
}

impl FromStr for SortField {
    type Err = TalentDashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortField::Score),
            "views" => Ok(SortField::Views),
            other => Err(TalentDashError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort a view by the named numeric field, descending. The comparison is
/// stable, so ties keep their prior relative order, and re-sorting an
/// already-sorted view is a no-op.
pub fn sort_by_field(view: &[Candidate], field: SortField) -> Vec<Candidate> {
    let mut sorted = view.to_vec();
    match field {
        SortField::Score => sorted.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortField::Views => sorted.sort_by(|a, b| b.views.cmp(&a.views)),
    }
    sorted
}

/// Case-insensitive substring filter against each candidate's skills field.
/// An empty term (after trimming) returns the view unchanged. For a
/// non-empty term, candidates without a skills field never match: missing
/// data fails closed.
pub fn filter_by_skill(view: &[Candidate], term: &str) -> Vec<Candidate> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return view.to_vec();
    }

    view.iter()
        .filter(|c| {
            c.skills
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, skills: Option<&str>, score: f64, views: u64) -> Candidate {
        Candidate {
            name: name.to_string(),
            gender: None,
            location: None,
            bio: None,
            job_types: None,
            skills: skills.map(|s| s.to_string()),
            software: None,
            platforms: None,
            content_verticals: None,
            past_creators: None,
            monthly_rate: None,
            hourly_rate: None,
            score,
            views,
        }
    }

    fn sample_view() -> Vec<Candidate> {
        vec![
            candidate("A", Some("Video,Editing"), 9.0, 100),
            candidate("B", Some("Video"), 7.0, 200),
        ]
    }

    fn names(view: &[Candidate]) -> Vec<&str> {
        view.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_views_descending() {
        let sorted = sort_by_field(&sample_view(), SortField::Views);
        assert_eq!(names(&sorted), vec!["B", "A"]);
    }

    #[test]
    fn test_sort_by_score_descending() {
        let sorted = sort_by_field(&sample_view(), SortField::Score);
        assert_eq!(names(&sorted), vec!["A", "B"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sort_by_field(&sample_view(), SortField::Views);
        let twice = sort_by_field(&once, SortField::Views);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_ties_preserve_order() {
        let view = vec![
            candidate("A", None, 5.0, 10),
            candidate("B", None, 5.0, 10),
            candidate("C", None, 6.0, 10),
        ];
        let sorted = sort_by_field(&view, SortField::Score);
        assert_eq!(names(&sorted), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("score".parse::<SortField>().unwrap(), SortField::Score);
        assert_eq!("Views".parse::<SortField>().unwrap(), SortField::Views);
        assert!("monthly_rate".parse::<SortField>().is_err());
    }

    #[test]
    fn test_filter_matches_substring_case_insensitive() {
        let filtered = filter_by_skill(&sample_view(), "edit");
        assert_eq!(names(&filtered), vec!["A"]);
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let view = sample_view();
        let filtered = filter_by_skill(&view, "  ");
        assert_eq!(filtered, view);
    }

    #[test]
    fn test_filter_no_match_yields_empty() {
        let filtered = filter_by_skill(&sample_view(), "xyz");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_excludes_missing_skills() {
        let view = vec![
            candidate("A", Some("video"), 1.0, 1),
            candidate("NoSkills", None, 1.0, 1),
        ];
        let filtered = filter_by_skill(&view, "v");
        assert_eq!(names(&filtered), vec!["A"]);

        // Empty term keeps skill-less candidates in the view
        assert_eq!(filter_by_skill(&view, "").len(), 2);
    }

    #[test]
    fn test_filters_compound() {
        let view = vec![
            candidate("A", Some("video, editing"), 1.0, 1),
            candidate("B", Some("video"), 1.0, 1),
            candidate("C", Some("editing"), 1.0, 1),
        ];

        let chained = filter_by_skill(&filter_by_skill(&view, "video"), "edit");
        let combined: Vec<Candidate> = view
            .iter()
            .filter(|c| {
                let s = c.skills.as_deref().unwrap_or("").to_lowercase();
                s.contains("video") && s.contains("edit")
            })
            .cloned()
            .collect();

        assert_eq!(chained, combined);
        assert_eq!(names(&chained), vec!["A"]);
    }
}
