//! Tabular export of the current view

use crate::error::{Result, TalentDashError};
use crate::processing::candidate::Candidate;
use std::path::Path;

pub const EXPORT_HEADER: [&str; 8] = [
    "Name",
    "Gender",
    "Location",
    "Skills",
    "Score",
    "Monthly Rate",
    "Hourly Rate",
    "Views",
];

/// Encode the current view as CSV, one row per candidate in view order.
/// Field values are written literally; absent optional fields encode as
/// empty strings (the display layer defaults to "N/A", the export does not).
/// The writer quotes and escapes fields only when they contain delimiters,
/// quotes, or newlines, so plain data stays byte-for-byte simple.
pub fn encode_view(view: &[Candidate]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for c in view {
        writer.write_record([
            c.name.as_str(),
            &c.gender.map(|g| g.to_string()).unwrap_or_default(),
            c.location.as_deref().unwrap_or(""),
            c.skills.as_deref().unwrap_or(""),
            &c.score.to_string(),
            c.monthly_rate.as_deref().unwrap_or(""),
            c.hourly_rate.as_deref().unwrap_or(""),
            &c.views.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TalentDashError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TalentDashError::Export(e.to_string()))
}

/// Encode the view and write it to disk.
pub fn write_view(view: &[Candidate], path: &Path) -> Result<()> {
    let payload = encode_view(view)?;
    std::fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::Gender;

    fn candidate(name: &str, skills: Option<&str>, score: f64, views: u64) -> Candidate {
        Candidate {
            name: name.to_string(),
            gender: Some(Gender::Female),
            location: Some("Berlin".to_string()),
            bio: None,
            job_types: None,
            skills: skills.map(|s| s.to_string()),
            software: None,
            platforms: None,
            content_verticals: None,
            past_creators: None,
            monthly_rate: Some("4500".to_string()),
            hourly_rate: None,
            score,
            views,
        }
    }

    #[test]
    fn test_header_row() {
        let payload = encode_view(&[]).unwrap();
        assert_eq!(
            payload.lines().next().unwrap(),
            "Name,Gender,Location,Skills,Score,Monthly Rate,Hourly Rate,Views"
        );
    }

    #[test]
    fn test_round_trip_by_comma_splitting() {
        // Comma-free fields reconstruct exactly by naive splitting
        let view = vec![candidate("Ada", Some("video"), 9.0, 100)];
        let payload = encode_view(&view).unwrap();

        let row: Vec<&str> = payload.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(
            row,
            vec!["Ada", "Female", "Berlin", "video", "9", "4500", "", "100"]
        );
    }

    #[test]
    fn test_absent_fields_are_empty_not_na() {
        let mut c = candidate("Ada", None, 1.5, 3);
        c.gender = None;
        c.location = None;
        c.monthly_rate = None;

        let payload = encode_view(&[c]).unwrap();
        assert_eq!(payload.lines().nth(1).unwrap(), "Ada,,,,1.5,,,3");
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let c = candidate("Ada", Some("video, editing"), 1.0, 1);

        let payload = encode_view(&[c]).unwrap();
        let row = payload.lines().nth(1).unwrap();
        assert!(row.contains("\"video, editing\""));

        // A strict reader recovers the original value
        let mut reader = csv::Reader::from_reader(payload.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[3], "video, editing");
    }

    #[test]
    fn test_rows_follow_view_order() {
        let view = vec![
            candidate("B", None, 7.0, 200),
            candidate("A", None, 9.0, 100),
        ];
        let payload = encode_view(&view).unwrap();
        let lines: Vec<&str> = payload.lines().collect();
        assert!(lines[1].starts_with("B,"));
        assert!(lines[2].starts_with("A,"));
    }

    #[test]
    fn test_write_view_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_candidates.csv");
        let view = vec![candidate("Ada", Some("video"), 9.0, 100)];

        write_view(&view, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Name,Gender"));
        assert_eq!(contents.lines().count(), 2);
    }
}
