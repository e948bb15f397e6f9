//! Candidate card rendering for the terminal

use crate::processing::candidate::Candidate;
use colored::Colorize;

/// Display-layer default for absent optional fields. The export encoder
/// intentionally does not apply this.
const MISSING: &str = "N/A";

const BIO_PREVIEW_CHARS: usize = 150;

/// Print ranked candidate cards. The top three ranks get medal badges;
/// absent fields fall back to "N/A" and bios are truncated to a preview.
pub fn print_candidates(view: &[Candidate], use_colors: bool) {
    if view.is_empty() {
        println!("No candidates in the current view.");
        return;
    }

    for (rank, c) in view.iter().enumerate() {
        let badge = match rank {
            0 => "🥇 ",
            1 => "🥈 ",
            2 => "🥉 ",
            _ => "",
        };
        let gender = c
            .gender
            .map(|g| format!(" ({})", g))
            .unwrap_or_default();
        let header = format!("{}{}{}", badge, c.name, gender);
        let score = format!("⭐ {:.2}", c.score);

        if use_colors {
            println!("\n{}  {}", header.bold(), score.yellow());
        } else {
            println!("\n{}  {}", header, score);
        }

        println!("  Location: {}", c.location.as_deref().unwrap_or(MISSING));
        println!("  Short Bio: {}", bio_preview(c.bio.as_deref()));
        println!("  Job Types: {}", c.job_types.as_deref().unwrap_or(MISSING));
        println!("  Skills: {}", skill_tags(c.skills.as_deref()));
        println!("  Software: {}", c.software.as_deref().unwrap_or(MISSING));
        println!("  Platforms: {}", c.platforms.as_deref().unwrap_or(MISSING));
        println!(
            "  Content Verticals: {}",
            c.content_verticals.as_deref().unwrap_or(MISSING)
        );
        println!(
            "  Past Creators: {}",
            c.past_creators.as_deref().unwrap_or(MISSING)
        );
        println!(
            "  Monthly: {}  Hourly: {}",
            c.monthly_rate.as_deref().unwrap_or(MISSING),
            c.hourly_rate.as_deref().unwrap_or(MISSING)
        );
        println!("  Profile Views: {}", c.views);
    }
}

fn bio_preview(bio: Option<&str>) -> String {
    match bio {
        Some(text) if text.chars().count() > BIO_PREVIEW_CHARS => {
            let preview: String = text.chars().take(BIO_PREVIEW_CHARS).collect();
            format!("{}...", preview)
        }
        Some(text) => text.to_string(),
        None => "No bio".to_string(),
    }
}

fn skill_tags(skills: Option<&str>) -> String {
    match skills {
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" "),
        None => "Not listed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bio_preview_truncates_long_bios() {
        let long = "x".repeat(200);
        let preview = bio_preview(Some(&long));
        assert_eq!(preview.chars().count(), BIO_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_bio_preview_keeps_short_bios() {
        assert_eq!(bio_preview(Some("short bio")), "short bio");
        assert_eq!(bio_preview(None), "No bio");
    }

    #[test]
    fn test_skill_tags() {
        assert_eq!(skill_tags(Some("Video, Editing")), "[Video] [Editing]");
        assert_eq!(skill_tags(None), "Not listed");
    }
}
