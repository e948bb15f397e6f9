//! CLI interface for the talent dashboard

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "talentdash")]
#[command(about = "Recruiter dashboard for ranked, filterable candidate shortlists")]
#[command(
    long_about = "Submit a job query to the recommendation backend, then sort, filter, visualize, and export the ranked candidate shortlist"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the backend for ranked candidates
    Recommend {
        /// Job description or required skills
        #[arg(short, long)]
        description: String,

        /// Job title
        #[arg(long, default_value = "Ad-hoc Job")]
        title: String,

        /// Budget value (unparsable input falls back to 0)
        #[arg(short, long, default_value = "0")]
        budget: String,

        /// Budget type: monthly or hourly
        #[arg(long, default_value = "monthly")]
        budget_type: String,

        /// Preferred locations (comma separated)
        #[arg(short, long, default_value = "")]
        locations: String,

        /// Preferred gender (empty means any)
        #[arg(short, long)]
        gender: Option<String>,

        /// Sort the view by a numeric field: score or views
        #[arg(short, long)]
        sort: Option<String>,

        /// Narrow the view to candidates whose skills contain this term
        #[arg(short, long)]
        filter: Option<String>,

        /// Export the final view as CSV
        #[arg(short, long)]
        export: bool,

        /// Export path (defaults to the configured file name)
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Upload a candidate dataset CSV to the backend
    Upload {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("data.csv"), &["csv"]).is_ok());
        assert!(validate_file_extension(Path::new("data.CSV"), &["csv"]).is_ok());
        assert!(validate_file_extension(Path::new("data.xlsx"), &["csv"]).is_err());
        assert!(validate_file_extension(Path::new("data"), &["csv"]).is_err());
    }
}
