//! Talent dashboard CLI: ranked, filterable, visualized candidate shortlists

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use talent_dash::api::{BudgetType, HttpBackend, JobQuery};
use talent_dash::chart::{ChartConfig, ConsoleChartRenderer};
use talent_dash::cli::{self, Cli, Commands, ConfigAction};
use talent_dash::config::Config;
use talent_dash::error::{Result, TalentDashError};
use talent_dash::output::console::print_candidates;
use talent_dash::output::export::write_view;
use talent_dash::processing::SortField;
use talent_dash::Dashboard;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Recommend {
            description,
            title,
            budget,
            budget_type,
            locations,
            gender,
            sort,
            filter,
            export,
            save,
        } => {
            info!("Submitting job query to {}", config.backend.base_url);

            let budget_type: BudgetType = budget_type.parse()?;
            // Validate the sort field up front so a typo fails before the
            // network round trip
            let sort_field: Option<SortField> =
                sort.as_deref().map(str::parse).transpose()?;

            let query = JobQuery::from_form(
                &title,
                &description,
                &budget,
                budget_type,
                &locations,
                gender.as_deref(),
            );

            let backend = HttpBackend::new(&config.backend)?;
            let renderer = ConsoleChartRenderer::new(config.output.color_output);
            let chart_config = ChartConfig {
                title: "Skills Count".to_string(),
                max_width: config.output.chart_width,
            };
            let mut dashboard = Dashboard::new(Arc::new(backend), Box::new(renderer), chart_config);

            let spinner = network_spinner("Scoring candidates...");
            let outcome = dashboard.submit_query(&query).await;
            spinner.finish_and_clear();
            let count = outcome?;

            println!("🎯 {}", title);
            println!("🏆 Top {} candidates", count);

            if let Some(field) = sort_field {
                dashboard.sort(field);
            }
            if let Some(term) = &filter {
                dashboard.filter(term);
            }

            print_candidates(dashboard.view(), config.output.color_output);
            println!("\n📝 {}", dashboard.narrative());

            if export || save.is_some() {
                let path = save.unwrap_or_else(|| config.export.file_name.clone().into());
                write_view(dashboard.view(), &path)?;
                println!(
                    "⬇️ Exported {} candidates to {}",
                    dashboard.view().len(),
                    path.display()
                );
            }

            Ok(())
        }

        Commands::Upload { file } => {
            cli::validate_file_extension(&file, &["csv"])
                .map_err(|e| TalentDashError::InvalidInput(format!("Dataset file: {}", e)))?;

            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("dataset.csv")
                .to_string();
            let bytes = std::fs::read(&file)?;
            info!("Uploading {} ({} bytes)", file_name, bytes.len());

            let backend = HttpBackend::new(&config.backend)?;
            let renderer = ConsoleChartRenderer::new(config.output.color_output);
            let mut dashboard =
                Dashboard::new(Arc::new(backend), Box::new(renderer), ChartConfig::default());

            let spinner = network_spinner("Uploading dataset...");
            let message = dashboard.upload_dataset(&file_name, bytes).await;
            spinner.finish_and_clear();

            println!("{}", message?);
            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        TalentDashError::Configuration(format!("Failed to render config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("✅ Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn network_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("Invalid spinner template"),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
