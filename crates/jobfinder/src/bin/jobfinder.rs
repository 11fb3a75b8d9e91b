//! Headless job listing: loads the remote collection once and prints the
//! jobs matching an optional search query.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jobfinder::config::load_config_or_default;
use jobfinder::telemetry::init_logging;
use jobfinder::{JobSession, RefreshOutcome};

#[derive(Parser, Debug)]
#[command(name = "jobfinder", version, about = "Search remote job listings")]
struct Args {
    /// Config file (YAML or JSON). Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Case-insensitive search over title, company and locations.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Print the full session snapshot as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("{}", e);
    }

    let session = match JobSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match session.refresh().await {
        Ok(RefreshOutcome::Refreshed { count, .. }) => log::debug!("Loaded {} jobs", count),
        Ok(outcome) => log::debug!("Refresh finished: {:?}", outcome),
        Err(e) => {
            eprintln!("{}", e);
            if let Some(last_error) = session.last_error() {
                log::debug!("Cause: {}", last_error.detail);
            }
            return ExitCode::FAILURE;
        }
    }

    session.set_search_query(args.query);

    if args.json {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let filtered = session.filtered_jobs();
    for job in filtered.iter() {
        let salary = job
            .salary_range()
            .unwrap_or_else(|| "Salary not disclosed".to_string());
        println!(
            "{}\n  {} | {} | {}\n  {}",
            job.title,
            job.company_name,
            job.location_label(),
            job.work_model,
            salary
        );
    }
    println!("{} of {} jobs", filtered.len(), session.jobs().len());

    ExitCode::SUCCESS
}
