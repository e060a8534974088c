use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lsprep::StationTable;
use lsprep::api;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let stations = StationTable::default();

    let mut skipped = 0;
    let mut datasets: Vec<PathBuf> = Vec::new();
    for dataset in args.datasets {
        if dataset.is_dir() {
            datasets.push(dataset);
        } else {
            warn!("{}", AppError::NotADirectory(dataset));
            skipped += 1;
        }
    }

    let report = api::process_directories(&datasets, &stations);

    info!("Batch preparation complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", skipped);
    info!("Errors: {}", report.errors);

    Ok(())
}
