use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lsprep",
    version,
    about = "Prepare USGS Landsat ESPA scenes for Data Cube ingestion"
)]
pub struct CliArgs {
    /// Scene directories to prepare; each receives an agdc-metadata.yaml
    /// sidecar
    #[arg(required = true, value_name = "DATASET")]
    pub datasets: Vec<PathBuf>,
}
