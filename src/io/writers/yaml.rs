use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::document::DatasetDocument;

/// Name of the sidecar document written into each scene directory.
pub const METADATA_FILENAME: &str = "agdc-metadata.yaml";

/// Errors encountered while writing the metadata sidecar
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Write the document as `agdc-metadata.yaml` inside the scene directory.
///
/// The document is serialized in full before the file is touched, so a
/// serialization failure never leaves a partial sidecar behind.
pub fn write_dataset_yaml(doc: &DatasetDocument, dir: &Path) -> Result<PathBuf, WriterError> {
    let rendered = serde_yaml::to_string(doc)?;
    let sidecar_path = dir.join(METADATA_FILENAME);
    fs::write(&sidecar_path, rendered)?;
    info!("Wrote metadata sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}
