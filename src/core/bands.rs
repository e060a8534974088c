use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors encountered while discovering raster band files
#[derive(Debug, Error)]
pub enum BandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected raster filename (no separator): {0:?}")]
    MalformedFilename(PathBuf),
    #[error("duplicate band name {name:?}: {first:?} and {second:?}")]
    Duplicate {
        name: String,
        first: String,
        second: String,
    },
    #[error("no raster band files found in {0:?}")]
    NoBands(PathBuf),
}

/// One band image, referenced by its file name relative to the scene
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandFile {
    pub path: String,
}

/// Logical band name to band file, ordered by name.
pub type BandMap = BTreeMap<String, BandFile>;

/// Derive the logical band name from a raster file stem.
///
/// The stem is split at the last underscore. A remainder led by a band
/// index (`B` or `b` followed by digits) keeps only what follows the index
/// letter; any other remainder is the name as-is. `…_sr_band1` therefore
/// maps to `band1` and `…_cfmask` to `cfmask`.
pub fn band_name(path: &Path) -> Result<String, BandError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| BandError::MalformedFilename(path.to_path_buf()))?;

    let position = stem
        .rfind('_')
        .ok_or_else(|| BandError::MalformedFilename(path.to_path_buf()))?;
    let rest = &stem[position + 1..];

    let band_index = Regex::new(r"^[Bb][0-9]+")
        .map_err(|_| BandError::MalformedFilename(path.to_path_buf()))?;
    if band_index.is_match(rest) {
        Ok(rest[1..].to_string())
    } else {
        Ok(rest.to_string())
    }
}

/// Enumerate the `.tif` band files of a scene directory and map each to its
/// logical band name.
///
/// Files are visited in name order so discovery is deterministic; the first
/// entry of the returned map is the scene's representative raster. A name
/// collision between two files is an error rather than a silent overwrite.
pub fn discover_bands(dir: &Path) -> Result<BandMap, BandError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("tif") {
            files.push(path);
        }
    }
    files.sort();

    let mut bands = BandMap::new();
    for path in files {
        let name = band_name(&path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Discovered band {:?} -> {:?}", name, file_name);
        if let Some(previous) = bands.insert(name.clone(), BandFile { path: file_name.clone() }) {
            return Err(BandError::Duplicate {
                name,
                first: previous.path,
                second: file_name,
            });
        }
    }

    if bands.is_empty() {
        return Err(BandError::NoBands(dir.to_path_buf()));
    }
    Ok(bands)
}
