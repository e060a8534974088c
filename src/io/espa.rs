use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;
use tracing::debug;

/// Namespace of the ESPA metadata schema this reader understands.
pub const ESPA_NAMESPACE: &str = "http://espa.cr.usgs.gov/v1.2";

/// Byte range of the ground-station code inside an LPGS metadata filename.
const STATION_CODE_OFFSET: std::ops::Range<usize> = 16..19;

/// Errors encountered when reading ESPA metadata sidecars
#[derive(Debug, Error)]
pub enum EspaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("no metadata sidecar (.xml) found in {0:?}")]
    MissingMetadataFile(PathBuf),
    #[error("expected exactly one metadata sidecar in {dir:?}, found {}: {candidates:?}", .candidates.len())]
    AmbiguousMetadataFile {
        dir: PathBuf,
        candidates: Vec<String>,
    },
    #[error("unexpected document namespace {found:?} (expected {:?})", ESPA_NAMESPACE)]
    Namespace { found: String },
    #[error("missing field `{0}` in ESPA metadata")]
    MissingField(&'static str),
    #[error("LPGS metadata filename too short to carry a station code: {0:?}")]
    ShortLpgsFilename(String),
}

/// Scalar fields extracted from an ESPA `global_metadata` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspaMetadata {
    pub satellite: String,
    pub instrument: String,
    /// Acquisition calendar date with dashes stripped (`YYYYMMDD`).
    pub acquisition_date: String,
    /// Scene-center time of day truncated to second precision (`HH:MM:SS`).
    pub scene_center_time: String,
    pub lpgs_metadata_file: String,
}

impl EspaMetadata {
    /// Concatenated date+time string fed to the temporal resolver.
    pub fn center_timestamp_input(&self) -> String {
        format!("{}T{}", self.acquisition_date, self.scene_center_time)
    }

    /// Ground-station code embedded at a fixed offset of the LPGS metadata
    /// filename.
    pub fn ground_station_code(&self) -> Result<&str, EspaError> {
        self.lpgs_metadata_file
            .get(STATION_CODE_OFFSET)
            .ok_or_else(|| EspaError::ShortLpgsFilename(self.lpgs_metadata_file.clone()))
    }
}

/// Locate the single non-auxiliary XML sidecar of a scene directory.
///
/// Zero candidates and more than one candidate are both hard errors; the
/// ambiguous case reports every match.
pub fn find_metadata_file(dir: &Path) -> Result<PathBuf, EspaError> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".xml") && !name.ends_with("aux.xml") {
            candidates.push(name);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(EspaError::MissingMetadataFile(dir.to_path_buf())),
        1 => Ok(dir.join(&candidates[0])),
        _ => Err(EspaError::AmbiguousMetadataFile {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}

/// Parse the scalar acquisition fields from an ESPA metadata document.
pub fn read_metadata(path: &Path) -> Result<EspaMetadata, EspaError> {
    let mut reader = Reader::from_file(path)?;
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut curr = String::new();
    let mut saw_root = false;
    let mut in_global_metadata = false;

    let mut satellite = String::new();
    let mut instrument = String::new();
    let mut acquisition_date = String::new();
    let mut scene_center_time = String::new();
    let mut lpgs_metadata_file = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if !saw_root {
                    saw_root = true;
                    let mut found = String::new();
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"xmlns" {
                            found = String::from_utf8_lossy(&attr.value).to_string();
                        }
                    }
                    if found != ESPA_NAMESPACE {
                        return Err(EspaError::Namespace { found });
                    }
                }
                if tag == "global_metadata" {
                    in_global_metadata = true;
                }
                curr = tag;
            }
            Event::End(ref e) => {
                if e.name().as_ref() == b"global_metadata" {
                    in_global_metadata = false;
                }
                curr.clear();
            }
            Event::Text(e) => {
                if !in_global_metadata {
                    continue;
                }
                let txt = e.unescape()?;
                match curr.as_str() {
                    "satellite" => satellite = txt.to_string(),
                    "instrument" => instrument = txt.to_string(),
                    "acquisition_date" => acquisition_date = txt.replace('-', ""),
                    // keep HH:MM:SS, drop fractional seconds and zone suffix
                    "scene_center_time" => scene_center_time = txt.chars().take(8).collect(),
                    "lpgs_metadata_file" => lpgs_metadata_file = txt.to_string(),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    debug!("Parsed ESPA metadata from {:?}", path);

    if satellite.is_empty() {
        return Err(EspaError::MissingField("satellite"));
    }
    if instrument.is_empty() {
        return Err(EspaError::MissingField("instrument"));
    }
    if acquisition_date.is_empty() {
        return Err(EspaError::MissingField("acquisition_date"));
    }
    if scene_center_time.is_empty() {
        return Err(EspaError::MissingField("scene_center_time"));
    }
    if lpgs_metadata_file.is_empty() {
        return Err(EspaError::MissingField("lpgs_metadata_file"));
    }

    Ok(EspaMetadata {
        satellite,
        instrument,
        acquisition_date,
        scene_center_time,
        lpgs_metadata_file,
    })
}
