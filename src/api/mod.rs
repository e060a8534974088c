//! High-level, ergonomic library API: prepare a scene directory into a
//! dataset document, write the sidecar, and batch helpers for many
//! directories. Prefer these entrypoints over the low-level modules when
//! integrating LSPREP.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::bands::discover_bands;
use crate::core::document::{self, DatasetDocument, SceneParts};
use crate::core::identifier::{PROCESSING_LEVEL, PRODUCT_TYPE, ProductIdentifier};
use crate::core::projection::Projection;
use crate::core::stations::StationTable;
use crate::core::temporal::{self, AcquisitionWindow};
use crate::error::Result;
use crate::io::espa;
use crate::io::gdal::read_grid;
use crate::io::writers::write_dataset_yaml;

pub use crate::io::writers::METADATA_FILENAME;

/// Outcome of a batch run over several scene directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
}

/// Derive the dataset document for one scene directory.
///
/// The directory's base name must begin with a Landsat scene identifier;
/// it must hold exactly one non-auxiliary ESPA sidecar and at least one
/// `.tif` band file. The first band file in discovery order is the
/// representative raster that defines the scene grid.
pub fn prepare_dataset(dir: &Path, stations: &StationTable) -> Result<DatasetDocument> {
    let stem = dir
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let identifier = ProductIdentifier::parse(stem)?;
    let creation_dt = identifier.creation_dt()?;

    let metafile = espa::find_metadata_file(dir)?;
    let metadata = espa::read_metadata(&metafile)?;

    let station_code = metadata.ground_station_code()?.to_string();
    let station_name = stations.resolve(&station_code)?;

    let center = temporal::parse_timestamp(&metadata.center_timestamp_input())?;
    let window = AcquisitionWindow::around(center);

    let bands = discover_bands(dir)?;
    // discover_bands guarantees at least one entry; the first band in
    // discovery order defines the scene grid
    let grid = match bands.values().next() {
        Some(band) => read_grid(dir.join(&band.path))?,
        None => return Err(crate::core::bands::BandError::NoBands(dir.to_path_buf()).into()),
    };
    let projection = Projection::from(&grid);
    let coord = projection.geographic_corners()?;

    let doc = document::assemble(SceneParts {
        identifier: &identifier,
        metadata: &metadata,
        station_code: &station_code,
        station_name,
        window,
        projection,
        coord,
        bands,
        processing_level: PROCESSING_LEVEL,
        product_type: PRODUCT_TYPE,
        creation_dt,
    })?;
    Ok(doc)
}

/// Write a prepared document as the directory's `agdc-metadata.yaml`.
pub fn write_dataset(doc: &DatasetDocument, dir: &Path) -> Result<PathBuf> {
    Ok(write_dataset_yaml(doc, dir)?)
}

/// Prepare one scene directory and write its sidecar. Assembly and write
/// are all-or-nothing: a failure anywhere leaves the directory untouched.
pub fn prepare_and_write(dir: &Path, stations: &StationTable) -> Result<PathBuf> {
    let doc = prepare_dataset(dir, stations)?;
    write_dataset(&doc, dir)
}

/// Process many scene directories sequentially, continuing past failures.
///
/// Each directory is independent: an error is reported and counted, and
/// processing moves on to the next entry.
pub fn process_directories<I, P>(dirs: I, stations: &StationTable) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    for dir in dirs {
        let dir = dir.as_ref();
        info!("Processing {:?}", dir);
        match prepare_and_write(dir, stations) {
            Ok(sidecar) => {
                info!("Successfully prepared {:?} -> {:?}", dir, sidecar);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", dir, e);
                report.errors += 1;
            }
        }
    }
    report
}
