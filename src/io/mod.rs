//! I/O layer for reading ESPA sidecars and GDAL-backed rasters.
//! Provides the `espa` metadata reader, `gdal` raster-header adapters, and
//! `writers` for the YAML sidecar output.
pub mod espa;
pub use espa::{EspaError, EspaMetadata, find_metadata_file, read_metadata};

pub mod gdal;
pub use self::gdal::{Bounds, GdalError, RasterGrid, read_grid};

pub mod writers;
