#![doc = r#"
LSPREP — a USGS Landsat ESPA scene preparer for Data Cube ingestion.

This crate derives one `agdc-metadata.yaml` sidecar per Landsat
surface-reflectance scene directory: it parses the scene identifier from
the directory name, reads the ESPA XML sidecar, resolves the acquisition
window (correcting the ground segment's denormalized leap-second
timestamps), resolves the receiving ground station, discovers and names
the raster bands, computes the geodetic footprint from the representative
raster's native projection, and assembles the final catalog document. It
powers the LSPREP CLI and can be embedded in your own Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start: prepare one scene directory
----------------------------------------
```rust,no_run
use std::path::Path;
use lsprep::{StationTable, prepare_and_write};

fn main() -> lsprep::Result<()> {
    let stations = StationTable::default();
    let sidecar = prepare_and_write(Path::new("/data/LC80120312014100LGN00"), &stations)?;
    println!("wrote {}", sidecar.display());
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use lsprep::{StationTable, process_directories};

fn main() {
    let stations = StationTable::default();
    let report = process_directories(
        [
            Path::new("/data/LC80120312014100LGN00"),
            Path::new("/data/LE70130312013201ASN00"),
        ],
        &stations,
    );
    println!("processed={} errors={}", report.processed, report.errors);
}
```

Error handling
--------------
All public functions return `lsprep::Result<T>`; match on `lsprep::Error`
to handle specific cases. Every error is fatal for the scene directory it
concerns and for that directory only — the batch helpers report it and
continue with the next entry.

```rust,no_run
use std::path::Path;
use lsprep::{Error, StationTable, prepare_dataset};

fn main() {
    let stations = StationTable::default();
    match prepare_dataset(Path::new("/data/bad-scene"), &stations) {
        Ok(doc) => println!("prepared {}", doc.id),
        Err(Error::Espa(e)) => eprintln!("sidecar error: {e}"),
        Err(Error::Gdal(e)) => eprintln!("raster error: {e}"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — identifier grammar, temporal resolver, band discovery,
  projection, document assembly.
- [`io`] — ESPA sidecar and raster readers, YAML writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::document::DatasetDocument;
pub use crate::core::identifier::ProductIdentifier;
pub use crate::core::stations::StationTable;
pub use crate::core::temporal::AcquisitionWindow;
pub use crate::error::{Error, Result};
pub use crate::types::{CornerSet, LonLat, PlatformCode, XyPoint};

// Readers
pub use crate::io::espa::{EspaError, EspaMetadata};
pub use crate::io::gdal::{GdalError, RasterGrid};

// High-level API re-exports
pub use crate::api::{
    BatchReport, METADATA_FILENAME, prepare_and_write, prepare_dataset, process_directories,
    write_dataset,
};
