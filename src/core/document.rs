use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::bands::BandMap;
use crate::core::identifier::ProductIdentifier;
use crate::core::projection::Projection;
use crate::core::temporal::AcquisitionWindow;
use crate::io::espa::EspaMetadata;
use crate::types::{CornerSet, LonLat};

/// Errors encountered while assembling a dataset document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("refusing to assemble a document with an empty `{0}` field")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
}

/// Receiving ground station plus the signal window it observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundStation {
    pub code: String,
    pub name: String,
    pub aos: String,
    pub los: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    pub groundstation: GroundStation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub from_dt: String,
    pub to_dt: String,
    pub center_dt: String,
    pub coord: CornerSet<LonLat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpatial {
    pub projection: Projection,
}

/// WRS path/row reference point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefPoint {
    pub path: u16,
    pub row: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub satellite_ref_point_start: RefPoint,
    pub satellite_ref_point_end: RefPoint,
    pub bands: BandMap,
}

/// Provenance block, emitted empty and reserved for source-dataset links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Lineage {
    pub source_datasets: BTreeMap<String, String>,
}

/// The complete per-scene metadata document written to
/// `agdc-metadata.yaml`. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub id: Uuid,
    pub processing_level: String,
    pub product_type: String,
    pub creation_dt: String,
    pub platform: Platform,
    pub instrument: Instrument,
    pub acquisition: Acquisition,
    pub extent: Extent,
    pub format: FormatTag,
    pub grid_spatial: GridSpatial,
    pub image: Image,
    pub lineage: Lineage,
}

/// Everything the assembler combines into one document.
#[derive(Debug, Clone)]
pub struct SceneParts<'a> {
    pub identifier: &'a ProductIdentifier,
    pub metadata: &'a EspaMetadata,
    pub station_code: &'a str,
    pub station_name: &'a str,
    pub window: AcquisitionWindow,
    pub projection: Projection,
    pub coord: CornerSet<LonLat>,
    pub bands: BandMap,
    pub processing_level: &'a str,
    pub product_type: &'a str,
    pub creation_dt: NaiveDateTime,
}

/// Assemble the final document.
///
/// Each invocation mints a fresh identifier, so two runs over identical
/// inputs agree on every field except `id`. The start and end reference
/// points are the same path/row: one scene covers exactly one WRS cell.
pub fn assemble(parts: SceneParts<'_>) -> Result<DatasetDocument, DocumentError> {
    if parts.metadata.satellite.is_empty() {
        return Err(DocumentError::EmptyField("satellite"));
    }
    if parts.metadata.instrument.is_empty() {
        return Err(DocumentError::EmptyField("instrument"));
    }

    let ref_point = RefPoint {
        path: parts.identifier.path,
        row: parts.identifier.row,
    };

    Ok(DatasetDocument {
        id: Uuid::new_v4(),
        processing_level: parts.processing_level.to_string(),
        product_type: parts.product_type.to_string(),
        creation_dt: parts.creation_dt.to_string(),
        platform: Platform {
            code: parts.metadata.satellite.clone(),
        },
        instrument: Instrument {
            name: parts.metadata.instrument.clone(),
        },
        acquisition: Acquisition {
            groundstation: GroundStation {
                code: parts.station_code.to_string(),
                name: parts.station_name.to_string(),
                aos: parts.window.aos.to_string(),
                los: parts.window.los.to_string(),
            },
        },
        extent: Extent {
            from_dt: parts.window.aos.to_string(),
            to_dt: parts.window.los.to_string(),
            center_dt: parts.window.center.to_string(),
            coord: parts.coord,
        },
        format: FormatTag {
            name: "GeoTiff".to_string(),
        },
        grid_spatial: GridSpatial {
            projection: parts.projection,
        },
        image: Image {
            satellite_ref_point_start: ref_point.clone(),
            satellite_ref_point_end: ref_point,
            bands: parts.bands,
        },
        lineage: Lineage::default(),
    })
}
