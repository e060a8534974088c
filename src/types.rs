//! Shared types used across LSPREP.
//! Includes the `PlatformCode` scene-identifier prefix and the point/corner
//! types shared by the projection and document modules.
use serde::{Deserialize, Serialize};

/// Platform prefix of a Landsat scene identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PlatformCode {
    /// Landsat 8 OLI/TIRS
    LC8,
    /// Landsat 7 ETM+
    LE7,
    /// Landsat 5 TM
    LT5,
}

impl std::fmt::Display for PlatformCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlatformCode::LC8 => "LC8",
            PlatformCode::LE7 => "LE7",
            PlatformCode::LT5 => "LT5",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for PlatformCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LC8" => Ok(PlatformCode::LC8),
            "LE7" => Ok(PlatformCode::LE7),
            "LT5" => Ok(PlatformCode::LT5),
            other => Err(format!("unknown platform code: {}", other)),
        }
    }
}

/// A point in the raster's native projected coordinates.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

/// A geographic point, longitude/latitude in the native datum.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// The four named corners of a scene, in whatever coordinate space `T` is.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CornerSet<T> {
    pub ul: T,
    pub ur: T,
    pub ll: T,
    pub lr: T,
}
