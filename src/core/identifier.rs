use chrono::{Duration, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

use crate::core::temporal::{self, TemporalError};
use crate::types::PlatformCode;

/// Errors encountered while parsing a scene identifier
#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("directory name does not match the Landsat scene grammar: {0:?}")]
    Malformed(String),
    #[error("day-of-year out of range (1-366): {0}")]
    DayOfYearOutOfRange(u32),
}

/// Processing level fixed by the LEDAPS surface-reflectance product family.
pub const PROCESSING_LEVEL: &str = "sr_refl";
/// Product type fixed by the LEDAPS surface-reflectance product family.
pub const PRODUCT_TYPE: &str = "LEDAPS";

/// Fields embedded in a Landsat scene identifier such as `LC80120312014100`.
///
/// The grammar is positional with no separators: a 3-letter platform code,
/// 3-digit WRS path, 3-digit WRS row, 4-digit year, 3-digit day-of-year.
/// Trailing characters (the ground-station suffix of a full scene ID) are
/// permitted and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentifier {
    pub platform: PlatformCode,
    pub path: u16,
    pub row: u16,
    pub year: i32,
    pub day_of_year: u32,
}

impl ProductIdentifier {
    /// Parse a directory stem against the scene-identifier grammar.
    pub fn parse(stem: &str) -> Result<Self, IdentifierError> {
        let pattern = Regex::new(
            r"^(?P<code>LC8|LE7|LT5)(?P<path>[0-9]{3})(?P<row>[0-9]{3})(?P<year>[0-9]{4})(?P<doy>[0-9]{3})",
        )
        .map_err(|_| IdentifierError::Malformed(stem.to_string()))?;

        let caps = pattern
            .captures(stem)
            .ok_or_else(|| IdentifierError::Malformed(stem.to_string()))?;

        let malformed = || IdentifierError::Malformed(stem.to_string());
        let platform: PlatformCode = caps["code"].parse().map_err(|_| malformed())?;
        let path: u16 = caps["path"].parse().map_err(|_| malformed())?;
        let row: u16 = caps["row"].parse().map_err(|_| malformed())?;
        let year: i32 = caps["year"].parse().map_err(|_| malformed())?;
        let day_of_year: u32 = caps["doy"].parse().map_err(|_| malformed())?;

        if !(1..=366).contains(&day_of_year) {
            return Err(IdentifierError::DayOfYearOutOfRange(day_of_year));
        }

        Ok(ProductIdentifier {
            platform,
            path,
            row,
            year,
            day_of_year,
        })
    }

    /// Product creation timestamp: midnight of January 1st of the scene year
    /// plus `day_of_year` days, resolved through the same timestamp parser
    /// the rest of the pipeline uses.
    pub fn creation_dt(&self) -> Result<NaiveDateTime, TemporalError> {
        let jan1 = temporal::parse_timestamp(&format!("{:04}0101T00:00:00", self.year))?;
        Ok(jan1 + Duration::days(i64::from(self.day_of_year)))
    }
}
