use chrono::{Duration, NaiveDateTime, Timelike};
use thiserror::Error;

/// Errors encountered while resolving acquisition timestamps
#[derive(Debug, Error)]
pub enum TemporalError {
    #[error("invalid timestamp {input:?}: {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },
}

/// Whole-scene acquisition time, in seconds.
pub const SCENE_DURATION_SECONDS: i64 = 24;

/// Timestamp renderings accepted from scene identifiers and ESPA sidecars.
const FORMATS: &[&str] = &["%Y%m%dT%H:%M:%S", "%Y%m%dT%H%M%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_fields(input: &str) -> Result<NaiveDateTime, TemporalError> {
    let mut result = NaiveDateTime::parse_from_str(input, FORMATS[0]);
    for format in &FORMATS[1..] {
        if result.is_ok() {
            break;
        }
        result = NaiveDateTime::parse_from_str(input, format);
    }
    result.map_err(|source| TemporalError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Rewrite a denormalized `:60` seconds field to `:00` and fold the lost
/// minute back in.
fn fold_leap_second(input: &str) -> Result<NaiveDateTime, TemporalError> {
    let rewritten = format!("{}00", &input[..input.len() - 2]);
    Ok(parse_fields(&rewritten)? + Duration::minutes(1))
}

/// Parse a concatenated date+time string.
///
/// Ground-segment software occasionally emits a leap second as a literal
/// `60` in the seconds field (`20140410T235960`). Such a timestamp is
/// normalized to the start of the following minute; every other parse
/// failure propagates unchanged.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TemporalError> {
    match parse_fields(input) {
        // chrono itself admits `:60` as a leap-second representation
        // (sub-second field >= 1s); route it through the same correction.
        Ok(dt) if dt.time().nanosecond() >= 1_000_000_000 => fold_leap_second(input),
        Ok(dt) => Ok(dt),
        Err(err) => {
            if input.ends_with("60") {
                fold_leap_second(input)
            } else {
                Err(err)
            }
        }
    }
}

/// Acquisition window of one scene: AOS and LOS sit symmetrically around
/// the scene-center timestamp, half the fixed scene duration each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionWindow {
    pub center: NaiveDateTime,
    pub aos: NaiveDateTime,
    pub los: NaiveDateTime,
}

impl AcquisitionWindow {
    pub fn around(center: NaiveDateTime) -> Self {
        let aos = center - Duration::seconds(SCENE_DURATION_SECONDS / 2);
        let los = aos + Duration::seconds(SCENE_DURATION_SECONDS);
        AcquisitionWindow { center, aos, los }
    }
}
