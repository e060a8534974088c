use std::collections::BTreeMap;
use thiserror::Error;

/// A ground-station code with no entry in the receiving-station table
#[derive(Debug, Error)]
#[error("unknown ground station code: {0:?}")]
pub struct UnknownStation(pub String);

/// EODS receiving stations, keyed by the 3-character code embedded in LPGS
/// metadata filenames.
const STATIONS: &[(&str, &str)] = &[
    ("001", "AGS"),
    ("002", "ASN"),
    ("003", "BJC"),
    ("004", "BKT"),
    ("005", "CHM"),
    ("006", "CUB"),
    ("007", "DKI"),
    ("008", "EDC"),
    ("009", "GLC"),
    ("010", "GNC"),
    ("011", "HOA"),
    ("012", "HEOC"),
    ("013", "IKR"),
    ("014", "KIS"),
    ("015", "LGS"),
    ("016", "MGR"),
    ("017", "MOR"),
    ("018", "MPS"),
    ("019", "MTI"),
    ("020", "PAC"),
    ("021", "PFS"),
    ("022", "SGS"),
    ("023", "TKSC"),
    ("028", "COA"),
    ("029", "JSA"),
    ("030", "KHC"),
    ("031", "MLK"),
    ("032", "LGN"),
];

/// Immutable lookup table from ground-station code to station name.
///
/// Owned by the caller and passed down to the preparation pipeline; a code
/// missing from the table is a hard error rather than a silently missing
/// value.
#[derive(Debug, Clone)]
pub struct StationTable {
    entries: BTreeMap<&'static str, &'static str>,
}

impl Default for StationTable {
    fn default() -> Self {
        StationTable {
            entries: STATIONS.iter().copied().collect(),
        }
    }
}

impl StationTable {
    pub fn resolve(&self, code: &str) -> Result<&'static str, UnknownStation> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| UnknownStation(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        let table = StationTable::default();
        assert_eq!(table.resolve("032").unwrap(), "LGN");
        assert_eq!(table.resolve("023").unwrap(), "TKSC");
        assert_eq!(table.resolve("001").unwrap(), "AGS");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let table = StationTable::default();
        let err = table.resolve("999").unwrap_err();
        assert_eq!(err.0, "999");
    }
}
