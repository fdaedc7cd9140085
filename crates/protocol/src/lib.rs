use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a station in the route network. Stations have no
/// structure beyond identity; any id appearing as an origin or a
/// destination of some route is a station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub i64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StationId)
    }
}

/// One parsed input line: a directed route from `origin` to
/// `destination` covering `distance` km. Distances may be fractional;
/// parallel routes between the same pair are distinct alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRecord {
    pub origin: StationId,
    pub destination: StationId,
    pub distance: f64,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 3 comma-separated fields, found {found} in {line:?}")]
    FieldCount { found: usize, line: String },

    #[error("invalid station id {field:?} in {line:?}")]
    InvalidStation {
        field: String,
        line: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid distance {field:?} in {line:?}")]
    InvalidDistance {
        field: String,
        line: String,
        #[source]
        source: ParseFloatError,
    },
}

impl FromStr for RouteRecord {
    type Err = RecordError;

    /// Parses `origin, destination, distance`. Each field is trimmed;
    /// exactly three fields are required.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(RecordError::FieldCount {
                found: fields.len(),
                line: line.to_string(),
            });
        }

        let station = |field: &str| -> Result<StationId, RecordError> {
            field.parse().map_err(|source| RecordError::InvalidStation {
                field: field.to_string(),
                line: line.to_string(),
                source,
            })
        };

        let origin = station(fields[0])?;
        let destination = station(fields[1])?;
        let distance = fields[2]
            .parse()
            .map_err(|source| RecordError::InvalidDistance {
                field: fields[2].to_string(),
                line: line.to_string(),
                source,
            })?;

        Ok(RouteRecord {
            origin,
            destination,
            distance,
        })
    }
}
