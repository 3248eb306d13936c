//! Line identifier type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A stable identifier for a line within one network (e.g. `"Line-1"`).
///
/// Line ids are opaque, case-sensitive strings. The only validation is that
/// they are non-empty and carry no surrounding whitespace, so that ids read
/// from hand-written descriptions compare exactly.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineId;
///
/// let id = LineId::parse("Line-1").unwrap();
/// assert_eq!(id.as_str(), "Line-1");
///
/// assert!(LineId::parse("").is_err());
/// assert!(LineId::parse(" Line-1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "line id cannot be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidLineId {
                reason: "line id must not start or end with whitespace",
            });
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LineId::parse(&s).map_err(serde::de::Error::custom)
    }
}
