//! Domain error types.
//!
//! These errors describe structurally invalid network descriptions. They are
//! raised at load time only; query-time failures live in the planner.

use super::{InvalidLineId, LineId};

/// A network description that cannot be turned into a routable network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A line lists the same station more than once
    #[error("line {line}: station {station:?} appears more than once")]
    DuplicateStation { line: LineId, station: String },

    /// Two lines in the same network share an id
    #[error("line id {0} is declared more than once")]
    DuplicateLineId(LineId),

    /// A line id failed validation
    #[error(transparent)]
    InvalidLineId(#[from] InvalidLineId),

    /// A line lists an empty (or all-whitespace) station name
    #[error("line {0}: station names must not be empty")]
    EmptyStationName(LineId),
}
