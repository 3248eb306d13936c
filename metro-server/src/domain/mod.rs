//! Domain types for the metro route planner.
//!
//! This module contains the validated building blocks of a network
//! description. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod error;
mod line;
mod line_id;

pub use error::NetworkError;
pub use line::{DEFAULT_LINE_COLOR, Line, LineStatus};
pub use line_id::{InvalidLineId, LineId};
