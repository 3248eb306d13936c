//! Route planner.
//!
//! This module implements the core question: "how do I get from this
//! station to that one with the fewest changes of line?"
//!
//! Search runs over the precomputed (station, line) graph of a `Network`;
//! the winning path is then turned into per-line segments with direction
//! text, an estimated travel time and a banded fare.

mod config;
mod fare;
mod itinerary;
mod search;

pub use config::PlannerConfig;
pub use fare::{FareBand, FareTable, FareTableError, discounted};
pub use itinerary::{Itinerary, Segment};
pub use search::{Cost, Planner, RouteError, StationSide};
