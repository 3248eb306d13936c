//! Network model.
//!
//! Turns line-based network descriptions into an immutable graph of
//! (station, line) nodes plus precomputed station listings.

mod description;
mod graph;
mod transit;

pub use description::{LineDescription, NetworkDescription, slugify};
pub use graph::{Edge, EdgeKind, Graph, Node, NodeId, StationId};
pub use transit::Network;
