//! Fewest-changes route search.
//!
//! Runs Dijkstra over (station, line) nodes with a two-part cost compared
//! lexicographically: interchanges first, then stations ridden. A transfer
//! edge costs one interchange and no stations; a ride edge costs one station.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use crate::network::{EdgeKind, Graph, Network, NodeId, StationId};

use super::config::PlannerConfig;
use super::itinerary::Itinerary;

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationSide {
    Source,
    Destination,
}

impl fmt::Display for StationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationSide::Source => f.write_str("source"),
            StationSide::Destination => f.write_str("destination"),
        }
    }
}

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station name not present in the network
    #[error("unknown {side} station: {name:?}")]
    InvalidStation { side: StationSide, name: String },

    /// Source and destination are the same station
    #[error("source and destination are the same station: {0:?}")]
    TrivialQuery(String),

    /// Both stations exist but nothing connects them
    #[error("no route from {from:?} to {to:?}")]
    NoRouteFound { from: String, to: String },
}

/// Lexicographic search cost.
///
/// Field order matters: the derived `Ord` compares interchanges first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost {
    pub interchanges: usize,
    pub stations: usize,
}

impl Cost {
    pub const ZERO: Cost = Cost {
        interchanges: 0,
        stations: 0,
    };

    /// Cost after traversing one more edge.
    pub fn after(self, kind: EdgeKind) -> Cost {
        match kind {
            EdgeKind::Ride => Cost {
                stations: self.stations + 1,
                ..self
            },
            EdgeKind::Transfer => Cost {
                interchanges: self.interchanges + 1,
                ..self
            },
        }
    }
}

/// Route planner over one network.
///
/// Holds only shared references, so any number of planners can query the
/// same network concurrently.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Find the route with the fewest interchanges, then fewest stations.
    ///
    /// # Errors
    ///
    /// - `InvalidStation` if either name is unknown (source checked first)
    /// - `TrivialQuery` if both names are the same station
    /// - `NoRouteFound` if no path connects the two stations
    pub fn find_route(&self, source: &str, destination: &str) -> Result<Itinerary, RouteError> {
        let graph = self.network.graph();

        let from = graph
            .station_id(source)
            .ok_or_else(|| RouteError::InvalidStation {
                side: StationSide::Source,
                name: source.to_string(),
            })?;
        let to = graph
            .station_id(destination)
            .ok_or_else(|| RouteError::InvalidStation {
                side: StationSide::Destination,
                name: destination.to_string(),
            })?;

        if from == to {
            return Err(RouteError::TrivialQuery(source.to_string()));
        }

        let path = shortest_path(graph, from, to).ok_or_else(|| RouteError::NoRouteFound {
            from: source.to_string(),
            to: destination.to_string(),
        })?;

        Ok(Itinerary::from_path(self.network, &path, self.config))
    }
}

/// Cheapest node path from any node at `source` to any node at `destination`.
///
/// The frontier is seeded with every line serving the source at zero cost.
/// Ties are broken by node id, so results are deterministic. Because edge
/// costs are non-negative, the first destination node popped is optimal:
/// everything left in the heap costs at least as much.
pub(crate) fn shortest_path(
    graph: &Graph,
    source: StationId,
    destination: StationId,
) -> Option<Vec<NodeId>> {
    let n = graph.node_count();
    let mut best: Vec<Option<Cost>> = vec![None; n];
    let mut previous: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    for &start in graph.nodes_at(source) {
        best[start.0] = Some(Cost::ZERO);
        heap.push(Reverse((Cost::ZERO, start)));
    }

    while let Some(Reverse((cost, node))) = heap.pop() {
        if settled[node.0] {
            continue;
        }
        settled[node.0] = true;

        if graph.node(node).station == destination {
            return Some(trace_back(&previous, node));
        }

        for edge in graph.edges(node) {
            if settled[edge.to.0] {
                continue;
            }
            let next = cost.after(edge.kind);
            if best[edge.to.0].is_none_or(|known| next < known) {
                best[edge.to.0] = Some(next);
                previous[edge.to.0] = Some(node);
                heap.push(Reverse((next, edge.to)));
            }
        }
    }

    None
}

/// Follow predecessor links back to a start node.
fn trace_back(previous: &[Option<NodeId>], end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = previous[current.0] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
