//! Station/line graph.
//!
//! The unit of search is not a station but a (station, line) pair: being at
//! a station while riding a particular line. Moving along a line and
//! changing lines at a shared station are different edges with different
//! costs, so they need distinct nodes to hang off.

use std::collections::HashMap;

use crate::domain::Line;

/// Index of a station in a graph's station table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// Index of a (station, line) node in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A (station, line) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// The physical station.
    pub station: StationId,

    /// Index of the line in the network's declaration order.
    pub line: usize,

    /// Position of the station within that line.
    pub position: usize,
}

/// What traversing an edge means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Travel to an adjacent station on the same line.
    Ride,
    /// Change line without leaving the station.
    Transfer,
}

/// A directed edge to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub kind: EdgeKind,
}

/// Immutable adjacency graph over (station, line) nodes.
///
/// Node ids are assigned line by line, station by station, in declaration
/// order, and each node's edges are listed as: previous station on the
/// line, next station on the line, then transfers in line order. Building
/// the same lines twice therefore yields equal graphs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    /// Station names, in first-seen order.
    station_names: Vec<String>,

    /// Name → station id.
    station_index: HashMap<String, StationId>,

    nodes: Vec<Node>,

    adjacency: Vec<Vec<Edge>>,

    /// Interchange index: every node at a station, in line order.
    station_nodes: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Build the graph for a set of lines.
    ///
    /// Lines are assumed to be validated (no repeated station within a line).
    pub fn build(lines: &[Line]) -> Self {
        let mut graph = Graph::default();

        // Pass 1: nodes and the interchange index.
        let mut line_offsets = Vec::with_capacity(lines.len());
        for (line_idx, line) in lines.iter().enumerate() {
            line_offsets.push(graph.nodes.len());
            for (position, name) in line.stations().iter().enumerate() {
                let station = graph.intern(name);
                let node = NodeId(graph.nodes.len());
                graph.nodes.push(Node {
                    station,
                    line: line_idx,
                    position,
                });
                graph.station_nodes[station.0].push(node);
            }
        }

        // Pass 2: edges.
        graph.adjacency = vec![Vec::new(); graph.nodes.len()];
        for (line_idx, line) in lines.iter().enumerate() {
            let offset = line_offsets[line_idx];
            let len = line.stations().len();

            for position in 0..len {
                let id = offset + position;
                let mut edges = Vec::new();

                if position > 0 {
                    edges.push(Edge {
                        to: NodeId(id - 1),
                        kind: EdgeKind::Ride,
                    });
                }
                if position + 1 < len {
                    edges.push(Edge {
                        to: NodeId(id + 1),
                        kind: EdgeKind::Ride,
                    });
                }

                let station = graph.nodes[id].station;
                edges.extend(
                    graph.station_nodes[station.0]
                        .iter()
                        .filter(|other| other.0 != id)
                        .map(|&to| Edge {
                            to,
                            kind: EdgeKind::Transfer,
                        }),
                );

                graph.adjacency[id] = edges;
            }
        }

        graph
    }

    fn intern(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.station_index.get(name) {
            return id;
        }
        let id = StationId(self.station_names.len());
        self.station_names.push(name.to_string());
        self.station_index.insert(name.to_string(), id);
        self.station_nodes.push(Vec::new());
        id
    }

    /// Look up a station by exact (case-sensitive) name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_index.get(name).copied()
    }

    /// Name of a station.
    pub fn station_name(&self, id: StationId) -> &str {
        &self.station_names[id.0]
    }

    /// All station names, in first-seen order.
    pub fn station_names(&self) -> &[String] {
        &self.station_names
    }

    /// Nodes at a station, one per serving line, in line order.
    pub fn nodes_at(&self, id: StationId) -> &[NodeId] {
        &self.station_nodes[id.0]
    }

    /// True if more than one line serves the station.
    pub fn is_interchange(&self, id: StationId) -> bool {
        self.station_nodes[id.0].len() > 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Outgoing edges of a node.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn station_count(&self) -> usize {
        self.station_names.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
