//! Itinerary types.
//!
//! An `Itinerary` is the user-facing form of a search result: the path
//! broken into per-line segments, with direction text, time and fare.

use chrono::Duration;

use crate::domain::LineId;
use crate::network::{Network, NodeId};

use super::config::PlannerConfig;

/// A maximal run of a route spent on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    line_id: LineId,
    line_name: String,
    color: String,
    stations: Vec<String>,
    direction: String,
}

impl Segment {
    pub fn line_id(&self) -> &LineId {
        &self.line_id
    }

    pub fn line_name(&self) -> &str {
        &self.line_name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Stations on this run, boarding station first.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// e.g. "Towards Kavi Subhash"; empty for a one-station run.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn board_station(&self) -> &str {
        self.stations.first().map(String::as_str).unwrap_or_default()
    }

    pub fn alight_station(&self) -> &str {
        self.stations.last().map(String::as_str).unwrap_or_default()
    }
}

/// A complete route from source to destination.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments meet at an interchange station: the last station
///   of one is the first station of the next
/// - `path` lists each physical station once, so an interchange station
///   appears once in `path` but in two segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    segments: Vec<Segment>,
    path: Vec<String>,
    estimated_time: Duration,
    fare: u32,
    smart_card_fare: u32,
}

impl Itinerary {
    /// Assemble an itinerary from a node path found by the search.
    ///
    /// A new segment starts exactly where the path takes a transfer edge.
    pub(super) fn from_path(network: &Network, path: &[NodeId], config: &PlannerConfig) -> Self {
        let graph = network.graph();

        let mut runs: Vec<Run> = Vec::new();
        let mut stations: Vec<String> = Vec::new();

        for &id in path {
            let node = graph.node(id);
            let name = graph.station_name(node.station);

            if stations.last().map(String::as_str) != Some(name) {
                stations.push(name.to_string());
            }

            match runs.last_mut() {
                Some(run) if run.line == node.line => {
                    run.stations.push(name.to_string());
                    run.last_position = node.position;
                }
                _ => runs.push(Run {
                    line: node.line,
                    first_position: node.position,
                    last_position: node.position,
                    stations: vec![name.to_string()],
                }),
            }
        }

        let segments: Vec<Segment> = runs.into_iter().map(|run| run.finish(network)).collect();

        let total_stations = stations.len();
        let interchanges = segments.len().saturating_sub(1);
        let fare = config.fare(total_stations);

        Self {
            estimated_time: config.estimated_time(total_stations, interchanges),
            smart_card_fare: config.smart_card_fare(fare),
            fare,
            segments,
            path: stations,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Physical stations in travel order, each listed once.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn origin(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn destination(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of stations on the route, origin and destination included.
    pub fn total_stations(&self) -> usize {
        self.path.len()
    }

    /// Number of line changes.
    pub fn interchanges(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn estimated_time(&self) -> Duration {
        self.estimated_time
    }

    pub fn estimated_minutes(&self) -> i64 {
        self.estimated_time.num_minutes()
    }

    pub fn fare(&self) -> u32 {
        self.fare
    }

    pub fn smart_card_fare(&self) -> u32 {
        self.smart_card_fare
    }

    /// True if the route needs no change of line.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1
    }
}

/// A segment under construction.
struct Run {
    line: usize,
    first_position: usize,
    last_position: usize,
    stations: Vec<String>,
}

impl Run {
    fn finish(self, network: &Network) -> Segment {
        let line = network.line(self.line);
        Segment {
            line_id: line.id().clone(),
            line_name: line.name().to_string(),
            color: line.color().to_string(),
            direction: line.direction(self.first_position, self.last_position),
            stations: self.stations,
        }
    }
}
