//! A single city network.

use std::collections::HashSet;

use crate::domain::{Line, LineId, NetworkError};

use super::description::{NetworkDescription, slugify};
use super::graph::Graph;

/// A validated network with its precomputed graph.
///
/// Built once and read-only afterwards. Station listings are computed at
/// construction so queries never rebuild them.
#[derive(Debug, Clone)]
pub struct Network {
    city: String,
    slug: String,
    system: Option<String>,
    lines: Vec<Line>,
    graph: Graph,

    /// All station names, sorted and de-duplicated.
    stations: Vec<String>,

    /// Stations served by two or more lines, sorted.
    interchanges: Vec<String>,
}

impl Network {
    /// Validate a description and build its graph.
    pub fn build(description: NetworkDescription) -> Result<Self, NetworkError> {
        let slug = description.slug();
        let lines = description
            .lines
            .into_iter()
            .map(|l| l.into_line())
            .collect::<Result<Vec<_>, _>>()?;

        let mut network = Self::from_lines(description.city, lines)?;
        network.slug = slug;
        network.system = description.system;
        Ok(network)
    }

    /// Build a network directly from domain lines.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::DuplicateLineId` if two lines share an id.
    pub fn from_lines(city: impl Into<String>, lines: Vec<Line>) -> Result<Self, NetworkError> {
        let mut ids: HashSet<&LineId> = HashSet::with_capacity(lines.len());
        for line in &lines {
            if !ids.insert(line.id()) {
                return Err(NetworkError::DuplicateLineId(line.id().clone()));
            }
        }

        let graph = Graph::build(&lines);

        let mut stations = graph.station_names().to_vec();
        stations.sort();

        let interchanges: Vec<String> = stations
            .iter()
            .filter(|name| {
                graph
                    .station_id(name)
                    .is_some_and(|id| graph.is_interchange(id))
            })
            .cloned()
            .collect();

        let city = city.into();
        Ok(Self {
            slug: slugify(&city),
            city,
            system: None,
            lines,
            graph,
            stations,
            interchanges,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Lookup key within a catalog (lowercase).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// Lines in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    pub fn line_by_id(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.id().as_str() == id)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every station name, sorted and de-duplicated.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Stations served by two or more lines, sorted.
    pub fn interchange_stations(&self) -> &[String] {
        &self.interchanges
    }

    /// True if the exact station name is served by any line.
    pub fn contains_station(&self, name: &str) -> bool {
        self.graph.station_id(name).is_some()
    }

    /// Lines serving a station, in declaration order.
    ///
    /// Unknown stations yield an empty list.
    pub fn station_lines(&self, name: &str) -> Vec<&Line> {
        let Some(id) = self.graph.station_id(name) else {
            return Vec::new();
        };
        self.graph
            .nodes_at(id)
            .iter()
            .map(|&node| &self.lines[self.graph.node(node).line])
            .collect()
    }
}
