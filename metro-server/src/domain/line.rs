//! Transit line types.
//!
//! A `Line` is an ordered run of distinct stations plus the display metadata
//! needed to describe travel along it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{LineId, NetworkError};

/// Color used for lines whose description carries none.
pub const DEFAULT_LINE_COLOR: &str = "#666666";

/// Operational status of a line.
///
/// Status is descriptive only; every line is routable regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStatus {
    #[default]
    #[serde(rename = "Operational")]
    Operational,
    #[serde(rename = "Partially Operational")]
    PartiallyOperational,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
}

/// A line in a transit network.
///
/// # Invariants
///
/// - Station names are non-empty and unique within the line
/// - Terminals default to the first and last station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    color: Option<String>,
    status: LineStatus,
    route: Option<String>,
    start_terminal: Option<String>,
    end_terminal: Option<String>,
    stations: Vec<String>,
}

impl Line {
    /// Creates a line from its id, display name and ordered stations.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::EmptyStationName` if a station name is blank,
    /// or `NetworkError::DuplicateStation` if a station appears twice.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        stations: Vec<String>,
    ) -> Result<Self, NetworkError> {
        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if station.trim().is_empty() {
                return Err(NetworkError::EmptyStationName(id));
            }
            if !seen.insert(station.as_str()) {
                return Err(NetworkError::DuplicateStation {
                    line: id,
                    station: station.clone(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            color: None,
            status: LineStatus::default(),
            route: None,
            start_terminal: None,
            end_terminal: None,
            stations,
        })
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: LineStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the free-text route label (e.g. "Joka ↔ Esplanade").
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Overrides the terminal names used for direction text.
    pub fn with_terminals(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_terminal = Some(start.into());
        self.end_terminal = Some(end.into());
        self
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color, falling back to [`DEFAULT_LINE_COLOR`].
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_LINE_COLOR)
    }

    pub fn status(&self) -> LineStatus {
        self.status
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Ordered station names.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Terminal reached when travelling towards index 0.
    pub fn start_terminal(&self) -> &str {
        self.start_terminal
            .as_deref()
            .or_else(|| self.stations.first().map(String::as_str))
            .unwrap_or_default()
    }

    /// Terminal reached when travelling towards the last index.
    pub fn end_terminal(&self) -> &str {
        self.end_terminal
            .as_deref()
            .or_else(|| self.stations.last().map(String::as_str))
            .unwrap_or_default()
    }

    /// Position of a station in the line, if it is served.
    pub fn position(&self, station: &str) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Direction text for travel between two positions on this line.
    ///
    /// Equal positions yield an empty string: a one-station run has no
    /// direction of travel.
    pub fn direction(&self, from: usize, to: usize) -> String {
        use std::cmp::Ordering;

        match to.cmp(&from) {
            Ordering::Greater => format!("Towards {}", self.end_terminal()),
            Ordering::Less => format!("Towards {}", self.start_terminal()),
            Ordering::Equal => String::new(),
        }
    }
}
