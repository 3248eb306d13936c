//! Serialized network descriptions.
//!
//! These are the raw, unvalidated shapes read from a description file.
//! Converting them into domain types is where validation happens.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, LineStatus, NetworkError};

/// Description of one line as it appears in a description file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDescription {
    /// Stable line id (e.g. "Line-1")
    pub id: String,

    /// Display name (e.g. "Blue Line")
    pub name: String,

    /// Display color, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Operational status
    #[serde(default)]
    pub status: LineStatus,

    /// Free-text route label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Terminal named when travelling towards the first station
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_terminal: Option<String>,

    /// Terminal named when travelling towards the last station
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_terminal: Option<String>,

    /// Ordered station names
    pub stations: Vec<String>,
}

impl LineDescription {
    /// Validate this description and build a domain `Line`.
    pub fn into_line(self) -> Result<Line, NetworkError> {
        let id = LineId::parse(&self.id)?;
        let mut line = Line::new(id, self.name, self.stations)?.with_status(self.status);

        if let Some(color) = self.color {
            line = line.with_color(color);
        }
        if let Some(route) = self.route {
            line = line.with_route(route);
        }

        // A single override falls back to the station at that end.
        let start = self
            .start_terminal
            .unwrap_or_else(|| line.start_terminal().to_string());
        let end = self
            .end_terminal
            .unwrap_or_else(|| line.end_terminal().to_string());

        Ok(line.with_terminals(start, end))
    }
}

/// Description of one city network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// City name (e.g. "Kolkata")
    pub city: String,

    /// URL-safe key; derived from the city when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Operator or system name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Lines in declaration order
    #[serde(default)]
    pub lines: Vec<LineDescription>,
}

impl NetworkDescription {
    /// The slug used to look this network up.
    ///
    /// Explicit slugs are lowercased; derived slugs also replace spaces
    /// with `-`.
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.to_lowercase(),
            None => slugify(&self.city),
        }
    }
}

/// Lowercase a name and join its words with `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
