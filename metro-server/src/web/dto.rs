//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineStatus};
use crate::network::Network;
use crate::planner::{Itinerary, Segment};

/// Summary of one network in the catalog.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Lookup key (e.g. "kolkata")
    pub slug: String,

    /// City name
    pub city: String,

    /// Operator or system name
    pub system: Option<String>,

    pub line_count: usize,
    pub station_count: usize,
    pub interchange_count: usize,
}

impl NetworkSummary {
    pub fn from_network(network: &Network) -> Self {
        Self {
            slug: network.slug().to_string(),
            city: network.city().to_string(),
            system: network.system().map(str::to_string),
            line_count: network.lines().len(),
            station_count: network.stations().len(),
            interchange_count: network.interchange_stations().len(),
        }
    }
}

/// Response listing all networks.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworksResponse {
    pub networks: Vec<NetworkSummary>,
}

/// A line with its full station list.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,
    pub color: String,
    pub status: LineStatus,
    pub route: Option<String>,
    pub start_terminal: String,
    pub end_terminal: String,
    pub stations: Vec<String>,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            status: line.status(),
            route: line.route().map(str::to_string),
            start_terminal: line.start_terminal().to_string(),
            end_terminal: line.end_terminal().to_string(),
            stations: line.stations().to_vec(),
        }
    }
}

/// Response listing a network's lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Response listing station names, sorted.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Short reference to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRef {
    pub id: String,
    pub name: String,
}

impl LineRef {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
        }
    }
}

/// An interchange station and the lines meeting there.
#[derive(Debug, Serialize, Deserialize)]
pub struct InterchangeResult {
    pub station: String,
    pub lines: Vec<LineRef>,
}

/// Response listing interchange stations.
#[derive(Debug, Serialize, Deserialize)]
pub struct InterchangesResponse {
    pub interchanges: Vec<InterchangeResult>,
}

/// Response listing the lines serving one station.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationLinesResponse {
    pub station: String,
    pub lines: Vec<LineRef>,
}

/// Request to find a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Source station name (exact match)
    pub from: String,

    /// Destination station name (exact match)
    pub to: String,
}

/// A segment in a route result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentResult {
    pub line_id: String,
    pub line_name: String,
    pub color: String,

    /// e.g. "Towards Kavi Subhash"
    pub direction: String,

    /// Stations on this segment, boarding station first
    pub stations: Vec<String>,
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            line_id: segment.line_id().to_string(),
            line_name: segment.line_name().to_string(),
            color: segment.color().to_string(),
            direction: segment.direction().to_string(),
            stations: segment.stations().to_vec(),
        }
    }
}

/// Response for a route query.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,

    /// Physical stations in travel order
    pub path: Vec<String>,

    pub segments: Vec<SegmentResult>,
    pub total_stations: usize,
    pub interchanges: usize,
    pub estimated_minutes: i64,
    pub fare: u32,
    pub smart_card_fare: u32,
}

impl RouteResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            from: itinerary.origin().to_string(),
            to: itinerary.destination().to_string(),
            path: itinerary.path().to_vec(),
            segments: itinerary
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_stations: itinerary.total_stations(),
            interchanges: itinerary.interchanges(),
            estimated_minutes: itinerary.estimated_minutes(),
            fare: itinerary.fare(),
            smart_card_fare: itinerary.smart_card_fare(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
