//! Planner configuration: time estimates and fares.

use chrono::Duration;

use super::fare::{FareTable, discounted};

/// Parameters used to turn a path into travel time and fare figures.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Minutes added for every station on the route (origin included).
    pub minutes_per_station: i64,

    /// Minutes added for every change of line.
    pub minutes_per_interchange: i64,

    /// Discount applied to the fare for smart card holders (percent).
    pub smart_card_discount_percent: u32,

    /// Fare bands by station count.
    pub fares: FareTable,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        minutes_per_station: i64,
        minutes_per_interchange: i64,
        smart_card_discount_percent: u32,
        fares: FareTable,
    ) -> Self {
        Self {
            minutes_per_station,
            minutes_per_interchange,
            smart_card_discount_percent,
            fares,
        }
    }

    /// Returns the per-station time as a Duration.
    pub fn station_time(&self) -> Duration {
        Duration::minutes(self.minutes_per_station)
    }

    /// Returns the per-interchange time as a Duration.
    pub fn interchange_time(&self) -> Duration {
        Duration::minutes(self.minutes_per_interchange)
    }

    /// Estimated travel time for a route.
    pub fn estimated_time(&self, stations: usize, interchanges: usize) -> Duration {
        self.station_time() * stations as i32 + self.interchange_time() * interchanges as i32
    }

    /// Fare for a route touching `stations` stations.
    pub fn fare(&self, stations: usize) -> u32 {
        self.fares.fare_for(stations)
    }

    /// Smart card price for a given fare.
    pub fn smart_card_fare(&self, fare: u32) -> u32 {
        discounted(fare, self.smart_card_discount_percent)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            minutes_per_station: 2,
            minutes_per_interchange: 5,
            smart_card_discount_percent: 10,
            fares: FareTable::default(),
        }
    }
}
