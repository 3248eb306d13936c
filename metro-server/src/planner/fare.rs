//! Banded fares.
//!
//! Fares are a step function of the number of stations on a route. Band
//! edges are configuration, not derived.

/// One fare band: routes of up to `max_stations` stations cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBand {
    pub max_stations: usize,
    pub fare: u32,
}

impl FareBand {
    pub const fn new(max_stations: usize, fare: u32) -> Self {
        Self { max_stations, fare }
    }
}

/// Error returned when a fare table would not be monotone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareTableError {
    /// Band edges must strictly increase
    #[error("fare band {index}: station limit must be greater than the previous band's")]
    LimitNotIncreasing { index: usize },

    /// Fares must not decrease from one band to the next
    #[error("fare band {index}: fare must not be lower than the previous band's")]
    FareDecreasing { index: usize },

    /// The cap must be at least the highest band fare
    #[error("maximum fare {max_fare} is lower than the highest band fare")]
    CapBelowBands { max_fare: u32 },
}

/// Ordered fare bands plus the fare charged beyond the last band.
///
/// # Invariants
///
/// - Band limits strictly increase
/// - Fares never decrease, and the cap is at least the last band's fare
///
/// so `fare_for` is non-decreasing in the station count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    bands: Vec<FareBand>,
    max_fare: u32,
}

impl FareTable {
    /// Create a fare table, checking that it is monotone.
    pub fn new(bands: Vec<FareBand>, max_fare: u32) -> Result<Self, FareTableError> {
        for (index, pair) in bands.windows(2).enumerate() {
            let (prev, band) = (pair[0], pair[1]);
            if band.max_stations <= prev.max_stations {
                return Err(FareTableError::LimitNotIncreasing { index: index + 1 });
            }
            if band.fare < prev.fare {
                return Err(FareTableError::FareDecreasing { index: index + 1 });
            }
        }

        if bands.last().is_some_and(|last| max_fare < last.fare) {
            return Err(FareTableError::CapBelowBands { max_fare });
        }

        Ok(Self { bands, max_fare })
    }

    /// Fare for a route touching `stations` stations.
    pub fn fare_for(&self, stations: usize) -> u32 {
        self.bands
            .iter()
            .find(|band| stations <= band.max_stations)
            .map_or(self.max_fare, |band| band.fare)
    }

    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }

    pub fn max_fare(&self) -> u32 {
        self.max_fare
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            bands: vec![
                FareBand::new(2, 10),
                FareBand::new(5, 20),
                FareBand::new(12, 30),
                FareBand::new(21, 40),
                FareBand::new(32, 50),
            ],
            max_fare: 60,
        }
    }
}

/// Apply a percentage discount, rounding half up.
pub fn discounted(fare: u32, percent: u32) -> u32 {
    let percent = percent.min(100);
    (fare * (100 - percent) + 50) / 100
}
