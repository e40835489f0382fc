//! Hourly noise measurement.

use chrono::NaiveDateTime;

use super::{DomainError, StationId};

/// One hourly equivalent-level (LAeq 1h) measurement from a station.
///
/// The level is validated finite at construction; the source data carries
/// decibel values and a per-hour timestamp assembled from separate
/// year/month/day/hour columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseReading {
    station: StationId,
    timestamp: NaiveDateTime,
    level_db: f64,
}

impl NoiseReading {
    /// Construct a reading, validating the level.
    pub fn new(
        station: StationId,
        timestamp: NaiveDateTime,
        level_db: f64,
    ) -> Result<Self, DomainError> {
        if !level_db.is_finite() {
            return Err(DomainError::NonFiniteLevel(level_db));
        }
        Ok(NoiseReading {
            station,
            timestamp,
            level_db,
        })
    }

    /// The station that produced this reading.
    pub fn station(&self) -> StationId {
        self.station
    }

    /// Start of the measured hour.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Equivalent noise level in dB(A).
    pub fn level_db(&self) -> f64 {
        self.level_db
    }
}
