//! Day × hour pivot of one station's readings.

use chrono::{NaiveDate, Timelike};

use crate::domain::{NoiseReading, StationId};

/// The hourly heat-map matrix for a single station.
///
/// Rows are calendar days (ascending), columns the distinct hours that
/// appear in the station's readings (ascending). A cell is `None` where
/// the station recorded nothing for that day/hour. When the source
/// contains more than one reading for the same day and hour, the last
/// one in input order wins.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyHeatmap {
    station: StationId,
    days: Vec<NaiveDate>,
    hours: Vec<u32>,
    values: Vec<Vec<Option<f64>>>,
}

impl HourlyHeatmap {
    /// Pivot a station's readings into a day × hour matrix.
    ///
    /// Returns `None` when no readings are given.
    pub(super) fn build(station: StationId, readings: &[&NoiseReading]) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }

        let mut days: Vec<NaiveDate> = readings.iter().map(|r| r.timestamp().date()).collect();
        days.sort_unstable();
        days.dedup();

        let mut hours: Vec<u32> = readings.iter().map(|r| r.timestamp().hour()).collect();
        hours.sort_unstable();
        hours.dedup();

        let mut values = vec![vec![None; hours.len()]; days.len()];
        for reading in readings {
            // Safe: both axes were built from these readings above
            let row = days.binary_search(&reading.timestamp().date()).unwrap();
            let col = hours.binary_search(&reading.timestamp().hour()).unwrap();
            values[row][col] = Some(reading.level_db());
        }

        Some(HourlyHeatmap {
            station,
            days,
            hours,
            values,
        })
    }

    /// The station this matrix belongs to.
    pub fn station(&self) -> StationId {
        self.station
    }

    /// Row labels: calendar days, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Column labels: hours of day, ascending.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// The level at a day/hour cell, if any was recorded.
    pub fn value(&self, day_idx: usize, hour_idx: usize) -> Option<f64> {
        *self.values.get(day_idx)?.get(hour_idx)?
    }

    /// All rows, aligned with [`days`](Self::days) and
    /// [`hours`](Self::hours).
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }
}
