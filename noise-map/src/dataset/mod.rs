//! The merged noise dataset and its aggregations.
//!
//! Joins the reading table against the station table by id, once, and
//! answers the queries the map needs: which stations actually have data,
//! the per-station mean level, and the day × hour matrix behind the
//! per-station heat map. Readings for unknown stations are kept (they
//! still aggregate) but carry no location.

mod heatmap;

pub use heatmap::HourlyHeatmap;

use std::collections::{HashMap, HashSet};

use crate::domain::{GeoPoint, NoiseReading, Station, StationId};

/// Per-station mean noise level, for the tile-map view.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMeanLevel {
    /// The station the mean belongs to.
    pub station: StationId,
    /// Station position, when the id is present in the station table.
    pub position: Option<GeoPoint>,
    /// Arithmetic mean of the station's dB readings.
    pub mean_db: f64,
    /// Number of readings behind the mean.
    pub sample_count: usize,
}

/// An immutable station/reading join.
///
/// Built once per data load; indexes are computed up front so the
/// aggregation queries are cheap.
#[derive(Debug, Clone)]
pub struct NoiseDataset {
    stations: Vec<Station>,
    readings: Vec<NoiseReading>,
    station_index: HashMap<StationId, usize>,
    readings_by_station: HashMap<StationId, Vec<usize>>,
}

impl NoiseDataset {
    /// Join a station table with a reading table.
    pub fn new(stations: Vec<Station>, readings: Vec<NoiseReading>) -> Self {
        let station_index = stations
            .iter()
            .enumerate()
            .map(|(idx, station)| (station.id(), idx))
            .collect();

        let mut readings_by_station: HashMap<StationId, Vec<usize>> = HashMap::new();
        for (idx, reading) in readings.iter().enumerate() {
            readings_by_station
                .entry(reading.station())
                .or_default()
                .push(idx);
        }

        NoiseDataset {
            stations,
            readings,
            station_index,
            readings_by_station,
        }
    }

    /// The station table, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The reading table, in load order.
    pub fn readings(&self) -> &[NoiseReading] {
        &self.readings
    }

    /// Look up a station record by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&idx| &self.stations[idx])
    }

    /// True when the station has at least one reading.
    pub fn has_data(&self, id: StationId) -> bool {
        self.readings_by_station.contains_key(&id)
    }

    /// Ids of all stations with at least one reading.
    pub fn stations_with_data(&self) -> HashSet<StationId> {
        self.readings_by_station.keys().copied().collect()
    }

    /// Per-station mean levels, for every station id that has readings.
    ///
    /// Stations from the station table come first in table order,
    /// followed by reading-only ids in ascending id order, so the output
    /// is deterministic.
    pub fn station_means(&self) -> Vec<StationMeanLevel> {
        let mut means = Vec::new();

        for station in &self.stations {
            if let Some(mean) = self.mean_for(station.id()) {
                means.push(mean);
            }
        }

        let mut orphans: Vec<StationId> = self
            .readings_by_station
            .keys()
            .filter(|id| !self.station_index.contains_key(id))
            .copied()
            .collect();
        orphans.sort_unstable();
        for id in orphans {
            if let Some(mean) = self.mean_for(id) {
                means.push(mean);
            }
        }

        means
    }

    /// The day × hour heat-map matrix for one station, or `None` when
    /// the station has no readings.
    pub fn hourly_heatmap(&self, id: StationId) -> Option<HourlyHeatmap> {
        let indices = self.readings_by_station.get(&id)?;
        let readings: Vec<&NoiseReading> = indices.iter().map(|&idx| &self.readings[idx]).collect();
        HourlyHeatmap::build(id, &readings)
    }

    fn mean_for(&self, id: StationId) -> Option<StationMeanLevel> {
        let indices = self.readings_by_station.get(&id)?;
        let sum: f64 = indices.iter().map(|&idx| self.readings[idx].level_db()).sum();
        Some(StationMeanLevel {
            station: id,
            position: self.station(id).map(|s| s.position()),
            mean_db: sum / indices.len() as f64,
            sample_count: indices.len(),
        })
    }
}
