//! GeoJSON export for the rendering layer.
//!
//! The overlay is handed off as a plain GeoJSON feature collection:
//! one `Point` feature per station (with id, neighborhood, district and a
//! has-data flag) and one `LineString` feature per boundary segment.
//! Whatever draws the map consumes this; no styling is encoded here.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{BoundarySegment, Station, StationId};

/// A GeoJSON feature collection.
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

impl FeatureCollection {
    fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            kind: "FeatureCollection",
            features,
        }
    }

    /// The features in this collection.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Merge collections, preserving feature order.
    pub fn merged(collections: impl IntoIterator<Item = FeatureCollection>) -> Self {
        let features = collections
            .into_iter()
            .flat_map(|collection| collection.features)
            .collect();
        FeatureCollection::new(features)
    }
}

/// A single GeoJSON feature.
#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Properties,
}

/// Supported GeoJSON geometries; coordinates are `[lon, lat]` pairs.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A station position.
    Point { coordinates: [f64; 2] },
    /// A boundary segment.
    LineString { coordinates: Vec<[f64; 2]> },
}

/// Feature properties; station fields are absent on boundary features.
#[derive(Debug, Serialize)]
pub struct Properties {
    /// `"station"` or `"boundary"`.
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_data: Option<bool>,
}

/// One `LineString` feature per boundary segment, in segment order.
pub fn boundaries_to_geojson(segments: &[BoundarySegment]) -> FeatureCollection {
    let features = segments
        .iter()
        .map(|segment| Feature {
            kind: "Feature",
            geometry: Geometry::LineString {
                coordinates: vec![
                    [segment.start.lon(), segment.start.lat()],
                    [segment.end.lon(), segment.end.lat()],
                ],
            },
            properties: Properties {
                kind: "boundary",
                station_id: None,
                neighborhood: None,
                district: None,
                has_data: None,
            },
        })
        .collect();
    FeatureCollection::new(features)
}

/// One `Point` feature per station, in station order, flagged with
/// whether the station has any readings.
pub fn stations_to_geojson(
    stations: &[Station],
    with_data: &HashSet<StationId>,
) -> FeatureCollection {
    let features = stations
        .iter()
        .map(|station| Feature {
            kind: "Feature",
            geometry: Geometry::Point {
                coordinates: [station.position().lon(), station.position().lat()],
            },
            properties: Properties {
                kind: "station",
                station_id: Some(station.id().value()),
                neighborhood: Some(station.neighborhood().to_string()),
                district: Some(station.district().to_string()),
                has_data: Some(with_data.contains(&station.id())),
            },
        })
        .collect();
    FeatureCollection::new(features)
}
