//! Geographic and planar coordinate types.

use std::fmt;

use super::DomainError;

/// A geographic position in WGS84 degrees, longitude/latitude order.
///
/// Construction validates that both components are finite and within
/// [-180, 180] / [-90, 90], so any `GeoPoint` value can be projected or
/// serialized without further checks.
///
/// # Examples
///
/// ```
/// use noise_map::domain::GeoPoint;
///
/// let p = GeoPoint::new(2.1744, 41.4036).unwrap();
/// assert_eq!(p.lon(), 2.1744);
/// assert_eq!(p.lat(), 41.4036);
///
/// // NaN and out-of-range values are rejected
/// assert!(GeoPoint::new(f64::NAN, 41.0).is_err());
/// assert!(GeoPoint::new(2.0, 91.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
}

impl GeoPoint {
    /// Construct a geographic point, validating both components.
    pub fn new(lon: f64, lat: f64) -> Result<Self, DomainError> {
        if !lon.is_finite() {
            return Err(DomainError::NonFiniteCoordinate {
                name: "longitude",
                value: lon,
            });
        }
        if !lat.is_finite() {
            return Err(DomainError::NonFiniteCoordinate {
                name: "latitude",
                value: lat,
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::CoordinateOutOfRange {
                name: "longitude",
                value: lon,
                min: -180.0,
                max: 180.0,
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::CoordinateOutOfRange {
                name: "latitude",
                value: lat,
                min: -90.0,
                max: 90.0,
            });
        }
        Ok(GeoPoint { lon, lat })
    }

    /// Longitude in degrees east.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees north.
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lon, self.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// A 2D point in planar metric coordinates (meters).
///
/// Planar points only exist between projection and reprojection; they are
/// plain data with no invariant of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    /// Easting in meters.
    pub x: f64,
    /// Northing in meters.
    pub y: f64,
}

impl PlanarPoint {
    /// Construct a planar point.
    pub fn new(x: f64, y: f64) -> Self {
        PlanarPoint { x, y }
    }
}

/// A finite Voronoi boundary line in geographic coordinates.
///
/// Produced from a bounded ridge of the diagram; the endpoint order is the
/// ridge's own vertex order and carries no geometric meaning beyond being
/// internally consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    /// First endpoint, from the ridge's first vertex.
    pub start: GeoPoint,
    /// Second endpoint, from the ridge's second vertex.
    pub end: GeoPoint,
}

impl BoundarySegment {
    /// Construct a segment from two geographic endpoints.
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        BoundarySegment { start, end }
    }
}
