//! Projection configuration.

use std::fmt;

use super::ProjectionError;

/// A recognized coordinate reference system.
///
/// The deployment picks one geographic source frame (the frame all input
/// coordinates are in) and one planar target frame (the frame the Voronoi
/// computation runs in). UTM zone 31N covers the reference deployment's
/// region (Barcelona); both the ETRS89 and WGS84 flavors of that zone are
/// recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsId {
    /// WGS84 geographic longitude/latitude.
    Epsg4326,
    /// ETRS89 / UTM zone 31N (meters).
    Epsg25831,
    /// WGS84 / UTM zone 31N (meters).
    Epsg32631,
}

impl CrsId {
    /// Parse an `EPSG:nnnn` identifier.
    pub fn parse(s: &str) -> Result<Self, ProjectionError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EPSG:4326" => Ok(CrsId::Epsg4326),
            "EPSG:25831" => Ok(CrsId::Epsg25831),
            "EPSG:32631" => Ok(CrsId::Epsg32631),
            _ => Err(ProjectionError::UnrecognizedCrs(s.to_string())),
        }
    }

    /// True for geographic (angular) reference systems.
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsId::Epsg4326)
    }

    /// The proj parameter string defining this reference system.
    ///
    /// The UTM targets are spelled out as transverse Mercator parameters
    /// (zone 31N: central meridian 3°E, scale 0.9996, false easting
    /// 500 km) so both go through the same projection code path.
    pub fn proj_string(&self) -> &'static str {
        match self {
            CrsId::Epsg4326 => "+proj=longlat +datum=WGS84 +no_defs",
            CrsId::Epsg25831 => {
                "+proj=tmerc +lat_0=0 +lon_0=3 +k=0.9996 +x_0=500000 +y_0=0 \
                 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs"
            }
            CrsId::Epsg32631 => {
                "+proj=tmerc +lat_0=0 +lon_0=3 +k=0.9996 +x_0=500000 +y_0=0 \
                 +datum=WGS84 +units=m +no_defs"
            }
        }
    }
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CrsId::Epsg4326 => "EPSG:4326",
            CrsId::Epsg25831 => "EPSG:25831",
            CrsId::Epsg32631 => "EPSG:32631",
        };
        f.write_str(code)
    }
}

/// Deployment-time projection configuration.
///
/// `source` is the geographic frame of all input coordinates, `target`
/// the planar frame the diagram is computed in. Changing `target` changes
/// intermediate planar values but not the final geographic output beyond
/// floating-point tolerance, since the inverse transform always returns
/// to `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Geographic reference system of the input coordinates.
    pub source: CrsId,
    /// Planar metric reference system for the Voronoi computation.
    pub target: CrsId,
}

impl ProjectionConfig {
    /// Create a configuration with the given frames.
    pub fn new(source: CrsId, target: CrsId) -> Self {
        Self { source, target }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            source: CrsId::Epsg4326,
            target: CrsId::Epsg25831,
        }
    }
}
