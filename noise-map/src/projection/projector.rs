//! Bidirectional geographic ↔ planar transform.

use std::fmt;

use proj4rs::proj::Proj;
use proj4rs::transform::transform;

use crate::domain::{GeoPoint, PlanarPoint};

use super::{ProjectionConfig, ProjectionError};

/// Deterministic bidirectional transform between the configured geographic
/// and planar reference systems.
///
/// A `Projector` is a pure function of its inputs: it owns nothing but the
/// two frame definitions and is safe to share across threads.
///
/// Inputs far outside the target zone are not rejected; the transform
/// still succeeds but the planar result is increasingly distorted. This is
/// a documented limitation, not a handled error — the diagram is only
/// meaningful for data within the deployment's region.
///
/// # Examples
///
/// ```
/// use noise_map::domain::GeoPoint;
/// use noise_map::projection::{ProjectionConfig, Projector};
///
/// let projector = Projector::new(ProjectionConfig::default()).unwrap();
/// let sagrada_familia = GeoPoint::new(2.1744, 41.4036).unwrap();
///
/// let planar = projector.to_planar(sagrada_familia).unwrap();
/// let back = projector.to_geographic(planar).unwrap();
///
/// assert!((back.lon() - sagrada_familia.lon()).abs() < 1e-6);
/// assert!((back.lat() - sagrada_familia.lat()).abs() < 1e-6);
/// ```
pub struct Projector {
    config: ProjectionConfig,
    source: Proj,
    target: Proj,
}

impl Projector {
    /// Build a projector for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the source frame is not geographic, the target
    /// frame is not planar, or a frame definition is rejected by the
    /// projection library.
    pub fn new(config: ProjectionConfig) -> Result<Self, ProjectionError> {
        if !config.source.is_geographic() {
            return Err(ProjectionError::SourceNotGeographic(config.source));
        }
        if config.target.is_geographic() {
            return Err(ProjectionError::TargetNotPlanar(config.target));
        }

        let source = Proj::from_proj_string(config.source.proj_string()).map_err(|e| {
            ProjectionError::Setup {
                crs: config.source,
                message: e.to_string(),
            }
        })?;
        let target = Proj::from_proj_string(config.target.proj_string()).map_err(|e| {
            ProjectionError::Setup {
                crs: config.target,
                message: e.to_string(),
            }
        })?;

        Ok(Projector {
            config,
            source,
            target,
        })
    }

    /// The configuration this projector was built from.
    pub fn config(&self) -> ProjectionConfig {
        self.config
    }

    /// Project a geographic point into the planar target frame.
    pub fn to_planar(&self, point: GeoPoint) -> Result<PlanarPoint, ProjectionError> {
        // proj4rs expects geographic coordinates in radians, lon/lat order
        let mut coord = (point.lon().to_radians(), point.lat().to_radians(), 0.0);
        transform(&self.source, &self.target, &mut coord).map_err(|e| {
            ProjectionError::Transform {
                x: point.lon(),
                y: point.lat(),
                message: e.to_string(),
            }
        })?;

        if !coord.0.is_finite() || !coord.1.is_finite() {
            return Err(ProjectionError::InvalidResult {
                x: point.lon(),
                y: point.lat(),
            });
        }
        Ok(PlanarPoint::new(coord.0, coord.1))
    }

    /// Project a planar point back to the geographic source frame.
    ///
    /// Exact mathematical inverse of [`to_planar`](Self::to_planar), up to
    /// the projection library's floating-point precision.
    pub fn to_geographic(&self, point: PlanarPoint) -> Result<GeoPoint, ProjectionError> {
        let mut coord = (point.x, point.y, 0.0);
        transform(&self.target, &self.source, &mut coord).map_err(|e| {
            ProjectionError::Transform {
                x: point.x,
                y: point.y,
                message: e.to_string(),
            }
        })?;

        GeoPoint::new(coord.0.to_degrees(), coord.1.to_degrees()).map_err(|_| {
            ProjectionError::InvalidResult {
                x: point.x,
                y: point.y,
            }
        })
    }
}

impl fmt::Debug for Projector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector")
            .field("source", &self.config.source)
            .field("target", &self.config.target)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Round-trip holds to 1e-6 degrees anywhere in the deployment's
        /// region (greater Barcelona, well inside zone 31).
        #[test]
        fn round_trip_in_zone(lon in 1.5f64..3.5, lat in 40.5f64..42.5) {
            let p = Projector::new(ProjectionConfig::default()).unwrap();
            let original = GeoPoint::new(lon, lat).unwrap();

            let back = p.to_geographic(p.to_planar(original).unwrap()).unwrap();
            prop_assert!((back.lon() - original.lon()).abs() < 1e-6);
            prop_assert!((back.lat() - original.lat()).abs() < 1e-6);
        }

        /// The forward transform is deterministic.
        #[test]
        fn forward_deterministic(lon in 1.5f64..3.5, lat in 40.5f64..42.5) {
            let p = Projector::new(ProjectionConfig::default()).unwrap();
            let point = GeoPoint::new(lon, lat).unwrap();

            let first = p.to_planar(point).unwrap();
            let second = p.to_planar(point).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
