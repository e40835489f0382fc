//! Projection error types.

use super::CrsId;

/// Errors from projector construction or coordinate transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// The configured source frame is not geographic
    #[error("source reference system must be geographic, got {0}")]
    SourceNotGeographic(CrsId),

    /// The configured target frame is not planar
    #[error("target reference system must be planar, got {0}")]
    TargetNotPlanar(CrsId),

    /// An EPSG identifier outside the recognized set
    #[error("unrecognized reference system: {0:?}")]
    UnrecognizedCrs(String),

    /// The projection library rejected a reference system definition
    #[error("projection setup failed for {crs}: {message}")]
    Setup { crs: CrsId, message: String },

    /// The projection library failed to transform a coordinate
    #[error("transform failed for ({x}, {y}): {message}")]
    Transform { x: f64, y: f64, message: String },

    /// The transform produced a NaN/infinite or geographically invalid result
    #[error("transform of ({x}, {y}) produced an invalid coordinate")]
    InvalidResult { x: f64, y: f64 },
}
