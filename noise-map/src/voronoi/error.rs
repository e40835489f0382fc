//! Voronoi computation errors.

use crate::projection::ProjectionError;

/// Errors from diagram construction or boundary extraction.
///
/// These are pure computation failures; there is no partial diagram and
/// nothing to retry. The caller decides whether to surface the error or
/// render nothing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoronoiError {
    /// Fewer than 2 stations; no diagram is geometrically defined
    #[error("need at least 2 stations for a Voronoi partition, got {count}")]
    InsufficientInput { count: usize },

    /// All points coincident or collinear; the diagram has no finite cells
    #[error("degenerate station layout: all positions coincident or collinear")]
    DegenerateInput,

    /// The triangulation library rejected the input points
    #[error("triangulation failed: {0}")]
    Triangulation(String),

    /// A boundary vertex could not be reprojected
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
