//! Boundary extraction: diagram ridges → geographic line segments.

use crate::domain::BoundarySegment;
use crate::projection::{ProjectionError, Projector};

use super::VoronoiDiagram;

/// Turn a diagram's bounded ridges into renderable geographic segments.
///
/// Unbounded ridges are skipped. Segments come out in ridge enumeration
/// order with each ridge's own endpoint order preserved; no sorting or
/// deduplication happens here (ridges are already unique per adjacent
/// cell pair).
///
/// # Errors
///
/// Propagates reprojection failures from the projector unchanged.
pub fn extract_boundaries(
    diagram: &VoronoiDiagram,
    projector: &Projector,
) -> Result<Vec<BoundarySegment>, ProjectionError> {
    let mut segments = Vec::with_capacity(diagram.bounded_ridge_count());
    for ridge in diagram.ridges() {
        let Some((a, b)) = diagram.ridge_endpoints(*ridge) else {
            continue;
        };
        let start = projector.to_geographic(a)?;
        let end = projector.to_geographic(b)?;
        segments.push(BoundarySegment::new(start, end));
    }
    Ok(segments)
}
