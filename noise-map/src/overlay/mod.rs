//! The full overlay pipeline and its published result.
//!
//! [`compute_overlay`] runs project → tessellate → extract in one call;
//! [`SnapshotStore`] publishes the result wholesale so in-flight readers
//! keep a consistent view while the station data is reloaded.

mod snapshot;

pub use snapshot::{MapSnapshot, SnapshotStore};

use tracing::info;

use crate::domain::{BoundarySegment, Station};
use crate::projection::Projector;
use crate::voronoi::{VoronoiError, compute_diagram, extract_boundaries};

/// Compute the Voronoi overlay for a station list.
///
/// Projects every station position into the planar frame, tessellates,
/// and reprojects the bounded cell boundaries back to geographic
/// coordinates. Runs synchronously; intended to be called once per change
/// to the station data, not per render.
///
/// # Errors
///
/// Fails for fewer than 2 stations, for a degenerate (coincident or
/// collinear) layout, or when a coordinate cannot be transformed; see
/// [`VoronoiError`].
pub fn compute_overlay(
    stations: &[Station],
    projector: &Projector,
) -> Result<Vec<BoundarySegment>, VoronoiError> {
    let planar = stations
        .iter()
        .map(|station| projector.to_planar(station.position()))
        .collect::<Result<Vec<_>, _>>()?;

    let diagram = compute_diagram(&planar)?;
    let segments = extract_boundaries(&diagram, projector)?;

    info!(
        stations = stations.len(),
        ridges = diagram.ridges().len(),
        segments = segments.len(),
        planar_crs = %projector.config().target,
        "computed voronoi overlay"
    );

    Ok(segments)
}
