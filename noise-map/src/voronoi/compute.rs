//! Diagram construction over projected station positions.

use std::collections::HashMap;

use spade::handles::VoronoiVertex;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use tracing::debug;

use crate::domain::PlanarPoint;

use super::{Ridge, VoronoiDiagram, VoronoiError};

/// Compute the Voronoi diagram of a set of planar points.
///
/// The diagram is derived from the Delaunay triangulation: every inner
/// triangle's circumcenter is a diagram vertex, and every Delaunay edge
/// contributes one ridge — bounded when both adjacent triangles exist,
/// unbounded when the edge lies on the hull.
///
/// Input points should be distinct; exactly coincident points are merged
/// by the triangulation, so they collapse to a single generating site.
///
/// # Errors
///
/// - [`VoronoiError::InsufficientInput`] for fewer than 2 input points.
/// - [`VoronoiError::DegenerateInput`] when the distinct points are all
///   coincident or exactly collinear — no finite cell exists.
/// - [`VoronoiError::Triangulation`] when the library rejects the input
///   (non-finite coordinates).
pub fn compute_diagram(points: &[PlanarPoint]) -> Result<VoronoiDiagram, VoronoiError> {
    if points.len() < 2 {
        return Err(VoronoiError::InsufficientInput {
            count: points.len(),
        });
    }

    let sites: Vec<Point2<f64>> = points.iter().map(|p| Point2::new(p.x, p.y)).collect();
    let triangulation = DelaunayTriangulation::<Point2<f64>>::bulk_load(sites)
        .map_err(|e| VoronoiError::Triangulation(e.to_string()))?;

    if triangulation.num_vertices() < 2 {
        // All input points coincided
        return Err(VoronoiError::DegenerateInput);
    }
    if triangulation.num_vertices() >= 3 && triangulation.num_inner_faces() == 0 {
        // Three or more distinct points, all on one line
        return Err(VoronoiError::DegenerateInput);
    }

    // Diagram vertices are the circumcenters of the inner Delaunay faces.
    let mut vertices = Vec::with_capacity(triangulation.num_inner_faces());
    let mut vertex_of_face: HashMap<usize, usize> = HashMap::new();
    for face in triangulation.inner_faces() {
        let center = face.circumcenter();
        vertex_of_face.insert(face.index(), vertices.len());
        vertices.push(PlanarPoint::new(center.x, center.y));
    }

    let mut ridges = Vec::new();
    for edge in triangulation.undirected_voronoi_edges() {
        let ridge = match edge.vertices() {
            [VoronoiVertex::Inner(first), VoronoiVertex::Inner(second)] => Ridge::Bounded {
                // Safe: every inner face was interned above
                a: vertex_of_face[&first.index()],
                b: vertex_of_face[&second.index()],
            },
            _ => Ridge::Unbounded,
        };
        ridges.push(ridge);
    }

    debug!(
        sites = triangulation.num_vertices(),
        vertices = vertices.len(),
        ridges = ridges.len(),
        "computed voronoi diagram"
    );

    Ok(VoronoiDiagram::new(vertices, ridges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint::new(x, y)
    }

    #[test]
    fn empty_input_is_insufficient() {
        assert_eq!(
            compute_diagram(&[]),
            Err(VoronoiError::InsufficientInput { count: 0 })
        );
    }

    #[test]
    fn single_point_is_insufficient() {
        assert_eq!(
            compute_diagram(&[p(1.0, 1.0)]),
            Err(VoronoiError::InsufficientInput { count: 1 })
        );
    }

    #[test]
    fn two_points_give_no_bounded_ridges() {
        // The diagram of 2 points is a single unbounded separating line.
        let diagram = compute_diagram(&[p(0.0, 0.0), p(100.0, 0.0)]).unwrap();
        assert_eq!(diagram.bounded_ridge_count(), 0);
        assert!(!diagram.ridges().is_empty());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let points = vec![p(5.0, 5.0); 4];
        assert_eq!(compute_diagram(&points), Err(VoronoiError::DegenerateInput));
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let points = [p(0.0, 0.0), p(50.0, 50.0), p(100.0, 100.0), p(150.0, 150.0)];
        assert_eq!(compute_diagram(&points), Err(VoronoiError::DegenerateInput));
    }

    #[test]
    fn triangle_has_one_vertex_and_no_bounded_ridges() {
        // One triangle: its circumcenter is the only diagram vertex and
        // all three ridges run off to infinity.
        let diagram = compute_diagram(&[p(0.0, 0.0), p(100.0, 0.0), p(50.0, 80.0)]).unwrap();
        assert_eq!(diagram.vertices().len(), 1);
        assert_eq!(diagram.ridges().len(), 3);
        assert_eq!(diagram.bounded_ridge_count(), 0);
    }

    #[test]
    fn square_has_single_central_bounded_ridge() {
        // Four corners of a square triangulate into two triangles whose
        // circumcenters coincide at the square's center; only the ridge
        // dual to the diagonal is bounded (and zero-length).
        let diagram = compute_diagram(&[
            p(0.0, 0.0),
            p(100.0, 0.0),
            p(100.0, 100.0),
            p(0.0, 100.0),
        ])
        .unwrap();

        assert_eq!(diagram.ridges().len(), 5);
        assert_eq!(diagram.bounded_ridge_count(), 1);
        for vertex in diagram.vertices() {
            assert!((vertex.x - 50.0).abs() < 1e-9);
            assert!((vertex.y - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn quincunx_center_cell_is_a_bounded_diamond() {
        // Square corners plus the center: the center station's cell is a
        // diamond whose corners are the four side midpoints.
        let diagram = compute_diagram(&[
            p(0.0, 0.0),
            p(100.0, 0.0),
            p(100.0, 100.0),
            p(0.0, 100.0),
            p(50.0, 50.0),
        ])
        .unwrap();

        assert_eq!(diagram.bounded_ridge_count(), 4);

        let expected = [(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)];
        for ridge in diagram.ridges().iter().filter(|r| r.is_bounded()) {
            let (a, b) = diagram.ridge_endpoints(*ridge).unwrap();
            for endpoint in [a, b] {
                assert!(
                    expected
                        .iter()
                        .any(|&(x, y)| (endpoint.x - x).abs() < 1e-9
                            && (endpoint.y - y).abs() < 1e-9),
                    "unexpected diagram vertex ({}, {})",
                    endpoint.x,
                    endpoint.y
                );
            }
        }
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let result = compute_diagram(&[p(0.0, 0.0), p(f64::NAN, 1.0), p(10.0, 10.0)]);
        assert!(matches!(result, Err(VoronoiError::Triangulation(_))));
    }

    #[test]
    fn recomputation_is_deterministic() {
        let points = [
            p(12.0, 7.0),
            p(430.0, 210.0),
            p(88.0, 340.0),
            p(260.0, 95.0),
            p(150.0, 150.0),
        ];
        assert_eq!(compute_diagram(&points), compute_diagram(&points));
    }
}
