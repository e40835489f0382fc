//! Voronoi diagram structure.

use crate::domain::PlanarPoint;

/// One edge of the Voronoi diagram, shared by exactly two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ridge {
    /// A finite ridge between two diagram vertices, by index.
    Bounded { a: usize, b: usize },
    /// A ridge with at least one endpoint at infinity.
    Unbounded,
}

impl Ridge {
    /// True if both endpoints are finite diagram vertices.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Ridge::Bounded { .. })
    }
}

/// The Voronoi diagram of a set of planar points.
///
/// Holds the finite diagram vertices (cell corners, in planar
/// coordinates) and every ridge, bounded or not. Vertex indices are
/// internal to the diagram and unrelated to input point order. The
/// diagram is built once per change to the station data, consumed by
/// boundary extraction, and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram {
    vertices: Vec<PlanarPoint>,
    ridges: Vec<Ridge>,
}

impl VoronoiDiagram {
    /// Assemble a diagram. Bounded ridge indices must point into
    /// `vertices`.
    pub(crate) fn new(vertices: Vec<PlanarPoint>, ridges: Vec<Ridge>) -> Self {
        debug_assert!(ridges.iter().all(|r| match *r {
            Ridge::Bounded { a, b } => a < vertices.len() && b < vertices.len(),
            Ridge::Unbounded => true,
        }));
        VoronoiDiagram { vertices, ridges }
    }

    /// The finite diagram vertices.
    pub fn vertices(&self) -> &[PlanarPoint] {
        &self.vertices
    }

    /// All ridges, in enumeration order.
    pub fn ridges(&self) -> &[Ridge] {
        &self.ridges
    }

    /// Number of ridges with two finite endpoints.
    pub fn bounded_ridge_count(&self) -> usize {
        self.ridges.iter().filter(|r| r.is_bounded()).count()
    }

    /// Resolve a ridge's endpoints, in the ridge's own vertex order.
    ///
    /// Returns `None` for unbounded ridges.
    pub fn ridge_endpoints(&self, ridge: Ridge) -> Option<(PlanarPoint, PlanarPoint)> {
        match ridge {
            Ridge::Bounded { a, b } => Some((*self.vertices.get(a)?, *self.vertices.get(b)?)),
            Ridge::Unbounded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VoronoiDiagram {
        VoronoiDiagram::new(
            vec![PlanarPoint::new(0.0, 0.0), PlanarPoint::new(10.0, 0.0)],
            vec![
                Ridge::Bounded { a: 0, b: 1 },
                Ridge::Unbounded,
                Ridge::Bounded { a: 1, b: 0 },
            ],
        )
    }

    #[test]
    fn bounded_ridge_count() {
        assert_eq!(sample().bounded_ridge_count(), 2);
    }

    #[test]
    fn ridge_endpoints_preserve_order() {
        let diagram = sample();
        let (p, q) = diagram.ridge_endpoints(Ridge::Bounded { a: 1, b: 0 }).unwrap();
        assert_eq!(p, PlanarPoint::new(10.0, 0.0));
        assert_eq!(q, PlanarPoint::new(0.0, 0.0));
    }

    #[test]
    fn unbounded_ridge_has_no_endpoints() {
        assert_eq!(sample().ridge_endpoints(Ridge::Unbounded), None);
    }
}
