//! Coordinate projection between WGS84 and a planar metric system.
//!
//! Voronoi geometry is defined by Euclidean equidistance, which is not
//! meaningful on angular coordinates, so sensor positions are projected
//! to a fixed UTM frame before tessellation and the resulting boundaries
//! are projected back. The planar frame is pinned per deployment, never
//! auto-selected per input.

mod config;
mod error;
mod projector;

pub use config::{CrsId, ProjectionConfig};
pub use error::ProjectionError;
pub use projector::Projector;
