//! Voronoi partition of the sensor network.
//!
//! [`compute_diagram`] tessellates a set of projected station positions
//! into a [`VoronoiDiagram`] (vertices plus bounded/unbounded ridges);
//! [`extract_boundaries`] turns the bounded ridges into renderable
//! geographic line segments. Unbounded ridges are deliberately dropped:
//! peripheral stations get visually open cells instead of infinite rays.

mod compute;
mod diagram;
mod error;
mod extract;


pub use compute::compute_diagram;
pub use diagram::{Ridge, VoronoiDiagram};
pub use error::VoronoiError;
pub use extract::extract_boundaries;
