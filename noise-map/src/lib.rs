//! Urban noise-sensor map overlay engine.
//!
//! Answers: "given a city's noise-sensor network, what does each sensor's
//! catchment area look like, and how loud is it there?"
//!
//! The core is geospatial: sensor positions are projected from WGS84 to a
//! planar metric reference system, a Voronoi diagram is computed over the
//! projected points, and the finite cell boundaries are reprojected back to
//! geographic coordinates for rendering as map overlay lines.

pub mod dataset;
pub mod domain;
pub mod export;
pub mod ingest;
pub mod overlay;
pub mod projection;
pub mod voronoi;
