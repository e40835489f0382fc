//! Domain types for the noise map.
//!
//! This module contains the core model types that represent validated
//! sensor data. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod error;
mod geo;
mod reading;
mod station;

pub use error::DomainError;
pub use geo::{BoundarySegment, GeoPoint, PlanarPoint};
pub use reading::NoiseReading;
pub use station::{Station, StationId};
