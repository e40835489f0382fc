//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from CSV/projection errors, which live in their own
//! modules.

/// Domain-level errors for validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate component is NaN or infinite
    #[error("non-finite {name}: {value}")]
    NonFiniteCoordinate { name: &'static str, value: f64 },

    /// A geographic coordinate is outside its valid range
    #[error("{name} {value} out of range [{min}, {max}]")]
    CoordinateOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A noise level is NaN or infinite
    #[error("non-finite noise level: {0}")]
    NonFiniteLevel(f64),

    /// A station id could not be parsed
    #[error("invalid station id: {0:?}")]
    InvalidStationId(String),
}
