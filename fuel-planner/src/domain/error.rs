//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude outside [-90, 90] or not finite
    #[error("invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// Bounding box with min greater than max or the wrong number of values
    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Route geometry must contain at least two points
    #[error("route geometry has {0} point(s), need at least 2")]
    GeometryTooShort(usize),

    /// Route distance must be finite and non-negative
    #[error("invalid route distance: {0}")]
    InvalidDistance(f64),
}
