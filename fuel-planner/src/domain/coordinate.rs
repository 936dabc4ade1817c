//! Geographic coordinate and bounding box types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A WGS84 position in degrees.
///
/// Use [`Coordinate::parse`] for untrusted input; it rejects non-finite and
/// out-of-range values. [`Coordinate::new`] is for literals and test data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without validation.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, checking both axes are finite and in range.
    pub fn parse(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// Axis-aligned rectangle in degrees, `[min_lon, min_lat, max_lon, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Build from the `[min_lon, min_lat, max_lon, max_lat]` array used by
    /// directions providers.
    pub fn from_slice(values: &[f64]) -> Result<Self, DomainError> {
        let [min_lon, min_lat, max_lon, max_lat] = values else {
            return Err(DomainError::InvalidBoundingBox(format!(
                "expected 4 values, got {}",
                values.len()
            )));
        };

        if values.iter().any(|v| !v.is_finite()) {
            return Err(DomainError::InvalidBoundingBox(
                "values must be finite".to_string(),
            ));
        }

        if min_lon > max_lon || min_lat > max_lat {
            return Err(DomainError::InvalidBoundingBox(format!(
                "min exceeds max in {values:?}"
            )));
        }

        Ok(Self {
            min_lon: *min_lon,
            min_lat: *min_lat,
            max_lon: *max_lon,
            max_lat: *max_lat,
        })
    }

    /// Smallest box enclosing all `points`, or `None` when empty.
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_lon: first.longitude,
            min_lat: first.latitude,
            max_lon: first.longitude,
            max_lat: first.latitude,
        };

        Some(points.iter().skip(1).fold(init, |bbox, p| Self {
            min_lon: bbox.min_lon.min(p.longitude),
            min_lat: bbox.min_lat.min(p.latitude),
            max_lon: bbox.max_lon.max(p.longitude),
            max_lat: bbox.max_lat.max(p.latitude),
        }))
    }

    /// Inclusive containment test on all four sides.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coordinate.latitude)
            && (self.min_lon..=self.max_lon).contains(&coordinate.longitude)
    }

    /// Returns the box as `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}
