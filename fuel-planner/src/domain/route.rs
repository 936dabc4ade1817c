//! Driving route produced by the directions provider.

use serde::{Deserialize, Serialize};

use super::coordinate::{BoundingBox, Coordinate};
use super::error::DomainError;

/// Unvalidated route fields, as read from fixtures or provider payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteParts {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub distance_miles: f64,
    pub geometry: Vec<Coordinate>,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

/// A road route between two coordinates.
///
/// Geometry is in travel order and always has at least two points.
/// Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteParts")]
pub struct Route {
    origin: Coordinate,
    destination: Coordinate,
    distance_miles: f64,
    geometry: Vec<Coordinate>,
    bbox: BoundingBox,
}

impl Route {
    /// Create a route, checking geometry length and distance.
    ///
    /// When `bbox` is `None` it is computed from the geometry.
    pub fn new(
        origin: Coordinate,
        destination: Coordinate,
        distance_miles: f64,
        geometry: Vec<Coordinate>,
        bbox: Option<BoundingBox>,
    ) -> Result<Self, DomainError> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(DomainError::InvalidDistance(distance_miles));
        }

        if geometry.len() < 2 {
            return Err(DomainError::GeometryTooShort(geometry.len()));
        }

        let bbox = match bbox {
            Some(bbox) => bbox,
            None => BoundingBox::enclosing(&geometry)
                .ok_or(DomainError::GeometryTooShort(geometry.len()))?,
        };

        Ok(Self {
            origin,
            destination,
            distance_miles,
            geometry,
            bbox,
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Total driving distance reported by the provider.
    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Consume the route, returning its geometry.
    pub fn into_geometry(self) -> Vec<Coordinate> {
        self.geometry
    }
}

impl TryFrom<RouteParts> for Route {
    type Error = DomainError;

    fn try_from(parts: RouteParts) -> Result<Self, Self::Error> {
        Self::new(
            parts.origin,
            parts.destination,
            parts.distance_miles,
            parts.geometry,
            parts.bbox,
        )
    }
}
