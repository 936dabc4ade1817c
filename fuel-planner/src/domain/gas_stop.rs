//! Fuel station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Stable identifier of a station in the price dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fuel station with its posted price.
///
/// `price_per_gallon` is the dataset price. Catalog entries are never
/// adjusted in place; highway discounts are computed at comparison time
/// (see [`crate::planner::HighwayDiscount`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasStop {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub coordinate: Coordinate,
    pub price_per_gallon: f64,
}

impl GasStop {
    /// Whether the address mentions the given interstate marker (e.g. `"I-"`).
    pub fn is_highway_accessible(&self, marker: &str) -> bool {
        !marker.is_empty() && self.address.contains(marker)
    }
}
