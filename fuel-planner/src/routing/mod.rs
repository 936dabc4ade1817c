//! Geocoding and directions providers.
//!
//! The planner consumes routes through the
//! [`RouteProvider`](crate::planner::RouteProvider) trait. This module
//! provides the HTTP implementation (Nominatim for geocoding,
//! OpenRouteService for directions), a memoising geocode wrapper, and an
//! in-memory mock for tests and offline runs.

mod cache;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use cache::{CachedRouteProvider, GeocodeCacheConfig};
pub use client::{RoutingClient, RoutingConfig};
pub use convert::{coordinate_from_place, route_from_directions};
pub use error::RoutingError;
pub use mock::MockRouteProvider;
pub use types::{DirectionsRequest, DirectionsResponse, NominatimPlace};
