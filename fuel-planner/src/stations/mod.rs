//! Fuel station catalog.
//!
//! Loads the static price dataset into memory once per process and provides
//! the spatial filters used to find candidate stops along a route.

mod catalog;
mod error;
mod filter;
mod shared;

pub use catalog::StationCatalog;
pub use error::CatalogError;
pub use filter::{stations_in_bounding_box, stations_near_waypoint};
pub use shared::SharedCatalog;
