//! Domain types for the fuel-stop planner.
//!
//! This module contains the validated value types the planner works on.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod coordinate;
mod error;
mod gas_stop;
mod route;

pub use coordinate::{BoundingBox, Coordinate};
pub use error::DomainError;
pub use gas_stop::{GasStop, StationId};
pub use route::{Route, RouteParts};
