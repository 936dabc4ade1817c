//! Fuel-stop route planner.
//!
//! Given two US place names, fetches the driving route, spaces refuelling
//! checkpoints along it, and picks the cheapest station near each
//! checkpoint from a static price dataset.

pub mod cli;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod planner;
pub mod routing;
pub mod stations;

pub use error::OptimizeError;
