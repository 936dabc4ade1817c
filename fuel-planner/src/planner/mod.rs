//! Fuel-stop planner.
//!
//! This module implements the route optimisation pipeline that answers:
//! "Where along this route should I refuel, and what will the fuel cost?"
//!
//! Checkpoints are placed at fixed intervals along the route, the cheapest
//! station near each checkpoint is chosen, and the trip is split into
//! segments between consecutive stops for distance and cost totals.

mod config;
mod optimize;
mod segments;
mod select;
mod waypoints;

pub use config::{CostPolicy, HighwayDiscount, InvalidConfig, PlannerConfig};
pub use optimize::{OptimalRoute, Optimizer, RouteProvider, plan_route};
pub use segments::{RouteSegment, build_segments, round2, total_cost};
pub use select::{SelectedStop, select_cheapest};
pub use waypoints::plan_waypoints;
