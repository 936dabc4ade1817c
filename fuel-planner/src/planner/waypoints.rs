//! Refuelling checkpoint placement.
//!
//! Checkpoints are snapped to existing polyline vertices: for each target
//! distance the lower endpoint of the first bracket containing it is used,
//! never an interpolated position.

use crate::domain::{Coordinate, Route};
use crate::geometry::cumulative_distances;

/// Plan refuelling checkpoints along `route`.
///
/// Returns nothing when the route fits within `vehicle_range_miles`.
/// Otherwise targets `interval, 2*interval, ...` while below the route
/// distance; targets past the end of the geometry are skipped.
pub fn plan_waypoints(
    route: &Route,
    vehicle_range_miles: f64,
    interval_miles: f64,
) -> Vec<Coordinate> {
    let total = route.distance_miles();
    if total <= vehicle_range_miles || interval_miles.is_nan() || interval_miles <= 0.0 {
        return Vec::new();
    }

    let points = route.geometry();
    let cumulative = cumulative_distances(points);

    target_distances(total, interval_miles)
        .filter_map(|target| point_at_distance(points, &cumulative, target))
        .collect()
}

/// `interval, 2*interval, ...` strictly below `total`.
fn target_distances(total: f64, interval: f64) -> impl Iterator<Item = f64> {
    (1u32..)
        .map(move |k| f64::from(k) * interval)
        .take_while(move |target| *target < total)
}

/// Lower endpoint of the first `[cumulative[i], cumulative[i + 1]]` bracket
/// containing `target`.
fn point_at_distance(
    points: &[Coordinate],
    cumulative: &[f64],
    target: f64,
) -> Option<Coordinate> {
    cumulative
        .windows(2)
        .position(|w| w[0] <= target && target <= w[1])
        .map(|i| points[i])
}
