//! Spatial filters over the catalog.

use crate::domain::{Coordinate, GasStop, Route};
use crate::geometry::distance_miles;

use super::catalog::StationCatalog;

/// Stations inside the route's bounding box (inclusive on all sides).
///
/// Cheap prefilter applied once per route before radius checks.
pub fn stations_in_bounding_box<'a>(
    route: &Route,
    catalog: &'a StationCatalog,
) -> Vec<&'a GasStop> {
    let bbox = route.bbox();
    catalog
        .stations()
        .iter()
        .filter(|s| bbox.contains(&s.coordinate))
        .collect()
}

/// Stations within `radius_miles` (geodesic) of `waypoint`, in input order.
pub fn stations_near_waypoint<'a>(
    waypoint: Coordinate,
    prefiltered: &[&'a GasStop],
    radius_miles: f64,
) -> Vec<&'a GasStop> {
    prefiltered
        .iter()
        .copied()
        .filter(|s| distance_miles(waypoint, s.coordinate) <= radius_miles)
        .collect()
}
