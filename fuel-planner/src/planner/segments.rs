//! Segment chain and cost totals.
//!
//! Segment distance is measured along the route: each endpoint is snapped
//! to its nearest polyline vertex and the cumulative distances between the
//! two vertices are differenced, then the detour allowance is added.

use serde::Serialize;

use crate::domain::{Coordinate, Route};
use crate::geometry::{closest_index, cumulative_distances};

use super::config::{CostPolicy, PlannerConfig};
use super::select::SelectedStop;

/// One leg of the trip between consecutive points of
/// `[origin, stop_1, ..., stop_n, destination]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub start: Coordinate,
    pub end: Coordinate,
    /// Miles, rounded to 2 decimals.
    pub distance_miles: f64,
    /// Gallons, rounded to 2 decimals.
    pub fuel_gallons: f64,
}

/// Round to cents / hundredths.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the segment chain for `stops`.
///
/// Always returns `stops.len() + 1` segments. The along-route part of a
/// segment is clamped at zero so a stop snapped behind its predecessor
/// cannot produce negative distance.
pub fn build_segments(
    route: &Route,
    stops: &[SelectedStop],
    config: &PlannerConfig,
) -> Vec<RouteSegment> {
    let points = route.geometry();
    let cumulative = cumulative_distances(points);
    let along = |c: Coordinate| closest_index(c, points).map_or(0.0, |i| cumulative[i]);

    let chain: Vec<Coordinate> = std::iter::once(route.origin())
        .chain(stops.iter().map(|s| s.station.coordinate))
        .chain(std::iter::once(route.destination()))
        .collect();

    chain
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let distance = (along(end) - along(start)).max(0.0) + config.detour_allowance_miles;
            let fuel = fuel_needed(distance, config.fuel_efficiency_mpg);

            RouteSegment {
                start,
                end,
                distance_miles: round2(distance),
                fuel_gallons: round2(fuel),
            }
        })
        .collect()
}

/// Gallons needed for `distance` miles; zero when efficiency is not positive.
fn fuel_needed(distance: f64, mpg: f64) -> f64 {
    if mpg > 0.0 { distance / mpg } else { 0.0 }
}

/// Total fuel cost in dollars, rounded to cents.
///
/// With [`CostPolicy::PairedByIndex`] segment `i` is priced at stop `i` and
/// the final leg into the destination is not priced. With no stops the
/// total is zero under either policy.
pub fn total_cost(segments: &[RouteSegment], stops: &[SelectedStop], policy: CostPolicy) -> f64 {
    let Some(last) = stops.last() else {
        return 0.0;
    };

    let paired: f64 = segments
        .iter()
        .zip(stops)
        .map(|(segment, stop)| segment.fuel_gallons * stop.effective_price)
        .sum();

    let final_leg = match policy {
        CostPolicy::PairedByIndex => 0.0,
        CostPolicy::FinalLegAtLastStop => segments
            .get(stops.len())
            .map_or(0.0, |segment| segment.fuel_gallons * last.effective_price),
    };

    round2(paired + final_leg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GasStop, StationId};
    use crate::geometry::distance_miles;

    fn northbound(n: usize) -> Route {
        let geometry: Vec<Coordinate> = (0..n)
            .map(|i| Coordinate::new(30.0 + i as f64 * 0.1, -100.0))
            .collect();
        let total = *cumulative_distances(&geometry).last().unwrap();
        Route::new(geometry[0], geometry[n - 1], total, geometry, None).unwrap()
    }

    fn selected(coordinate: Coordinate, price: f64) -> SelectedStop {
        SelectedStop {
            station: GasStop {
                id: StationId::new("1"),
                name: "Stop".to_string(),
                address: "Main St".to_string(),
                city: String::new(),
                state: String::new(),
                coordinate,
                price_per_gallon: price,
            },
            effective_price: price,
        }
    }

    #[test]
    fn round2_rounds_half_away() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_000_1), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn no_stops_gives_one_segment_and_zero_cost() {
        let route = northbound(20);
        let config = PlannerConfig::default();
        let segments = build_segments(&route, &[], &config);

        assert_eq!(segments.len(), 1);
        let expected = round2(route.distance_miles() + 10.0);
        assert_eq!(segments[0].distance_miles, expected);
        assert_eq!(
            segments[0].fuel_gallons,
            round2((route.distance_miles() + 10.0) / 10.0)
        );
        assert_eq!(total_cost(&segments, &[], config.cost_policy), 0.0);
    }

    #[test]
    fn stops_split_the_route() {
        let route = northbound(21);
        let config = PlannerConfig::default();
        let stops = [
            selected(Coordinate::new(30.5, -100.01), 3.0),
            selected(Coordinate::new(31.5, -99.99), 4.0),
        ];

        let segments = build_segments(&route, &stops, &config);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].start, route.origin());
        assert_eq!(segments[0].end, stops[0].station.coordinate);
        assert_eq!(segments[2].end, route.destination());

        let g = route.geometry();
        let first = distance_miles(g[0], g[5]) + 10.0;
        assert!((segments[0].distance_miles - round2(first)).abs() < 0.011);

        // Along-route parts sum to the whole route
        let along: f64 = segments.iter().map(|s| s.distance_miles - 10.0).sum();
        assert!((along - route.distance_miles()).abs() < 0.05);
    }

    #[test]
    fn paired_policy_drops_final_leg() {
        let segments = vec![
            RouteSegment {
                start: Coordinate::new(0.0, 0.0),
                end: Coordinate::new(1.0, 0.0),
                distance_miles: 100.0,
                fuel_gallons: 10.0,
            },
            RouteSegment {
                start: Coordinate::new(1.0, 0.0),
                end: Coordinate::new(2.0, 0.0),
                distance_miles: 50.0,
                fuel_gallons: 5.0,
            },
        ];
        let stops = [selected(Coordinate::new(1.0, 0.0), 3.456)];

        assert_eq!(
            total_cost(&segments, &stops, CostPolicy::PairedByIndex),
            34.56
        );
        assert_eq!(
            total_cost(&segments, &stops, CostPolicy::FinalLegAtLastStop),
            round2(34.56 + 17.28)
        );
    }

    #[test]
    fn backtracking_stop_does_not_go_negative() {
        let route = northbound(21);
        let config = PlannerConfig::default().with_detour_allowance(0.0);
        let stops = [
            selected(Coordinate::new(31.5, -100.0), 3.0),
            selected(Coordinate::new(30.5, -100.0), 3.0),
        ];

        let segments = build_segments(&route, &stops, &config);
        assert_eq!(segments[1].distance_miles, 0.0);
        assert_eq!(segments[1].fuel_gallons, 0.0);
    }

    #[test]
    fn fuel_guard_on_zero_efficiency() {
        assert_eq!(fuel_needed(100.0, 0.0), 0.0);
        assert_eq!(fuel_needed(100.0, 10.0), 10.0);
    }
}
