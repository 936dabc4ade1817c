//! Route optimisation pipeline.
//!
//! route -> checkpoints -> candidate stations -> cheapest stop per
//! checkpoint -> segments and cost. Each stage only reads the previous
//! stage's output; the catalog is shared read-only.

use std::future::Future;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::domain::{Coordinate, GasStop, Route};
use crate::error::OptimizeError;
use crate::routing::RoutingError;
use crate::stations::{
    SharedCatalog, StationCatalog, stations_in_bounding_box, stations_near_waypoint,
};

use super::config::{InvalidConfig, PlannerConfig};
use super::segments::{RouteSegment, build_segments, round2, total_cost};
use super::select::{SelectedStop, select_cheapest};
use super::waypoints::plan_waypoints;

/// Trait for providing geocodes and routes.
///
/// This abstraction allows the optimizer to be tested with mock data.
pub trait RouteProvider {
    /// Resolve a free-text place name to a coordinate.
    fn geocode(
        &self,
        place: &str,
    ) -> impl Future<Output = Result<Coordinate, RoutingError>> + Send;

    /// Fetch the driving route between two coordinates.
    fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<Route, RoutingError>> + Send;
}

/// A complete refuelling plan.
#[derive(Debug, Clone, Serialize)]
pub struct OptimalRoute {
    /// Route distance in miles, rounded to 2 decimals.
    pub total_distance_miles: f64,

    /// Fuel cost in dollars, rounded to cents.
    pub total_fuel_cost: f64,

    /// Chosen stops in travel order.
    pub gas_stops: Vec<SelectedStop>,

    /// Full route geometry, for display.
    pub route_coordinates: Vec<Coordinate>,

    /// `gas_stops.len() + 1` segments from origin to destination.
    pub segments: Vec<RouteSegment>,

    /// Refuelling checkpoints that were searched.
    pub waypoints: Vec<Coordinate>,

    /// Candidate stations per checkpoint, for display.
    pub nearby_stations: Vec<Vec<GasStop>>,
}

impl OptimalRoute {
    /// Total fuel over all segments, in gallons.
    pub fn total_fuel_gallons(&self) -> f64 {
        round2(self.segments.iter().map(|s| s.fuel_gallons).sum())
    }
}

/// Plan refuelling stops for an already-fetched route.
///
/// Pure function of its inputs; the catalog is not modified.
pub fn plan_route(route: Route, catalog: &StationCatalog, config: &PlannerConfig) -> OptimalRoute {
    let waypoints = plan_waypoints(
        &route,
        config.vehicle_range_miles,
        config.waypoint_interval_miles,
    );
    debug!(
        distance_miles = route.distance_miles(),
        waypoints = waypoints.len(),
        "planned checkpoints"
    );

    let in_box = if waypoints.is_empty() {
        Vec::new()
    } else {
        stations_in_bounding_box(&route, catalog)
    };
    trace!(
        stations = in_box.len(),
        "stations inside route bounding box"
    );

    let mut gas_stops = Vec::new();
    let mut nearby_stations = Vec::with_capacity(waypoints.len());

    for (idx, waypoint) in waypoints.iter().enumerate() {
        let candidates = stations_near_waypoint(*waypoint, &in_box, config.search_radius_miles);

        match select_cheapest(candidates.iter().copied(), &config.highway_discount) {
            Some(stop) => {
                debug!(
                    checkpoint = idx,
                    candidates = candidates.len(),
                    station = %stop.station.id,
                    price = stop.effective_price,
                    "selected stop"
                );
                gas_stops.push(stop);
            }
            None => debug!(checkpoint = idx, "no stations within search radius"),
        }

        nearby_stations.push(candidates.into_iter().cloned().collect());
    }

    let segments = build_segments(&route, &gas_stops, config);
    let total_fuel_cost = total_cost(&segments, &gas_stops, config.cost_policy);

    OptimalRoute {
        total_distance_miles: round2(route.distance_miles()),
        total_fuel_cost,
        gas_stops,
        route_coordinates: route.into_geometry(),
        segments,
        waypoints,
        nearby_stations,
    }
}

/// Route optimiser: geocodes, fetches the route and plans stops.
pub struct Optimizer<P> {
    provider: P,
    catalog: SharedCatalog,
    config: PlannerConfig,
}

impl<P: RouteProvider> Optimizer<P> {
    /// Create an optimiser. Fails if `config` is out of range.
    pub fn new(
        provider: P,
        catalog: SharedCatalog,
        config: PlannerConfig,
    ) -> Result<Self, InvalidConfig> {
        config.validate()?;
        Ok(Self {
            provider,
            catalog,
            config,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Plan the cheapest refuelling stops between two place names.
    pub async fn optimize(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<OptimalRoute, OptimizeError> {
        let origin = normalize_place("origin", origin)?;
        let destination = normalize_place("destination", destination)?;

        let (from, to) = futures::try_join!(
            self.provider.geocode(&origin),
            self.provider.geocode(&destination)
        )?;
        let route = self.provider.fetch_route(from, to).await?;
        let catalog = self.catalog.get().await?;

        let plan = plan_route(route, &catalog, &self.config);
        info!(
            %origin,
            %destination,
            distance_miles = plan.total_distance_miles,
            stops = plan.gas_stops.len(),
            cost = plan.total_fuel_cost,
            "optimised route"
        );
        Ok(plan)
    }
}

/// Trim and lower-case a place name, rejecting blanks.
fn normalize_place(which: &str, name: &str) -> Result<String, RoutingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoutingError::InvalidRequest(format!("{which} is required")));
    }
    Ok(name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundingBox, StationId};
    use crate::geometry::cumulative_distances;
    use crate::routing::MockRouteProvider;
    use crate::stations::CatalogError;

    /// Due-north route along 100W starting at 30N, with a box wide enough
    /// for stations just off the line.
    fn northbound(n: usize) -> Route {
        let geometry: Vec<Coordinate> = (0..n)
            .map(|i| Coordinate::new(30.0 + i as f64 * 0.1, -100.0))
            .collect();
        let total = *cumulative_distances(&geometry).last().unwrap();
        let bbox = BoundingBox::from_slice(&[-101.0, 29.5, -99.0, 46.0]).unwrap();
        Route::new(geometry[0], geometry[n - 1], total, geometry, Some(bbox)).unwrap()
    }

    fn stop(id: &str, address: &str, coordinate: Coordinate, price: f64) -> GasStop {
        GasStop {
            id: StationId::new(id),
            name: format!("Stop {id}"),
            address: address.to_string(),
            city: String::new(),
            state: String::new(),
            coordinate,
            price_per_gallon: price,
        }
    }

    fn offset(c: Coordinate, dlat: f64) -> Coordinate {
        Coordinate::new(c.latitude + dlat, c.longitude)
    }

    #[test]
    fn short_route_has_no_stops() {
        // ~4.4 degrees is about 304 miles
        let route = northbound(45);
        assert!(route.distance_miles() < 500.0);
        let catalog = StationCatalog::new(vec![stop("1", "I-35", route.geometry()[20], 3.0)]);

        let plan = plan_route(route, &catalog, &PlannerConfig::default());

        assert!(plan.waypoints.is_empty());
        assert!(plan.gas_stops.is_empty());
        assert!(plan.nearby_stations.is_empty());
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.total_fuel_cost, 0.0);
    }

    #[test]
    fn long_route_picks_highway_stop_and_skips_empty_checkpoint() {
        let route = northbound(150);
        let config = PlannerConfig::default();
        let waypoints = plan_waypoints(&route, 500.0, 450.0);
        assert_eq!(waypoints.len(), 2);

        // Both stations ~1.4 miles from the first checkpoint; none near the second
        let catalog = StationCatalog::new(vec![
            stop("main", "45 Main Street", offset(waypoints[0], -0.02), 3.48),
            stop("hwy", "123 I-40 Exit 5", offset(waypoints[0], 0.02), 3.50),
            stop("far", "I-80 Exit 9", Coordinate::new(45.9, -100.0), 2.00),
        ]);

        let plan = plan_route(route.clone(), &catalog, &config);

        assert_eq!(plan.waypoints, waypoints);
        assert_eq!(plan.nearby_stations.len(), 2);
        assert_eq!(plan.nearby_stations[0].len(), 2);
        assert!(plan.nearby_stations[1].is_empty());

        assert_eq!(plan.gas_stops.len(), 1);
        let chosen = &plan.gas_stops[0];
        assert_eq!(chosen.station.id, StationId::new("hwy"));
        assert!((chosen.effective_price - 3.45).abs() < 1e-9);

        assert_eq!(plan.segments.len(), 2);
        assert_eq!(
            plan.total_fuel_cost,
            round2(plan.segments[0].fuel_gallons * chosen.effective_price)
        );

        // Catalog untouched, second run identical
        assert_eq!(catalog.stations()[1].price_per_gallon, 3.50);
        let again = plan_route(route, &catalog, &config);
        assert_eq!(again.gas_stops, plan.gas_stops);
        assert_eq!(again.total_fuel_cost, plan.total_fuel_cost);
    }

    #[test]
    fn same_station_at_two_checkpoints_discounted_once_each() {
        // Large radius so one station serves both checkpoints
        let route = northbound(150);
        let config = PlannerConfig::default().with_search_radius(1000.0);
        let catalog = StationCatalog::new(vec![stop(
            "hwy",
            "I-40 Exit 5",
            route.geometry()[100],
            3.50,
        )]);

        let plan = plan_route(route, &catalog, &config);

        assert_eq!(plan.gas_stops.len(), 2);
        for s in &plan.gas_stops {
            assert!((s.effective_price - 3.45).abs() < 1e-9);
        }
    }

    #[test]
    fn stations_outside_bbox_are_ignored() {
        let geometry: Vec<Coordinate> = (0..150)
            .map(|i| Coordinate::new(30.0 + i as f64 * 0.1, -100.0))
            .collect();
        let total = *cumulative_distances(&geometry).last().unwrap();
        // Default box is the zero-width line itself
        let route = Route::new(geometry[0], geometry[149], total, geometry, None).unwrap();
        let waypoints = plan_waypoints(&route, 500.0, 450.0);

        let near_but_outside = Coordinate::new(waypoints[0].latitude, -100.05);
        let catalog = StationCatalog::new(vec![stop("x", "Main", near_but_outside, 3.0)]);

        let plan = plan_route(route, &catalog, &PlannerConfig::default());
        assert!(plan.gas_stops.is_empty());
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.total_fuel_cost, 0.0);
    }

    fn optimizer(route: Route, catalog: StationCatalog) -> Optimizer<MockRouteProvider> {
        let provider = MockRouteProvider::new()
            .with_place("oklahoma city", route.origin())
            .with_place("amarillo", route.destination())
            .with_route(route);
        Optimizer::new(
            provider,
            SharedCatalog::preloaded(catalog),
            PlannerConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn optimize_end_to_end() {
        let optimizer = optimizer(northbound(45), StationCatalog::default());

        let plan = optimizer
            .optimize("  Oklahoma City ", "AMARILLO")
            .await
            .unwrap();
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.total_fuel_cost, 0.0);
        assert_eq!(plan.route_coordinates.len(), 45);
        assert_eq!(optimizer.provider().geocode_calls(), 2);
    }

    #[tokio::test]
    async fn unknown_place_is_routing_unavailable() {
        let optimizer = optimizer(northbound(45), StationCatalog::default());

        let err = optimizer
            .optimize("atlantis", "amarillo")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::RoutingUnavailable(RoutingError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn blank_place_is_rejected() {
        let optimizer = optimizer(northbound(45), StationCatalog::default());

        let err = optimizer.optimize("   ", "amarillo").await.unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::RoutingUnavailable(RoutingError::InvalidRequest(_))
        ));
        assert_eq!(optimizer.provider().geocode_calls(), 0);
    }

    #[tokio::test]
    async fn missing_dataset_is_catalog_error() {
        let route = northbound(45);
        let provider = MockRouteProvider::new()
            .with_place("a", route.origin())
            .with_place("b", route.destination())
            .with_route(route);
        let optimizer = Optimizer::new(
            provider,
            SharedCatalog::new("/nonexistent/gas_stations.json"),
            PlannerConfig::default(),
        )
        .unwrap();

        let err = optimizer.optimize("a", "b").await.unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Catalog(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Optimizer::new(
            MockRouteProvider::new(),
            SharedCatalog::preloaded(StationCatalog::default()),
            PlannerConfig::default().with_waypoint_interval(0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn normalize_place_names() {
        assert_eq!(normalize_place("origin", " New York ").unwrap(), "new york");
        assert!(normalize_place("origin", "").is_err());
    }
}
