//! Mock route provider for testing without API access.
//!
//! Serves geocodes from a fixed name table and a single canned route,
//! optionally loaded from a JSON fixture file:
//!
//! ```json
//! {"places": {"oklahoma city": {"latitude": 35.47, "longitude": -97.52}},
//!  "route": {"origin": {...}, "destination": {...}, "distance_miles": 259.3,
//!            "geometry": [{...}, {...}]}}
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::domain::{Coordinate, Route};
use crate::planner::RouteProvider;

use super::error::RoutingError;

#[derive(Debug, Deserialize)]
struct RouteFixture {
    #[serde(default)]
    places: HashMap<String, Coordinate>,
    route: Option<Route>,
}

/// Mock provider serving canned data.
#[derive(Debug, Default)]
pub struct MockRouteProvider {
    places: HashMap<String, Coordinate>,
    route: Option<Route>,
    geocode_calls: AtomicUsize,
}

impl MockRouteProvider {
    /// Create an empty mock: every geocode fails and no route is served.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load places and route from a JSON fixture file.
    pub fn from_fixture(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RoutingError::InvalidRequest(format!("failed to read fixture {path:?}: {e}"))
        })?;
        let fixture: RouteFixture =
            serde_json::from_str(&json).map_err(|e| RoutingError::Malformed {
                message: format!("fixture {path:?}: {e}"),
            })?;

        let mut mock = Self::new();
        for (name, coordinate) in fixture.places {
            mock = mock.with_place(&name, coordinate);
        }
        mock.route = fixture.route;
        Ok(mock)
    }

    /// Register a place name (matched case-insensitively).
    pub fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.places.insert(normalize(name), coordinate);
        self
    }

    /// Serve `route` for every route request.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// How many geocode requests have been made.
    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::Relaxed)
    }
}

impl RouteProvider for MockRouteProvider {
    async fn geocode(&self, place: &str) -> Result<Coordinate, RoutingError> {
        self.geocode_calls.fetch_add(1, Ordering::Relaxed);
        self.places
            .get(&normalize(place))
            .copied()
            .ok_or_else(|| RoutingError::NotFound {
                query: place.to_string(),
            })
    }

    async fn fetch_route(
        &self,
        _origin: Coordinate,
        _destination: Coordinate,
    ) -> Result<Route, RoutingError> {
        self.route.clone().ok_or_else(|| RoutingError::Service {
            status: 404,
            message: "no route configured in mock provider".to_string(),
        })
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let mock = MockRouteProvider::new();
        assert!(matches!(
            mock.geocode("atlantis").await,
            Err(RoutingError::NotFound { .. })
        ));
        assert_eq!(mock.geocode_calls(), 1);
    }

    #[tokio::test]
    async fn missing_route_is_service_error() {
        let mock = MockRouteProvider::new();
        let c = Coordinate::new(35.0, -100.0);
        assert!(matches!(
            mock.fetch_route(c, c).await,
            Err(RoutingError::Service { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn loads_fixture() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(
            &path,
            r#"{
                "places": {"Oklahoma City": {"latitude": 35.47, "longitude": -97.52}},
                "route": {
                    "origin": {"latitude": 35.47, "longitude": -97.52},
                    "destination": {"latitude": 35.22, "longitude": -101.83},
                    "distance_miles": 259.3,
                    "geometry": [
                        {"latitude": 35.47, "longitude": -97.52},
                        {"latitude": 35.22, "longitude": -101.83}
                    ]
                }
            }"#,
        )
        .unwrap();

        let mock = MockRouteProvider::from_fixture(&path).unwrap();
        let okc = mock.geocode("oklahoma city").await.unwrap();
        assert_eq!(okc, Coordinate::new(35.47, -97.52));

        let route = mock.fetch_route(okc, okc).await.unwrap();
        assert_eq!(route.distance_miles(), 259.3);
    }

    #[test]
    fn fixture_with_bad_route_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(
            &path,
            r#"{"route": {
                "origin": {"latitude": 35.47, "longitude": -97.52},
                "destination": {"latitude": 35.22, "longitude": -101.83},
                "distance_miles": 259.3,
                "geometry": []
            }}"#,
        )
        .unwrap();

        assert!(matches!(
            MockRouteProvider::from_fixture(&path),
            Err(RoutingError::Malformed { .. })
        ));
    }
}
