//! HTTP client for Nominatim geocoding and OpenRouteService directions.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::domain::{Coordinate, Route};
use crate::planner::RouteProvider;

use super::convert::{coordinate_from_place, route_from_directions};
use super::error::RoutingError;
use super::types::{DirectionsRequest, DirectionsResponse, NominatimPlace};

/// Default base URL for OpenRouteService.
const DEFAULT_DIRECTIONS_URL: &str = "https://api.openrouteservice.org";

/// Default base URL for Nominatim.
const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying user agent.
const DEFAULT_USER_AGENT: &str = "fuel-planner/0.1 (route fuel-stop planning)";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// OpenRouteService API key (sent as the `Authorization` header)
    pub api_key: String,
    /// Base URL for directions requests
    pub directions_url: String,
    /// Base URL for geocoding requests
    pub geocode_url: String,
    /// Directions profile
    pub profile: String,
    /// Restrict geocoding to this ISO country code
    pub country_code: String,
    /// Appended to place names before geocoding
    pub place_suffix: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            profile: "driving-car".to_string(),
            country_code: "us".to_string(),
            place_suffix: ", USA".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom directions base URL (for testing).
    pub fn with_directions_url(mut self, url: impl Into<String>) -> Self {
        self.directions_url = url.into();
        self
    }

    /// Set a custom geocoding base URL (for testing).
    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    /// Set the directions profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full geocoding query for a place name.
    fn geocode_query(&self, place: &str) -> String {
        format!("{place}{}", self.place_suffix)
    }
}

/// Routing API client.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    api_key: HeaderValue,
    config: RoutingConfig,
}

impl RoutingClient {
    /// Create a new routing client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            RoutingError::InvalidRequest("API key is not a valid header value".to_string())
        })?;

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            RoutingError::InvalidRequest("user agent is not a valid header value".to_string())
        })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// Look up the coordinate of a place name.
    pub async fn geocode(&self, place: &str) -> Result<Coordinate, RoutingError> {
        let query = self.config.geocode_query(place);
        let url = format!("{}/search", self.config.geocode_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", self.config.country_code.as_str()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| RoutingError::Malformed {
                message: format!("{e} (body: {})", truncate(&body)),
            })?;

        let coordinate = coordinate_from_place(&query, &places)?;
        debug!(%query, %coordinate, "geocoded place");
        Ok(coordinate)
    }

    /// Fetch the driving route between two coordinates.
    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RoutingError> {
        let url = format!(
            "{}/v2/directions/{}/geojson",
            self.config.directions_url, self.config.profile
        );

        let request = DirectionsRequest {
            coordinates: vec![
                [origin.longitude, origin.latitude],
                [destination.longitude, destination.latitude],
            ],
            instructions: false,
            geometry: true,
            units: "mi",
        };

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.api_key.clone())
            .json(&request)
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Malformed {
                message: format!("{e} (body: {})", truncate(&body)),
            })?;

        let route = route_from_directions(origin, destination, directions)?;
        debug!(
            distance_miles = route.distance_miles(),
            points = route.geometry().len(),
            "fetched route"
        );
        Ok(route)
    }
}

impl RouteProvider for RoutingClient {
    async fn geocode(&self, place: &str) -> Result<Coordinate, RoutingError> {
        RoutingClient::geocode(self, place).await
    }

    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RoutingError> {
        RoutingClient::fetch_route(self, origin, destination).await
    }
}

/// Map non-success statuses to errors.
async fn check_status(response: Response) -> Result<Response, RoutingError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(RoutingError::Unauthorized);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(RoutingError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RoutingError::Service {
            status: status.as_u16(),
            message: truncate(&body),
        });
    }

    Ok(response)
}

fn truncate(body: &str) -> String {
    body.chars().take(500).collect()
}
