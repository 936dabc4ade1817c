//! Wire types for the Nominatim and OpenRouteService APIs.
//!
//! These mirror the JSON structure; conversion to domain types happens in
//! `convert`.

use serde::{Deserialize, Serialize};

/// One Nominatim search hit. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
}

/// Body of an OpenRouteService directions request.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    /// `[[lon, lat], [lon, lat]]`
    pub coordinates: Vec<[f64; 2]>,
    pub instructions: bool,
    pub geometry: bool,
    pub units: &'static str,
}

/// GeoJSON directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// A single route in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    #[serde(default)]
    pub properties: RouteProperties,
    #[serde(default)]
    pub geometry: Option<LineStringGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteProperties {
    pub summary: Option<RouteSummary>,
}

/// Route totals in the requested units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSummary {
    /// ORS omits distance for zero-length routes
    #[serde(default)]
    pub distance: f64,
}

/// GeoJSON LineString; positions are `[lon, lat]` or `[lon, lat, elevation]`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineStringGeometry {
    pub coordinates: Vec<Vec<f64>>,
}
