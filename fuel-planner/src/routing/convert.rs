//! Conversion from provider wire types to domain types.

use crate::domain::{BoundingBox, Coordinate, Route};

use super::error::RoutingError;
use super::types::{DirectionsResponse, NominatimPlace};

/// Parse the first geocoding hit into a coordinate.
pub fn coordinate_from_place(
    query: &str,
    places: &[NominatimPlace],
) -> Result<Coordinate, RoutingError> {
    let place = places.first().ok_or_else(|| RoutingError::NotFound {
        query: query.to_string(),
    })?;

    let parse = |axis: &str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|e| RoutingError::Malformed {
                message: format!("{axis} {value:?} for {query:?}: {e}"),
            })
    };

    let latitude = parse("latitude", &place.lat)?;
    let longitude = parse("longitude", &place.lon)?;
    Ok(Coordinate::parse(latitude, longitude)?)
}

/// Build a [`Route`] from the first feature of a GeoJSON directions response.
///
/// The feature bbox is preferred, then the collection bbox, then one
/// computed from the geometry. Boxes with elevation (6 values) are
/// ignored in favour of the computed one.
pub fn route_from_directions(
    origin: Coordinate,
    destination: Coordinate,
    response: DirectionsResponse,
) -> Result<Route, RoutingError> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::Malformed {
            message: "response contains no route".to_string(),
        })?;

    let line = feature.geometry.ok_or_else(|| RoutingError::Malformed {
        message: "route has no geometry".to_string(),
    })?;

    let geometry = line
        .coordinates
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Coordinate::parse(*lat, *lon).map_err(RoutingError::from),
            _ => Err(RoutingError::Malformed {
                message: format!("position with {} value(s)", position.len()),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = feature
        .properties
        .summary
        .ok_or_else(|| RoutingError::Malformed {
            message: "route has no summary".to_string(),
        })?;

    let bbox = feature
        .bbox
        .or(response.bbox)
        .filter(|values| values.len() == 4)
        .map(|values| BoundingBox::from_slice(&values))
        .transpose()?;

    let route = Route::new(origin, destination, summary.distance, geometry, bbox)?;
    Ok(route)
}
