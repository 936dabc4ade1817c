//! In-memory station catalog loaded from the JSON price dataset.
//!
//! The dataset is a JSON array of records:
//!
//! ```json
//! [{"truckstop_id": "7", "name": "...", "address": "I-40, EXIT 76",
//!   "city": "Amarillo", "state": "TX",
//!   "latitude": 35.2, "longitude": -101.8, "price_per_gallon": 3.29}]
//! ```
//!
//! `truckstop_id`, `latitude`, `longitude` and `price_per_gallon` are
//! required. Text fields default to empty.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Coordinate, GasStop, StationId};

use super::error::CatalogError;

/// Raw dataset record before validation.
#[derive(Debug, Deserialize)]
struct StationRecord {
    truckstop_id: Option<Value>,
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    latitude: Option<Value>,
    longitude: Option<Value>,
    price_per_gallon: Option<Value>,
}

/// Immutable set of stations.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<GasStop>,
}

impl StationCatalog {
    /// Create a catalog from already-validated stations.
    pub fn new(stations: Vec<GasStop>) -> Self {
        Self { stations }
    }

    /// Read and validate the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a dataset. Any bad record fails the whole load.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;

        let stations = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| parse_record(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        if stations.is_empty() {
            warn!("station dataset contains no records");
        }
        debug!(count = stations.len(), "parsed station dataset");

        Ok(Self { stations })
    }

    pub fn stations(&self) -> &[GasStop] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

fn parse_record(index: usize, record: StationRecord) -> Result<GasStop, CatalogError> {
    let id = parse_id(index, record.truckstop_id)?;
    let latitude = required_number(index, "latitude", record.latitude)?;
    let longitude = required_number(index, "longitude", record.longitude)?;
    let price = required_number(index, "price_per_gallon", record.price_per_gallon)?;

    let coordinate =
        Coordinate::parse(latitude, longitude).map_err(|e| CatalogError::InvalidField {
            index,
            field: "coordinate",
            message: e.to_string(),
        })?;

    if price < 0.0 {
        return Err(CatalogError::InvalidField {
            index,
            field: "price_per_gallon",
            message: format!("must not be negative, got {price}"),
        });
    }

    Ok(GasStop {
        id,
        name: record.name.unwrap_or_default(),
        address: record.address.unwrap_or_default(),
        city: record.city.unwrap_or_default().trim().to_string(),
        state: record.state.unwrap_or_default().trim().to_string(),
        coordinate,
        price_per_gallon: price,
    })
}

/// Accept a non-empty string or an integer identifier.
fn parse_id(index: usize, value: Option<Value>) -> Result<StationId, CatalogError> {
    let field = "truckstop_id";
    match value {
        None | Some(Value::Null) => Err(CatalogError::MissingField { index, field }),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(StationId::new(s.trim())),
        Some(Value::Number(n)) if n.is_u64() || n.is_i64() => Ok(StationId::new(n.to_string())),
        Some(other) => Err(CatalogError::InvalidField {
            index,
            field,
            message: format!("expected a non-empty string or integer, got {other}"),
        }),
    }
}

/// A present, finite JSON number.
fn required_number(
    index: usize,
    field: &'static str,
    value: Option<Value>,
) -> Result<f64, CatalogError> {
    match value {
        None | Some(Value::Null) => Err(CatalogError::MissingField { index, field }),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(CatalogError::InvalidField {
                index,
                field,
                message: format!("not a finite number: {n}"),
            }),
        },
        Some(other) => Err(CatalogError::InvalidField {
            index,
            field,
            message: format!("expected a number, got {other}"),
        }),
    }
}
