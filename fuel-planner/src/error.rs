//! Error returned by route optimisation.

use crate::routing::RoutingError;
use crate::stations::CatalogError;

/// Errors from [`Optimizer::optimize`](crate::planner::Optimizer::optimize).
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// Geocoding or directions lookup failed
    #[error("routing unavailable: {0}")]
    RoutingUnavailable(#[from] RoutingError),

    /// Station dataset could not be loaded
    #[error("station data error: {0}")]
    Catalog(#[from] CatalogError),
}
