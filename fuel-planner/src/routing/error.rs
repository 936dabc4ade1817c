//! Routing provider error types.

use crate::domain::DomainError;

/// Errors from geocoding and directions lookups.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check ORS_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by routing provider")]
    RateLimited,

    /// Provider returned a non-success status
    #[error("service error {status}: {message}")]
    Service { status: u16, message: String },

    /// Response body could not be understood
    #[error("malformed response: {message}")]
    Malformed { message: String },

    /// Geocoding found no match
    #[error("no location found for {query:?}")]
    NotFound { query: String },

    /// Provider data violates a domain invariant
    #[error("invalid route data: {0}")]
    InvalidRoute(#[from] DomainError),

    /// Caller input rejected before any lookup
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
