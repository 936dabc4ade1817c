//! Memoising wrapper for geocode lookups.
//!
//! Place names resolve to the same coordinate for the life of the process,
//! so successful lookups are cached by normalised name. Failures are not
//! cached. Route fetches always go to the inner provider.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Coordinate, Route};
use crate::planner::RouteProvider;

use super::error::RoutingError;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Route provider with cached geocoding.
pub struct CachedRouteProvider<P> {
    inner: P,
    places: MokaCache<String, Coordinate>,
}

impl<P: RouteProvider + Sync> CachedRouteProvider<P> {
    /// Wrap `inner` with a geocode cache.
    pub fn new(inner: P, config: &GeocodeCacheConfig) -> Self {
        let places = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, places }
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached place names.
    pub fn cache_entry_count(&self) -> u64 {
        self.places.entry_count()
    }

    /// Drop all cached place names.
    pub fn invalidate_cache(&self) {
        self.places.invalidate_all();
    }
}

impl<P: RouteProvider + Sync> RouteProvider for CachedRouteProvider<P> {
    async fn geocode(&self, place: &str) -> Result<Coordinate, RoutingError> {
        let key = place.trim().to_lowercase();

        if let Some(cached) = self.places.get(&key).await {
            trace!(place = %key, "geocode cache hit");
            return Ok(cached);
        }

        let coordinate = self.inner.geocode(place).await?;
        self.places.insert(key, coordinate).await;
        Ok(coordinate)
    }

    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RoutingError> {
        self.inner.fetch_route(origin, destination).await
    }
}
