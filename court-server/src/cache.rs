//! Caching layer for postcode resolutions.
//!
//! A postcode's coordinates and administrative authority change on the
//! cadence of boundary reviews, not of requests, so successful
//! resolutions are cached for hours. Failures are never cached: a
//! transient outage should not pin an error against a postcode.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Postcode, ResolvedLocation};
use crate::os::{OsClient, OsError};
use crate::search::{LocationResolver, ResolveError};

/// Configuration for the resolution cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached resolutions.
    pub ttl: Duration,

    /// Maximum number of cached postcodes.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(12 * 60 * 60),
            max_capacity: 50_000,
        }
    }
}

/// Places client with caching, keyed by the canonical postcode form.
pub struct CachedOsClient {
    client: OsClient,
    cache: MokaCache<String, ResolvedLocation>,
}

impl CachedOsClient {
    pub fn new(client: OsClient, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Resolve a postcode, using the cache if possible.
    pub async fn resolve_postcode(
        &self,
        postcode: &Postcode,
    ) -> Result<ResolvedLocation, OsError> {
        if let Some(cached) = self.cache.get(postcode.as_str()).await {
            return Ok(cached);
        }

        let location = self.client.resolve_postcode(postcode).await?;
        self.cache
            .insert(postcode.as_str().to_string(), location.clone())
            .await;

        Ok(location)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &OsClient {
        &self.client
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl LocationResolver for CachedOsClient {
    fn resolve(
        &self,
        postcode: &Postcode,
    ) -> impl Future<Output = Result<ResolvedLocation, ResolveError>> + Send {
        async move {
            self.resolve_postcode(postcode)
                .await
                .map_err(to_resolve_error)
        }
    }
}

fn to_resolve_error(error: OsError) -> ResolveError {
    match error {
        OsError::PostcodeNotFound { .. } => ResolveError::NotFound,
        other => ResolveError::Unavailable {
            message: other.to_string(),
        },
    }
}
