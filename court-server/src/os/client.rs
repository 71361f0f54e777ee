//! OS Places HTTP client.
//!
//! One endpoint matters to the court finder: postcode search. The client
//! turns that call into a `ResolvedLocation`, mapping OS status codes to
//! errors the search layer can act on.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Postcode, ResolvedLocation};

use super::convert::{ConversionError, convert_postcode_response};
use super::error::OsError;
use super::types::OsPostcodeResponse;

const DEFAULT_BASE_URL: &str = "https://api.os.uk";

/// In-flight request ceiling; OS throttles well below this per key.
const DEFAULT_MAX_IN_FLIGHT: usize = 5;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the OS Places client.
#[derive(Debug, Clone)]
pub struct OsConfig {
    /// API key, sent as the `key` query parameter on every request.
    pub api_key: String,
    /// API root; overridden in tests to point at a local server.
    pub base_url: String,
    /// Cap on concurrent requests.
    pub max_in_flight: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl OsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_in_flight(mut self, n: usize) -> Self {
        self.max_in_flight = n;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OS Places API client.
///
/// Cheap to clone; clones share the HTTP pool and the request semaphore.
#[derive(Debug, Clone)]
pub struct OsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl OsClient {
    pub fn new(config: OsConfig) -> Result<Self, OsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_in_flight)),
        })
    }

    /// Resolve a postcode to coordinates and an administrative authority.
    ///
    /// Queries all delivery point addresses for the postcode; the first
    /// address supplies the coordinate and the authority name is only set
    /// when every address agrees on its local custodian.
    pub async fn resolve_postcode(
        &self,
        postcode: &Postcode,
    ) -> Result<ResolvedLocation, OsError> {
        let _permit = self.semaphore.acquire().await.map_err(|_| OsError::Api {
            status: 0,
            message: "client is shutting down".to_string(),
        })?;

        let url = format!("{}/search/places/v1/postcode", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("postcode", postcode.as_str()),
                ("key", self.api_key.as_str()),
                ("output_srs", "WGS84"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(OsError::Unauthorized);
        }
        // OS answers 400 for postcodes it has never heard of
        if status.is_client_error() {
            return Err(OsError::PostcodeNotFound {
                postcode: postcode.as_str().to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: OsPostcodeResponse =
            serde_json::from_str(&body).map_err(|e| OsError::Json {
                message: e.to_string(),
            })?;

        convert_postcode_response(&parsed, postcode).map_err(|e| match e {
            ConversionError::NoResults => OsError::PostcodeNotFound {
                postcode: postcode.as_str().to_string(),
            },
        })
    }
}
