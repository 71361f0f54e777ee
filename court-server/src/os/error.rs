//! OS Places API error types.

/// Errors from the OS Places HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum OsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check OS_API_KEY")]
    Unauthorized,

    /// The API has no address data for this postcode
    #[error("postcode not found: {postcode}")]
    PostcodeNotFound { postcode: String },

    /// API returned an error status
    #[error("OS API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
