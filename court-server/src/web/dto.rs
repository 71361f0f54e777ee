//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CourtWithDistance;

/// Query parameters for the postcode search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSearchParams {
    /// The postcode to search from
    pub postcode: Option<String>,

    /// Service area name, travels together with `action`
    pub service_area: Option<String>,

    /// NEAREST, DOCUMENTS or UPDATE
    pub action: Option<String>,

    /// Maximum number of results (default 10, max 50)
    pub limit: Option<usize>,
}

/// One court in a search response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResult {
    pub court_id: Uuid,
    pub court_name: String,
    pub court_slug: String,
    /// Distance from the searched postcode in miles
    pub distance: f64,
}

impl CourtResult {
    pub fn from_court(court: &CourtWithDistance) -> Self {
        Self {
            court_id: court.court_id.as_uuid(),
            court_name: court.name.clone(),
            court_slug: court.slug.clone(),
            distance: court.distance_miles,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    /// RFC 3339 UTC timestamp of the failure
    pub timestamp: String,
}
