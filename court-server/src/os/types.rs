//! OS Places API response DTOs.
//!
//! These types map directly to the OS Places postcode-search JSON. Field
//! names on the wire are upper snake case (`"LAT"`, `"LOCAL_CUSTODIAN_CODE"`).
//! `Option` is used where the API omits fields for some address records.

use serde::Deserialize;

/// Response from the postcode search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OsPostcodeResponse {
    /// Matched addresses. Absent (not empty) when the postcode is unknown.
    pub results: Option<Vec<OsResult>>,
}

/// A single result entry wrapping a delivery point address.
#[derive(Debug, Clone, Deserialize)]
pub struct OsResult {
    /// Delivery Point Address record. Other record types (LPI) are not
    /// requested, but the field stays optional so they never fail parsing.
    #[serde(rename = "DPA")]
    pub dpa: Option<OsDpa>,
}

/// A Delivery Point Address record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OsDpa {
    /// Unique Property Reference Number.
    pub uprn: Option<String>,

    /// Full single-line address.
    pub address: Option<String>,

    /// Postal town.
    pub post_town: Option<String>,

    /// Postcode of this address.
    pub postcode: Option<String>,

    /// WGS84 latitude.
    pub lat: f64,

    /// WGS84 longitude.
    pub lng: f64,

    /// Code of the local authority holding this address record.
    pub local_custodian_code: Option<i64>,

    /// Name of that local authority.
    pub local_custodian_code_description: Option<String>,
}
