//! OS Places (Ordnance Survey) geocoding client.
//!
//! This module resolves a UK postcode to WGS84 coordinates and the local
//! authority it falls in, using the OS Places postcode-search API.
//!
//! Key characteristics of the API:
//! - Authentication is a `key` query parameter, not a header
//! - An unknown postcode comes back as a 400 or an empty `results` array
//! - A postcode can straddle local authorities; address records then
//!   disagree on `LOCAL_CUSTODIAN_CODE` and no single authority is reported

mod client;
mod convert;
mod error;
mod types;

pub use client::{OsClient, OsConfig};
pub use convert::{ConversionError, convert_postcode_response};
pub use error::OsError;
pub use types::{OsDpa, OsPostcodeResponse, OsResult};
