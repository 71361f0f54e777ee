//! Conversion from OS Places DTOs to domain types.
//!
//! The interesting rule lives here: a postcode can straddle two local
//! authorities, in which case the address records disagree on their
//! custodian code. We only report an authority name when every record
//! agrees; otherwise the resolved location carries an empty authority
//! and family routing falls back to distance-based search.

use tracing::debug;

use crate::domain::{GeoPoint, Postcode, ResolvedLocation};

use super::types::{OsDpa, OsPostcodeResponse};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The response carried no usable address records
    #[error("no address results for postcode")]
    NoResults,
}

/// Convert a postcode search response to a resolved location.
///
/// The coordinate is taken from the first address record. The postcode
/// carried on the result is the canonical form of the queried postcode,
/// not whatever spacing the address record uses.
pub fn convert_postcode_response(
    response: &OsPostcodeResponse,
    postcode: &Postcode,
) -> Result<ResolvedLocation, ConversionError> {
    let dpas: Vec<&OsDpa> = response
        .results
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter_map(|r| r.dpa.as_ref())
        .collect();

    let first = dpas.first().ok_or(ConversionError::NoResults)?;

    Ok(ResolvedLocation {
        point: GeoPoint::new(first.lat, first.lng),
        authority_name: agreed_authority_name(&dpas, postcode),
        postcode: postcode.as_str().to_string(),
    })
}

/// The authority name shared by all address records, or empty.
fn agreed_authority_name(dpas: &[&OsDpa], postcode: &Postcode) -> String {
    let codes: Vec<i64> = dpas.iter().filter_map(|d| d.local_custodian_code).collect();

    let Some((&head, rest)) = codes.split_first() else {
        debug!(%postcode, "no custodian codes in address data");
        return String::new();
    };

    if rest.iter().any(|&c| c != head) {
        debug!(%postcode, "custodian codes disagree, leaving authority empty");
        return String::new();
    }

    dpas.iter()
        .find(|d| d.local_custodian_code == Some(head))
        .and_then(|d| d.local_custodian_code_description.clone())
        .unwrap_or_default()
}
