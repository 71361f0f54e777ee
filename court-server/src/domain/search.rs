//! Search request and result types.

use std::fmt;

use super::CourtId;

/// Error returned when parsing an invalid search action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search action: {value}")]
pub struct InvalidSearchAction {
    value: String,
}

/// What the citizen wants to do at the court.
///
/// Only `Nearest` changes routing: it forces plain distance ranking and
/// skips jurisdiction rules. `Documents` and `Update` are carried through
/// for downstream use but do not affect which courts match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Nearest,
    Documents,
    Update,
}

impl SearchAction {
    /// Parse an action from its request-parameter form.
    ///
    /// Leading and trailing whitespace is ignored and matching is
    /// case-insensitive, so "nearest" and " NEAREST " both parse.
    pub fn parse(s: &str) -> Result<Self, InvalidSearchAction> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("nearest") {
            Ok(Self::Nearest)
        } else if trimmed.eq_ignore_ascii_case("documents") {
            Ok(Self::Documents)
        } else if trimmed.eq_ignore_ascii_case("update") {
            Ok(Self::Update)
        } else {
            Err(InvalidSearchAction {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for SearchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nearest => "NEAREST",
            Self::Documents => "DOCUMENTS",
            Self::Update => "UPDATE",
        })
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A postcode resolved to a point on the map plus the administrative
/// authority it falls in.
///
/// `authority_name` is empty when the address data could not settle on a
/// single authority for the postcode; family routing then degrades to its
/// non-regional fallback rather than failing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub authority_name: String,
    pub postcode: String,
}

/// A court matched by a search, with its distance from the searched point.
///
/// Lists of these are always ordered ascending by distance. Distance is in
/// statute miles, matching the units citizens see.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtWithDistance {
    pub court_id: CourtId,
    pub name: String,
    pub slug: String,
    pub distance_miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_actions() {
        assert_eq!(SearchAction::parse("NEAREST"), Ok(SearchAction::Nearest));
        assert_eq!(
            SearchAction::parse("DOCUMENTS"),
            Ok(SearchAction::Documents)
        );
        assert_eq!(SearchAction::parse("UPDATE"), Ok(SearchAction::Update));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(SearchAction::parse("nearest"), Ok(SearchAction::Nearest));
        assert_eq!(SearchAction::parse(" Update "), Ok(SearchAction::Update));
        assert_eq!(
            SearchAction::parse("documents\n"),
            Ok(SearchAction::Documents)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(SearchAction::parse("").is_err());
        assert!(SearchAction::parse("NEAR").is_err());
        assert!(SearchAction::parse("DELETE").is_err());
    }

    #[test]
    fn display_form() {
        assert_eq!(SearchAction::Nearest.to_string(), "NEAREST");
        assert_eq!(SearchAction::Documents.to_string(), "DOCUMENTS");
    }
}
