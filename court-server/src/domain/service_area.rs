//! Service areas: the legal need a citizen is searching on behalf of.

use std::fmt;

use super::{AreaOfLawId, ServiceAreaId};

/// Error returned when parsing an unknown reference-data enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Broad jurisdiction class of a service area.
///
/// Drives which routing rules apply: civil routing prefers courts whose
/// address shares a postcode prefix with the searcher, family routing is
/// driven by local-authority boundaries, and everything else is plain
/// distance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAreaKind {
    Civil,
    Family,
    Other,
}

impl ServiceAreaKind {
    /// Parse from the reference-data string form ("CIVIL", "FAMILY", "OTHER").
    pub fn parse(s: &str) -> Result<Self, UnknownVariant> {
        if s.eq_ignore_ascii_case("civil") {
            Ok(Self::Civil)
        } else if s.eq_ignore_ascii_case("family") {
            Ok(Self::Family)
        } else if s.eq_ignore_ascii_case("other") {
            Ok(Self::Other)
        } else {
            Err(UnknownVariant::new("service area kind", s))
        }
    }
}

impl fmt::Display for ServiceAreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Civil => "CIVIL",
            Self::Family => "FAMILY",
            Self::Other => "OTHER",
        })
    }
}

/// How courts are assigned to a service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchmentMethod {
    /// Assignment by postcode proximity.
    Postcode,
    /// Assignment by administrative local-authority boundary.
    LocalAuthority,
}

impl CatchmentMethod {
    /// Parse from the reference-data string form.
    pub fn parse(s: &str) -> Result<Self, UnknownVariant> {
        if s.eq_ignore_ascii_case("postcode") {
            Ok(Self::Postcode)
        } else if s.eq_ignore_ascii_case("local_authority") {
            Ok(Self::LocalAuthority)
        } else {
            Err(UnknownVariant::new("catchment method", s))
        }
    }
}

impl fmt::Display for CatchmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Postcode => "POSTCODE",
            Self::LocalAuthority => "LOCAL_AUTHORITY",
        })
    }
}

/// Geographic scope of a court's assignment to a service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchmentType {
    /// A single local-authority boundary.
    Local,
    /// A broader multi-authority region.
    Regional,
    /// The whole jurisdiction.
    National,
}

impl CatchmentType {
    /// Parse from the reference-data string form.
    pub fn parse(s: &str) -> Result<Self, UnknownVariant> {
        if s.eq_ignore_ascii_case("local") {
            Ok(Self::Local)
        } else if s.eq_ignore_ascii_case("regional") {
            Ok(Self::Regional)
        } else if s.eq_ignore_ascii_case("national") {
            Ok(Self::National)
        } else {
            Err(UnknownVariant::new("catchment type", s))
        }
    }
}

impl fmt::Display for CatchmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "LOCAL",
            Self::Regional => "REGIONAL",
            Self::National => "NATIONAL",
        })
    }
}

/// A service area: a citizen-facing legal need (e.g. "Money claims",
/// "Divorce") mapped to exactly one area of law.
///
/// Immutable reference data; loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceArea {
    pub id: ServiceAreaId,
    pub name: String,
    pub kind: ServiceAreaKind,
    pub catchment_method: CatchmentMethod,
    pub area_of_law_id: AreaOfLawId,
}
