//! Search strategy selection.
//!
//! Maps the query context (action, service-area jurisdiction, catchment
//! facts) to a named routing strategy. Selection is pure: the one lookup
//! it can need, whether the service area has any regional catchment, is
//! passed in as a lazily-evaluated closure so it only runs on the single
//! branch that uses it.

use std::fmt;

use tracing::debug;

use crate::domain::{CatchmentMethod, SearchAction, ServiceArea, ServiceAreaKind};

/// The routing strategy a search executes under.
///
/// Computed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Nearest courts serving the area of law, by plain distance.
    DefaultAolDistance,
    /// Civil routing: courts whose address shares a postcode prefix with
    /// the searcher, narrowest matching tier wins.
    CivilPostcodePreference,
    /// Family routing to a single regional court for the authority.
    FamilyRegional,
    /// Family routing by local-authority boundary.
    FamilyNonRegional,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DefaultAolDistance => "DEFAULT_AOL_DISTANCE",
            Self::CivilPostcodePreference => "CIVIL_POSTCODE_PREFERENCE",
            Self::FamilyRegional => "FAMILY_REGIONAL",
            Self::FamilyNonRegional => "FAMILY_NON_REGIONAL",
        })
    }
}

/// Select the routing strategy for a search.
///
/// `authority_name` is the administrative authority the postcode resolved
/// to, possibly empty. `has_regional_catchment` is only invoked on the
/// family local-authority branch.
pub fn select_strategy(
    action: SearchAction,
    authority_name: &str,
    service_area: &ServiceArea,
    has_regional_catchment: impl FnOnce() -> bool,
) -> SearchStrategy {
    if action == SearchAction::Nearest {
        // DOCUMENTS and UPDATE don't affect routing rules here,
        // they are only used for downstream sorting
        return SearchStrategy::DefaultAolDistance;
    }

    match service_area.kind {
        ServiceAreaKind::Civil => SearchStrategy::CivilPostcodePreference,
        ServiceAreaKind::Family => {
            family_strategy(action, authority_name, service_area, has_regional_catchment)
        }
        ServiceAreaKind::Other => SearchStrategy::DefaultAolDistance,
    }
}

/// Regional or non-regional family routing.
fn family_strategy(
    action: SearchAction,
    authority_name: &str,
    service_area: &ServiceArea,
    has_regional_catchment: impl FnOnce() -> bool,
) -> SearchStrategy {
    if service_area.catchment_method == CatchmentMethod::LocalAuthority
        && !authority_name.is_empty()
    {
        return if has_regional_catchment() {
            SearchStrategy::FamilyRegional
        } else {
            SearchStrategy::FamilyNonRegional
        };
    }

    debug!(
        %action,
        service_area = %service_area.name,
        authority_name,
        "family search defaulting to non-regional"
    );
    SearchStrategy::FamilyNonRegional
}
