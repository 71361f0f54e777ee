//! Strategy execution against the geo-ranked court store.
//!
//! Each strategy is a short cascade of store queries with distance-based
//! fallbacks. Empty results are never errors at this layer: a strategy
//! that finds nothing degrades step by step until it reaches the plain
//! nearest-by-area-of-law query, and an empty final answer flows back to
//! the caller as an empty list.

use tracing::debug;

use crate::domain::{
    AreaOfLawId, CourtWithDistance, LocalAuthorityId, PostcodeLadder, ResolvedLocation,
    SearchAction, ServiceArea, ServiceAreaId,
};

use super::strategy::SearchStrategy;

/// Read-only, geo-ranked query surface over courts and their catchments.
///
/// Every method returns courts ordered ascending by distance from the
/// given point, truncated to `limit` where one is taken. Courts without
/// an open, geocoded, visitable address never appear.
pub trait CourtDistanceStore {
    /// Nearest open courts regardless of area of law. One entry per
    /// visitable address, so a court can appear more than once.
    fn nearest_courts(&self, lat: f64, lon: f64, limit: usize) -> Vec<CourtWithDistance>;

    /// Nearest courts serving the given area of law, one entry per court.
    fn nearest_by_area_of_law(
        &self,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        limit: usize,
    ) -> Vec<CourtWithDistance>;

    /// Civil courts matched by postcode prefix, narrowest non-empty tier
    /// of the ladder wins. The area of law is the one backing the
    /// service area.
    fn civil_by_best_postcode_tier(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        ladder: &PostcodeLadder,
        limit: usize,
    ) -> Vec<CourtWithDistance>;

    /// The regional court covering the authority for this service area,
    /// if one exists. At most one entry.
    fn family_regional_by_local_authority(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        authority: LocalAuthorityId,
    ) -> Vec<CourtWithDistance>;

    /// The regional court for this service area by area of law alone,
    /// if one exists. At most one entry.
    fn family_regional_by_area_of_law(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
    ) -> Vec<CourtWithDistance>;

    /// Courts whose local-authority catchment for the area of law covers
    /// the given authority.
    fn family_non_regional_by_local_authority(
        &self,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        authority: LocalAuthorityId,
        limit: usize,
    ) -> Vec<CourtWithDistance>;

    /// The nearest court registered as a single point of entry for the
    /// named area of law. At most one entry.
    fn nearest_spoe_court(
        &self,
        lat: f64,
        lon: f64,
        area_of_law_name: &str,
    ) -> Vec<CourtWithDistance>;
}

/// Local-authority name resolution.
pub trait LocalAuthorityLookup {
    /// Case-insensitive lookup of an authority id by its full name.
    fn find_id_ignore_case(&self, name: &str) -> Option<LocalAuthorityId>;
}

/// Executes a selected strategy as store queries plus fallbacks.
///
/// Borrows its collaborators, so it is built per request.
pub struct SearchExecutor<'a, S, A>
where
    S: CourtDistanceStore,
    A: LocalAuthorityLookup,
{
    store: &'a S,
    authorities: &'a A,
}

impl<'a, S, A> SearchExecutor<'a, S, A>
where
    S: CourtDistanceStore,
    A: LocalAuthorityLookup,
{
    pub fn new(store: &'a S, authorities: &'a A) -> Self {
        SearchExecutor { store, authorities }
    }

    /// Run the strategy's query cascade. Never fails; exhausted cascades
    /// produce an empty list.
    pub fn execute(
        &self,
        location: &ResolvedLocation,
        service_area: &ServiceArea,
        strategy: SearchStrategy,
        action: SearchAction,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        let lat = location.point.latitude;
        let lon = location.point.longitude;
        let area_of_law = service_area.area_of_law_id;

        match strategy {
            SearchStrategy::DefaultAolDistance => {
                self.store.nearest_by_area_of_law(lat, lon, area_of_law, limit)
            }
            SearchStrategy::CivilPostcodePreference => {
                self.execute_civil(location, service_area, limit)
            }
            SearchStrategy::FamilyRegional => {
                self.execute_family_regional(location, service_area, limit)
            }
            SearchStrategy::FamilyNonRegional => {
                let courts = self.execute_family_non_regional(location, service_area, limit);
                if courts.is_empty() {
                    debug!(
                        %strategy,
                        %action,
                        service_area = %service_area.name,
                        "no courts for authority, falling back to nearest by area of law"
                    );
                    return self.store.nearest_by_area_of_law(lat, lon, area_of_law, limit);
                }
                courts
            }
        }
    }

    /// Postcode-prefix search with a distance fallback when no tier of
    /// the ladder matches any court.
    fn execute_civil(
        &self,
        location: &ResolvedLocation,
        service_area: &ServiceArea,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        let lat = location.point.latitude;
        let lon = location.point.longitude;
        let ladder = PostcodeLadder::decompose(&location.postcode);

        let courts = self
            .store
            .civil_by_best_postcode_tier(service_area.id, lat, lon, &ladder, limit);
        if courts.is_empty() {
            debug!(
                ?ladder,
                service_area = %service_area.name,
                "no postcode tier matched, falling back to nearest by area of law"
            );
            return self
                .store
                .nearest_by_area_of_law(lat, lon, service_area.area_of_law_id, limit);
        }
        courts
    }

    /// Regional cascade: by authority, then by area of law alone, then
    /// plain nearest.
    fn execute_family_regional(
        &self,
        location: &ResolvedLocation,
        service_area: &ServiceArea,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        let lat = location.point.latitude;
        let lon = location.point.longitude;
        let area_of_law = service_area.area_of_law_id;

        if let Some(authority) = self.resolve_authority(&location.authority_name) {
            let courts = self.store.family_regional_by_local_authority(
                service_area.id,
                lat,
                lon,
                area_of_law,
                authority,
            );
            if !courts.is_empty() {
                return courts;
            }
        }

        let courts =
            self.store
                .family_regional_by_area_of_law(service_area.id, lat, lon, area_of_law);
        if courts.is_empty() {
            debug!(
                service_area = %service_area.name,
                "no regional court found, falling back to nearest by area of law"
            );
            return self.store.nearest_by_area_of_law(lat, lon, area_of_law, limit);
        }
        courts
    }

    /// Authority-catchment search. Empty when the authority cannot be
    /// resolved; the caller owns the fallback.
    fn execute_family_non_regional(
        &self,
        location: &ResolvedLocation,
        service_area: &ServiceArea,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        let Some(authority) = self.resolve_authority(&location.authority_name) else {
            debug!(
                authority_name = %location.authority_name,
                "local authority not recognised"
            );
            return Vec::new();
        };

        self.store.family_non_regional_by_local_authority(
            location.point.latitude,
            location.point.longitude,
            service_area.area_of_law_id,
            authority,
            limit,
        )
    }

    /// Exact case-insensitive match first; if that misses and the name
    /// carries a trailing " Council", strip it and retry once.
    fn resolve_authority(&self, name: &str) -> Option<LocalAuthorityId> {
        if let Some(id) = self.authorities.find_id_ignore_case(name) {
            return Some(id);
        }
        let stripped = name.strip_suffix(" Council")?;
        self.authorities.find_id_ignore_case(stripped)
    }
}
