//! Court search composition: parameter validation, postcode resolution,
//! and strategy dispatch.

use std::future::Future;

use tracing::debug;

use crate::domain::{
    CourtWithDistance, Postcode, ResolvedLocation, SearchAction, ServiceArea, ServiceAreaId,
};

use super::executor::{CourtDistanceStore, LocalAuthorityLookup, SearchExecutor};
use super::strategy::select_strategy;

/// The one service area routed to a national single point of entry
/// rather than through strategy selection.
const CHILDCARE_SERVICE_AREA: &str = "Childcare arrangements if you separate from your partner";

/// Area of law the childcare single points of entry are registered under.
const CHILDCARE_AREA_OF_LAW: &str = "Children";

/// Failure from the postcode geocoding collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// Well-formed postcode with no address data behind it.
    #[error("no address data for postcode")]
    NotFound,
    /// The collaborator itself failed: network, auth, bad payload.
    #[error("location service unavailable: {message}")]
    Unavailable { message: String },
}

/// Resolves a postcode to coordinates and an administrative authority.
pub trait LocationResolver {
    fn resolve(
        &self,
        postcode: &Postcode,
    ) -> impl Future<Output = Result<ResolvedLocation, ResolveError>> + Send;
}

/// Service-area catalogue access.
pub trait ServiceAreaLookup {
    /// Case-insensitive lookup by service-area name.
    fn service_area_by_name(&self, name: &str) -> Option<ServiceArea>;
}

/// Catchment facts about the court estate.
pub trait CourtCatchmentLookup {
    /// Whether any court serves this service area through a regional
    /// catchment.
    fn has_regional_catchment(&self, service_area: ServiceAreaId) -> bool;
}

/// Why a search request could not be answered.
///
/// An empty court list is not an error; these cover requests that are
/// malformed or that fail before any court query runs.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Both 'serviceArea' and 'action' must be provided together if one is present.")]
    InvalidParameterCombination,
    #[error("Service area {0} not found")]
    ServiceAreaNotFound(String),
    #[error("Invalid postcode: {0}")]
    PostcodeNotFound(String),
    #[error("location lookup failed: {0}")]
    ResolverUnavailable(String),
}

/// A validated court search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub postcode: Postcode,
    pub service_area_name: Option<String>,
    pub action: Option<SearchAction>,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(
        postcode: Postcode,
        service_area_name: Option<String>,
        action: Option<SearchAction>,
        limit: usize,
    ) -> Self {
        SearchQuery {
            postcode,
            service_area_name,
            action,
            limit,
        }
    }
}

/// Finds the courts serving a postcode.
///
/// Borrows its collaborators and is built per request: a geocoding
/// resolver plus a directory that answers every court-estate question.
pub struct SearchCourtService<'a, R, D>
where
    R: LocationResolver,
    D: CourtDistanceStore + LocalAuthorityLookup + ServiceAreaLookup + CourtCatchmentLookup,
{
    resolver: &'a R,
    directory: &'a D,
}

impl<'a, R, D> SearchCourtService<'a, R, D>
where
    R: LocationResolver,
    D: CourtDistanceStore + LocalAuthorityLookup + ServiceAreaLookup + CourtCatchmentLookup,
{
    pub fn new(resolver: &'a R, directory: &'a D) -> Self {
        SearchCourtService {
            resolver,
            directory,
        }
    }

    /// Run a search. `serviceArea` and `action` travel together: exactly
    /// one of them present is rejected before anything is looked up.
    /// With neither, the search degrades to plain nearest courts.
    pub async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<CourtWithDistance>, SearchError> {
        let area_name = query
            .service_area_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        match (area_name, query.action) {
            (None, None) => self.search_nearest(&query.postcode, query.limit).await,
            (Some(name), Some(action)) => {
                self.search_service_area(&query.postcode, name, action, query.limit)
                    .await
            }
            _ => Err(SearchError::InvalidParameterCombination),
        }
    }

    async fn search_nearest(
        &self,
        postcode: &Postcode,
        limit: usize,
    ) -> Result<Vec<CourtWithDistance>, SearchError> {
        let location = self.resolve(postcode).await?;
        Ok(self
            .directory
            .nearest_courts(location.point.latitude, location.point.longitude, limit))
    }

    async fn search_service_area(
        &self,
        postcode: &Postcode,
        area_name: &str,
        action: SearchAction,
        limit: usize,
    ) -> Result<Vec<CourtWithDistance>, SearchError> {
        let location = self.resolve(postcode).await?;
        let service_area = self
            .directory
            .service_area_by_name(area_name)
            .ok_or_else(|| SearchError::ServiceAreaNotFound(area_name.to_string()))?;

        if area_name.eq_ignore_ascii_case(CHILDCARE_SERVICE_AREA) {
            debug!(postcode = %location.postcode, "routing to childcare single point of entry");
            return Ok(self.directory.nearest_spoe_court(
                location.point.latitude,
                location.point.longitude,
                CHILDCARE_AREA_OF_LAW,
            ));
        }

        let strategy = select_strategy(action, &location.authority_name, &service_area, || {
            self.directory.has_regional_catchment(service_area.id)
        });
        debug!(
            %strategy,
            %action,
            service_area = %service_area.name,
            postcode = %location.postcode,
            "executing search"
        );

        let executor = SearchExecutor::new(self.directory, self.directory);
        Ok(executor.execute(&location, &service_area, strategy, action, limit))
    }

    async fn resolve(&self, postcode: &Postcode) -> Result<ResolvedLocation, SearchError> {
        self.resolver.resolve(postcode).await.map_err(|e| match e {
            ResolveError::NotFound => SearchError::PostcodeNotFound(postcode.as_str().to_string()),
            ResolveError::Unavailable { message } => SearchError::ResolverUnavailable(message),
        })
    }
}
