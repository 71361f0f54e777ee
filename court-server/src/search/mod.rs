//! Court search: validation, strategy selection, and execution.
//!
//! A search resolves the postcode to a point and an authority, picks a
//! routing strategy from the service area and action, then runs that
//! strategy's query cascade against the court directory.

mod executor;
mod service;
mod strategy;

pub use executor::{CourtDistanceStore, LocalAuthorityLookup, SearchExecutor};
pub use service::{
    CourtCatchmentLookup, LocationResolver, ResolveError, SearchCourtService, SearchError,
    SearchQuery, ServiceAreaLookup,
};
pub use strategy::{select_strategy, SearchStrategy};
