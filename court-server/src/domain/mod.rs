//! Domain types for the court finder.
//!
//! This module contains the core domain model types that represent
//! validated search input and reference data. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod ids;
mod postcode;
mod search;
mod service_area;

pub use ids::{AreaOfLawId, CourtId, LocalAuthorityId, ServiceAreaId};
pub use postcode::{InvalidPostcode, Postcode, PostcodeLadder};
pub use search::{
    CourtWithDistance, GeoPoint, InvalidSearchAction, ResolvedLocation, SearchAction,
};
pub use service_area::{
    CatchmentMethod, CatchmentType, ServiceArea, ServiceAreaKind, UnknownVariant,
};
