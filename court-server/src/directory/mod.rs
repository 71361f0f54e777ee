//! The court estate: reference data, addresses, catchments, and the
//! distance-ranked queries the search strategies run on.

mod distance;
mod store;
mod types;

pub use distance::distance_miles;
pub use store::{CourtDirectory, DirectoryError};
pub use types::{
    AddressRecord, AreaOfLawRecord, CourtRecord, DirectoryFile, LocalAuthorityCatchmentRecord,
    LocalAuthorityRecord, ServiceAreaCatchmentRecord, ServiceAreaRecord,
};
