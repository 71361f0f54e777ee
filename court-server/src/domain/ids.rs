//! Identifier newtypes for courts and reference data.
//!
//! Reference data is keyed by UUID. Wrapping the raw `Uuid` per entity kind
//! keeps the store's query signatures honest: a service-area id cannot be
//! passed where an area-of-law id is expected.

use std::fmt;

use uuid::Uuid;

/// Identifier of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourtId(Uuid);

impl CourtId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CourtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an area of law (e.g. "Children", "Money claims").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaOfLawId(Uuid);

impl AreaOfLawId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AreaOfLawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceAreaId(Uuid);

impl ServiceAreaId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ServiceAreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a local authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalAuthorityId(Uuid);

impl LocalAuthorityId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LocalAuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
