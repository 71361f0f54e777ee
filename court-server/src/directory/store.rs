//! In-memory court directory.
//!
//! Loads the whole estate from a JSON document at startup and answers
//! every search query by scanning it. The estate is a few hundred courts,
//! so scans are cheap and the directory needs no interior mutability.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::domain::{
    AreaOfLawId, CatchmentMethod, CatchmentType, CourtId, CourtWithDistance, GeoPoint,
    LocalAuthorityId, PostcodeLadder, ServiceArea, ServiceAreaId, ServiceAreaKind, UnknownVariant,
};
use crate::search::{
    CourtCatchmentLookup, CourtDistanceStore, LocalAuthorityLookup, ServiceAreaLookup,
};

use super::distance::distance_miles;
use super::types::DirectoryFile;

/// Failure to load the directory data file.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read court data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed court data: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Variant(#[from] UnknownVariant),
}

/// One geocoded, visitable court address.
#[derive(Debug)]
struct CourtAddress {
    point: GeoPoint,
    /// Uppercased with spaces removed, for prefix matching.
    postcode_compact: Option<String>,
}

#[derive(Debug)]
struct Court {
    id: CourtId,
    name: String,
    slug: String,
    open: bool,
    addresses: Vec<CourtAddress>,
    areas_of_law: HashSet<AreaOfLawId>,
    /// Authorities covered, keyed by the area of law the coverage is for.
    authority_catchments: HashMap<AreaOfLawId, HashSet<LocalAuthorityId>>,
    /// Service areas this court serves regionally.
    regional_service_areas: HashSet<ServiceAreaId>,
    spoe_areas_of_law: HashSet<AreaOfLawId>,
}

impl Court {
    fn with_distance(&self, distance_miles: f64) -> CourtWithDistance {
        CourtWithDistance {
            court_id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            distance_miles,
        }
    }

    fn nearest_address_distance(&self, origin: GeoPoint) -> Option<f64> {
        self.addresses
            .iter()
            .map(|address| distance_miles(origin, address.point))
            .min_by(f64::total_cmp)
    }

    /// Closest address whose compacted postcode starts with the prefix.
    fn nearest_postcode_match(&self, origin: GeoPoint, prefix: &str) -> Option<f64> {
        self.addresses
            .iter()
            .filter(|address| {
                address
                    .postcode_compact
                    .as_deref()
                    .is_some_and(|pc| pc.starts_with(prefix))
            })
            .map(|address| distance_miles(origin, address.point))
            .min_by(f64::total_cmp)
    }

    fn covers_authority(&self, area_of_law: AreaOfLawId, authority: LocalAuthorityId) -> bool {
        self.authority_catchments
            .get(&area_of_law)
            .is_some_and(|authorities| authorities.contains(&authority))
    }
}

/// The court estate plus its reference data, indexed for search.
#[derive(Debug)]
pub struct CourtDirectory {
    courts: Vec<Court>,
    /// Keyed by lowercased name.
    service_areas_by_name: HashMap<String, ServiceArea>,
    service_areas_by_id: HashMap<ServiceAreaId, ServiceArea>,
    /// Keyed by lowercased name.
    authorities_by_name: HashMap<String, LocalAuthorityId>,
    /// Keyed by exact name.
    areas_of_law_by_name: HashMap<String, AreaOfLawId>,
    /// Service areas served regionally by at least one court.
    regional_service_areas: HashSet<ServiceAreaId>,
}

impl CourtDirectory {
    /// Read and index the directory data file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = fs::read_to_string(path)?;
        let file: DirectoryFile = serde_json::from_str(&raw)?;
        Self::from_file(file)
    }

    /// Index an already-deserialized directory document.
    pub fn from_file(file: DirectoryFile) -> Result<Self, DirectoryError> {
        let areas_of_law_by_name: HashMap<String, AreaOfLawId> = file
            .areas_of_law
            .into_iter()
            .map(|record| (record.name, AreaOfLawId::new(record.id)))
            .collect();

        let authorities_by_name: HashMap<String, LocalAuthorityId> = file
            .local_authorities
            .into_iter()
            .map(|record| (record.name.to_lowercase(), LocalAuthorityId::new(record.id)))
            .collect();

        let mut service_areas_by_name = HashMap::new();
        let mut service_areas_by_id = HashMap::new();
        for record in file.service_areas {
            let area = ServiceArea {
                id: ServiceAreaId::new(record.id),
                name: record.name,
                kind: ServiceAreaKind::parse(&record.kind)?,
                catchment_method: CatchmentMethod::parse(&record.catchment_method)?,
                area_of_law_id: AreaOfLawId::new(record.area_of_law_id),
            };
            service_areas_by_name.insert(area.name.to_lowercase(), area.clone());
            service_areas_by_id.insert(area.id, area);
        }

        let mut regional_service_areas = HashSet::new();
        let mut courts = Vec::with_capacity(file.courts.len());
        for record in file.courts {
            let mut authority_catchments: HashMap<AreaOfLawId, HashSet<LocalAuthorityId>> =
                HashMap::new();
            for catchment in record.local_authority_catchments {
                authority_catchments
                    .entry(AreaOfLawId::new(catchment.area_of_law_id))
                    .or_default()
                    .extend(
                        catchment
                            .local_authority_ids
                            .into_iter()
                            .map(LocalAuthorityId::new),
                    );
            }

            let mut court_regional = HashSet::new();
            for catchment in record.service_area_catchments {
                if CatchmentType::parse(&catchment.catchment_type)? == CatchmentType::Regional {
                    let id = ServiceAreaId::new(catchment.service_area_id);
                    court_regional.insert(id);
                    regional_service_areas.insert(id);
                }
            }

            let addresses = record
                .addresses
                .into_iter()
                .filter(|address| is_searchable(&address.address_type))
                .filter_map(|address| {
                    let (Some(lat), Some(lon)) = (address.latitude, address.longitude) else {
                        return None;
                    };
                    Some(CourtAddress {
                        point: GeoPoint::new(lat, lon),
                        postcode_compact: address.postcode.as_deref().map(compact_postcode),
                    })
                })
                .collect();

            courts.push(Court {
                id: CourtId::new(record.id),
                name: record.name,
                slug: record.slug,
                open: record.open,
                addresses,
                areas_of_law: record.areas_of_law.into_iter().map(AreaOfLawId::new).collect(),
                authority_catchments,
                regional_service_areas: court_regional,
                spoe_areas_of_law: record
                    .spoe_areas_of_law
                    .into_iter()
                    .map(AreaOfLawId::new)
                    .collect(),
            });
        }

        Ok(CourtDirectory {
            courts,
            service_areas_by_name,
            service_areas_by_id,
            authorities_by_name,
            areas_of_law_by_name,
            regional_service_areas,
        })
    }

    pub fn court_count(&self) -> usize {
        self.courts.len()
    }

    pub fn service_area_count(&self) -> usize {
        self.service_areas_by_id.len()
    }

    /// Open courts passing `eligible`, each at its closest address,
    /// nearest first.
    fn ranked<F>(&self, origin: GeoPoint, limit: usize, eligible: F) -> Vec<CourtWithDistance>
    where
        F: Fn(&Court) -> bool,
    {
        let mut courts: Vec<CourtWithDistance> = self
            .courts
            .iter()
            .filter(|court| court.open && eligible(court))
            .filter_map(|court| {
                court
                    .nearest_address_distance(origin)
                    .map(|distance| court.with_distance(distance))
            })
            .collect();
        courts.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        courts.truncate(limit);
        courts
    }
}

impl CourtDistanceStore for CourtDirectory {
    fn nearest_courts(&self, lat: f64, lon: f64, limit: usize) -> Vec<CourtWithDistance> {
        let origin = GeoPoint::new(lat, lon);
        // One entry per address: a court with several visitable addresses
        // appears once for each of them.
        let mut courts: Vec<CourtWithDistance> = self
            .courts
            .iter()
            .filter(|court| court.open)
            .flat_map(|court| {
                court.addresses.iter().map(move |address| {
                    court.with_distance(distance_miles(origin, address.point))
                })
            })
            .collect();
        courts.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        courts.truncate(limit);
        courts
    }

    fn nearest_by_area_of_law(
        &self,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        self.ranked(GeoPoint::new(lat, lon), limit, |court| {
            court.areas_of_law.contains(&area_of_law)
        })
    }

    fn civil_by_best_postcode_tier(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        ladder: &PostcodeLadder,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        let Some(area) = self.service_areas_by_id.get(&service_area) else {
            return Vec::new();
        };
        let area_of_law = area.area_of_law_id;
        let origin = GeoPoint::new(lat, lon);

        // Narrowest tier with any match wins outright.
        for tier in [ladder.minus_unit(), ladder.out_code(), ladder.area_code()] {
            let mut courts: Vec<CourtWithDistance> = self
                .courts
                .iter()
                .filter(|court| court.open && court.areas_of_law.contains(&area_of_law))
                .filter_map(|court| {
                    court
                        .nearest_postcode_match(origin, tier)
                        .map(|distance| court.with_distance(distance))
                })
                .collect();
            if courts.is_empty() {
                continue;
            }
            courts.sort_by(|a, b| {
                a.distance_miles
                    .total_cmp(&b.distance_miles)
                    .then_with(|| a.name.cmp(&b.name))
            });
            courts.truncate(limit);
            return courts;
        }
        Vec::new()
    }

    fn family_regional_by_local_authority(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        authority: LocalAuthorityId,
    ) -> Vec<CourtWithDistance> {
        self.ranked(GeoPoint::new(lat, lon), 1, |court| {
            court.regional_service_areas.contains(&service_area)
                && court.covers_authority(area_of_law, authority)
        })
    }

    fn family_regional_by_area_of_law(
        &self,
        service_area: ServiceAreaId,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
    ) -> Vec<CourtWithDistance> {
        self.ranked(GeoPoint::new(lat, lon), 1, |court| {
            court.regional_service_areas.contains(&service_area)
                && court.areas_of_law.contains(&area_of_law)
        })
    }

    fn family_non_regional_by_local_authority(
        &self,
        lat: f64,
        lon: f64,
        area_of_law: AreaOfLawId,
        authority: LocalAuthorityId,
        limit: usize,
    ) -> Vec<CourtWithDistance> {
        self.ranked(GeoPoint::new(lat, lon), limit, |court| {
            court.covers_authority(area_of_law, authority)
        })
    }

    fn nearest_spoe_court(
        &self,
        lat: f64,
        lon: f64,
        area_of_law_name: &str,
    ) -> Vec<CourtWithDistance> {
        let Some(&area_of_law) = self.areas_of_law_by_name.get(area_of_law_name) else {
            return Vec::new();
        };
        self.ranked(GeoPoint::new(lat, lon), 1, |court| {
            court.spoe_areas_of_law.contains(&area_of_law)
        })
    }
}

impl ServiceAreaLookup for CourtDirectory {
    fn service_area_by_name(&self, name: &str) -> Option<ServiceArea> {
        self.service_areas_by_name.get(&name.to_lowercase()).cloned()
    }
}

impl LocalAuthorityLookup for CourtDirectory {
    fn find_id_ignore_case(&self, name: &str) -> Option<LocalAuthorityId> {
        self.authorities_by_name.get(&name.to_lowercase()).copied()
    }
}

impl CourtCatchmentLookup for CourtDirectory {
    fn has_regional_catchment(&self, service_area: ServiceAreaId) -> bool {
        self.regional_service_areas.contains(&service_area)
    }
}

fn is_searchable(address_type: &str) -> bool {
    address_type.eq_ignore_ascii_case("VISIT_US")
        || address_type.eq_ignore_ascii_case("VISIT_OR_CONTACT_US")
}

fn compact_postcode(postcode: &str) -> String {
    postcode.split_whitespace().collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write as _;
    use uuid::Uuid;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    const MONEY_AOL: u128 = 1;
    const CHILDREN_AOL: u128 = 2;
    const DIVORCE_AOL: u128 = 3;
    const WESTMINSTER: u128 = 10;
    const TOWER_HAMLETS: u128 = 11;
    const MONEY_SA: u128 = 20;
    const DIVORCE_SA: u128 = 21;

    /// Buckingham Palace, the origin for every query below.
    const ORIGIN: (f64, f64) = (51.5014, -0.1419);

    fn fixture_json() -> serde_json::Value {
        json!({
            "areas_of_law": [
                {"id": id(MONEY_AOL), "name": "Money claims"},
                {"id": id(CHILDREN_AOL), "name": "Children"},
                {"id": id(DIVORCE_AOL), "name": "Divorce"}
            ],
            "local_authorities": [
                {"id": id(WESTMINSTER), "name": "Westminster"},
                {"id": id(TOWER_HAMLETS), "name": "Tower Hamlets"}
            ],
            "service_areas": [
                {
                    "id": id(MONEY_SA),
                    "name": "Money claims",
                    "type": "CIVIL",
                    "catchment_method": "POSTCODE",
                    "area_of_law_id": id(MONEY_AOL)
                },
                {
                    "id": id(DIVORCE_SA),
                    "name": "Divorce",
                    "type": "FAMILY",
                    "catchment_method": "LOCAL_AUTHORITY",
                    "area_of_law_id": id(DIVORCE_AOL)
                }
            ],
            "courts": [
                {
                    "id": id(100),
                    "name": "Westminster County Court",
                    "slug": "westminster-county-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "SW1P 4LL",
                        "latitude": 51.4973,
                        "longitude": -0.1372
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                },
                {
                    "id": id(101),
                    "name": "Central London County Court",
                    "slug": "central-london-county-court",
                    "open": true,
                    "addresses": [
                        {
                            "address_type": "VISIT_OR_CONTACT_US",
                            "postcode": "WC1V 6NP",
                            "latitude": 51.5172,
                            "longitude": -0.1182
                        },
                        {
                            "address_type": "VISIT_US",
                            "postcode": "WC2A 2LL",
                            "latitude": 51.5035,
                            "longitude": -0.1098
                        }
                    ],
                    "areas_of_law": [id(MONEY_AOL)]
                },
                {
                    "id": id(102),
                    "name": "Wandsworth County Court",
                    "slug": "wandsworth-county-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "SW18 4DJ",
                        "latitude": 51.4570,
                        "longitude": -0.1924
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                },
                {
                    "id": id(103),
                    "name": "Central Family Court",
                    "slug": "central-family-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_OR_CONTACT_US",
                        "postcode": "WC1V 6NP",
                        "latitude": 51.5179,
                        "longitude": -0.1120
                    }],
                    "areas_of_law": [id(CHILDREN_AOL), id(DIVORCE_AOL)],
                    "spoe_areas_of_law": [id(CHILDREN_AOL)]
                },
                {
                    "id": id(104),
                    "name": "West London Family Court",
                    "slug": "west-london-family-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "TW14 0LR",
                        "latitude": 51.4855,
                        "longitude": -0.3492
                    }],
                    "areas_of_law": [id(DIVORCE_AOL)],
                    "local_authority_catchments": [{
                        "area_of_law_id": id(DIVORCE_AOL),
                        "local_authority_ids": [id(WESTMINSTER)]
                    }],
                    "service_area_catchments": [{
                        "service_area_id": id(DIVORCE_SA),
                        "catchment_type": "REGIONAL"
                    }]
                },
                {
                    "id": id(105),
                    "name": "East London Family Court",
                    "slug": "east-london-family-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "E14 9SE",
                        "latitude": 51.5273,
                        "longitude": -0.0140
                    }],
                    "areas_of_law": [id(DIVORCE_AOL)],
                    "local_authority_catchments": [{
                        "area_of_law_id": id(DIVORCE_AOL),
                        "local_authority_ids": [id(TOWER_HAMLETS)]
                    }],
                    "service_area_catchments": [{
                        "service_area_id": id(DIVORCE_SA),
                        "catchment_type": "LOCAL"
                    }]
                },
                {
                    "id": id(106),
                    "name": "Lambeth County Court",
                    "slug": "lambeth-county-court",
                    "open": false,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "SE1 7AB",
                        "latitude": 51.5010,
                        "longitude": -0.1400
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                },
                {
                    "id": id(107),
                    "name": "Postal Money Claims Centre",
                    "slug": "postal-money-claims-centre",
                    "open": true,
                    "addresses": [{
                        "address_type": "CONTACT_US",
                        "postcode": "SW1H 9AJ",
                        "latitude": 51.4994,
                        "longitude": -0.1340
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                }
            ]
        })
    }

    fn directory() -> CourtDirectory {
        let file: DirectoryFile = serde_json::from_value(fixture_json()).unwrap();
        CourtDirectory::from_file(file).unwrap()
    }

    fn names(courts: &[CourtWithDistance]) -> Vec<&str> {
        courts.iter().map(|c| c.name.as_str()).collect()
    }

    fn money_aol() -> AreaOfLawId {
        AreaOfLawId::new(id(MONEY_AOL))
    }

    fn divorce_aol() -> AreaOfLawId {
        AreaOfLawId::new(id(DIVORCE_AOL))
    }

    fn divorce_sa() -> ServiceAreaId {
        ServiceAreaId::new(id(DIVORCE_SA))
    }

    fn westminster() -> LocalAuthorityId {
        LocalAuthorityId::new(id(WESTMINSTER))
    }

    #[test]
    fn load_reads_the_data_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(fixture_json().to_string().as_bytes()).unwrap();

        let directory = CourtDirectory::load(file.path()).unwrap();

        assert_eq!(directory.court_count(), 8);
        assert_eq!(directory.service_area_count(), 2);
    }

    #[test]
    fn load_reports_missing_files() {
        let err = CourtDirectory::load("/nonexistent/courts.json").unwrap_err();
        assert!(matches!(err, DirectoryError::Io(_)));
    }

    #[test]
    fn unknown_reference_strings_are_rejected() {
        let mut doc = fixture_json();
        doc["service_areas"][0]["type"] = json!("CRIMINAL");
        let file: DirectoryFile = serde_json::from_value(doc).unwrap();

        let err = CourtDirectory::from_file(file).unwrap_err();

        assert_eq!(err.to_string(), "unknown service area kind: CRIMINAL");
    }

    #[test]
    fn nearest_courts_lists_every_address_nearest_first() {
        let directory = directory();

        let courts = directory.nearest_courts(ORIGIN.0, ORIGIN.1, 10);

        // Central London County Court has two visitable addresses and
        // appears once per address.
        assert_eq!(
            names(&courts),
            vec![
                "Westminster County Court",
                "Central London County Court",
                "Central London County Court",
                "Central Family Court",
                "Wandsworth County Court",
                "East London Family Court",
                "West London Family Court",
            ]
        );
        assert!(courts.windows(2).all(|w| w[0].distance_miles <= w[1].distance_miles));
    }

    #[test]
    fn nearest_courts_excludes_closed_and_postal_only_courts() {
        let directory = directory();

        let courts = directory.nearest_courts(ORIGIN.0, ORIGIN.1, 10);

        assert!(!names(&courts).contains(&"Lambeth County Court"));
        assert!(!names(&courts).contains(&"Postal Money Claims Centre"));
    }

    #[test]
    fn addresses_without_coordinates_are_never_searched() {
        let doc = json!({
            "areas_of_law": [{"id": id(MONEY_AOL), "name": "Money claims"}],
            "local_authorities": [],
            "service_areas": [],
            "courts": [{
                "id": id(300),
                "name": "Ungeocoded County Court",
                "slug": "ungeocoded-county-court",
                "open": true,
                "addresses": [{
                    "address_type": "VISIT_US",
                    "postcode": "SW1A 2AA"
                }],
                "areas_of_law": [id(MONEY_AOL)]
            }]
        });
        let file: DirectoryFile = serde_json::from_value(doc).unwrap();
        let directory = CourtDirectory::from_file(file).unwrap();

        assert!(directory.nearest_courts(ORIGIN.0, ORIGIN.1, 10).is_empty());
        assert!(directory
            .nearest_by_area_of_law(ORIGIN.0, ORIGIN.1, money_aol(), 10)
            .is_empty());
    }

    #[test]
    fn nearest_courts_respects_the_limit() {
        let directory = directory();

        let courts = directory.nearest_courts(ORIGIN.0, ORIGIN.1, 2);

        assert_eq!(courts.len(), 2);
    }

    #[test]
    fn nearest_by_area_of_law_keeps_one_entry_per_court() {
        let directory = directory();

        let courts = directory.nearest_by_area_of_law(ORIGIN.0, ORIGIN.1, money_aol(), 10);

        assert_eq!(
            names(&courts),
            vec![
                "Westminster County Court",
                "Central London County Court",
                "Wandsworth County Court",
            ]
        );
        // The deduplicated entry carries the closer of the two addresses.
        assert!(courts[1].distance_miles < 1.5, "got {}", courts[1].distance_miles);
    }

    #[test]
    fn nearest_by_area_of_law_only_returns_courts_serving_it() {
        let directory = directory();

        let courts = directory.nearest_by_area_of_law(ORIGIN.0, ORIGIN.1, divorce_aol(), 10);

        assert_eq!(
            names(&courts),
            vec![
                "Central Family Court",
                "East London Family Court",
                "West London Family Court",
            ]
        );
    }

    #[test]
    fn civil_search_prefers_the_narrowest_postcode_tier() {
        let directory = directory();
        let ladder = PostcodeLadder::decompose("SW18 4DJ");

        let courts = directory.civil_by_best_postcode_tier(
            ServiceAreaId::new(id(MONEY_SA)),
            ORIGIN.0,
            ORIGIN.1,
            &ladder,
            10,
        );

        // Westminster County Court is nearer but only matches the broad
        // "SW" tier; the minus-unit tier match wins.
        assert_eq!(names(&courts), vec!["Wandsworth County Court"]);
    }

    #[test]
    fn civil_search_widens_to_the_area_tier_when_needed() {
        let directory = directory();
        let ladder = PostcodeLadder::decompose("SW1A 1AA");

        let courts = directory.civil_by_best_postcode_tier(
            ServiceAreaId::new(id(MONEY_SA)),
            ORIGIN.0,
            ORIGIN.1,
            &ladder,
            10,
        );

        assert_eq!(
            names(&courts),
            vec!["Westminster County Court", "Wandsworth County Court"]
        );
    }

    #[test]
    fn civil_search_with_no_matching_tier_is_empty() {
        let directory = directory();
        let ladder = PostcodeLadder::decompose("M1 4AA");

        let courts = directory.civil_by_best_postcode_tier(
            ServiceAreaId::new(id(MONEY_SA)),
            ORIGIN.0,
            ORIGIN.1,
            &ladder,
            10,
        );

        assert!(courts.is_empty());
    }

    #[test]
    fn civil_search_breaks_distance_ties_by_name() {
        let doc = json!({
            "areas_of_law": [{"id": id(MONEY_AOL), "name": "Money claims"}],
            "local_authorities": [],
            "service_areas": [{
                "id": id(MONEY_SA),
                "name": "Money claims",
                "type": "CIVIL",
                "catchment_method": "POSTCODE",
                "area_of_law_id": id(MONEY_AOL)
            }],
            "courts": [
                {
                    "id": id(200),
                    "name": "Birch Combined Court",
                    "slug": "birch-combined-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "LS1 2AB",
                        "latitude": 53.8008,
                        "longitude": -1.5491
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                },
                {
                    "id": id(201),
                    "name": "Alder Combined Court",
                    "slug": "alder-combined-court",
                    "open": true,
                    "addresses": [{
                        "address_type": "VISIT_US",
                        "postcode": "LS1 2AB",
                        "latitude": 53.8008,
                        "longitude": -1.5491
                    }],
                    "areas_of_law": [id(MONEY_AOL)]
                }
            ]
        });
        let file: DirectoryFile = serde_json::from_value(doc).unwrap();
        let directory = CourtDirectory::from_file(file).unwrap();
        let ladder = PostcodeLadder::decompose("LS1 2AB");

        let courts = directory.civil_by_best_postcode_tier(
            ServiceAreaId::new(id(MONEY_SA)),
            53.7997,
            -1.5492,
            &ladder,
            10,
        );

        assert_eq!(
            names(&courts),
            vec!["Alder Combined Court", "Birch Combined Court"]
        );
    }

    #[test]
    fn regional_family_court_found_by_authority() {
        let directory = directory();

        let courts = directory.family_regional_by_local_authority(
            divorce_sa(),
            ORIGIN.0,
            ORIGIN.1,
            divorce_aol(),
            westminster(),
        );

        assert_eq!(names(&courts), vec!["West London Family Court"]);
    }

    #[test]
    fn local_catchment_does_not_satisfy_the_regional_query() {
        let directory = directory();

        // East London Family Court covers Tower Hamlets but serves the
        // divorce service area with a LOCAL catchment.
        let courts = directory.family_regional_by_local_authority(
            divorce_sa(),
            ORIGIN.0,
            ORIGIN.1,
            divorce_aol(),
            LocalAuthorityId::new(id(TOWER_HAMLETS)),
        );

        assert!(courts.is_empty());
    }

    #[test]
    fn regional_family_court_found_by_area_of_law_alone() {
        let directory = directory();

        let courts = directory.family_regional_by_area_of_law(
            divorce_sa(),
            ORIGIN.0,
            ORIGIN.1,
            divorce_aol(),
        );

        assert_eq!(names(&courts), vec!["West London Family Court"]);
    }

    #[test]
    fn non_regional_family_search_matches_the_authority_catchment() {
        let directory = directory();

        let courts = directory.family_non_regional_by_local_authority(
            ORIGIN.0,
            ORIGIN.1,
            divorce_aol(),
            LocalAuthorityId::new(id(TOWER_HAMLETS)),
            10,
        );

        assert_eq!(names(&courts), vec!["East London Family Court"]);
    }

    #[test]
    fn authority_catchments_are_keyed_by_area_of_law() {
        let directory = directory();

        let courts = directory.family_non_regional_by_local_authority(
            ORIGIN.0,
            ORIGIN.1,
            AreaOfLawId::new(id(CHILDREN_AOL)),
            LocalAuthorityId::new(id(TOWER_HAMLETS)),
            10,
        );

        assert!(courts.is_empty());
    }

    #[test]
    fn spoe_lookup_matches_the_area_of_law_by_name() {
        let directory = directory();

        let courts = directory.nearest_spoe_court(ORIGIN.0, ORIGIN.1, "Children");

        assert_eq!(names(&courts), vec!["Central Family Court"]);
    }

    #[test]
    fn spoe_lookup_with_unknown_name_is_empty() {
        let directory = directory();

        let courts = directory.nearest_spoe_court(ORIGIN.0, ORIGIN.1, "Immigration");

        assert!(courts.is_empty());
    }

    #[test]
    fn service_area_lookup_is_case_insensitive() {
        let directory = directory();

        assert_eq!(
            directory.service_area_by_name("DIVORCE").map(|sa| sa.name),
            Some("Divorce".to_string())
        );
        assert!(directory.service_area_by_name("Probate").is_none());
    }

    #[test]
    fn authority_lookup_is_case_insensitive() {
        let directory = directory();

        assert_eq!(directory.find_id_ignore_case("WESTMINSTER"), Some(westminster()));
        assert!(directory.find_id_ignore_case("Gotham").is_none());
    }

    #[test]
    fn regional_catchment_flag_reflects_the_estate() {
        let directory = directory();

        assert!(directory.has_regional_catchment(divorce_sa()));
        assert!(!directory.has_regional_catchment(ServiceAreaId::new(id(MONEY_SA))));
    }
}
