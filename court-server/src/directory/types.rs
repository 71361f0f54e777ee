//! Wire format of the court directory data file.
//!
//! The file is a single JSON document: reference lists for areas of law,
//! local authorities, and service areas, then the court estate with
//! addresses and catchment relations keyed by the reference ids.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct DirectoryFile {
    pub areas_of_law: Vec<AreaOfLawRecord>,
    pub local_authorities: Vec<LocalAuthorityRecord>,
    pub service_areas: Vec<ServiceAreaRecord>,
    pub courts: Vec<CourtRecord>,
}

#[derive(Debug, Deserialize)]
pub struct AreaOfLawRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LocalAuthorityRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceAreaRecord {
    pub id: Uuid,
    pub name: String,
    /// Jurisdiction: CIVIL, FAMILY or OTHER.
    #[serde(rename = "type")]
    pub kind: String,
    /// POSTCODE or LOCAL_AUTHORITY.
    pub catchment_method: String,
    pub area_of_law_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CourtRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub open: bool,
    #[serde(default)]
    pub addresses: Vec<AddressRecord>,
    /// Areas of law this court serves.
    #[serde(default)]
    pub areas_of_law: Vec<Uuid>,
    #[serde(default)]
    pub local_authority_catchments: Vec<LocalAuthorityCatchmentRecord>,
    #[serde(default)]
    pub service_area_catchments: Vec<ServiceAreaCatchmentRecord>,
    /// Areas of law this court is a single point of entry for.
    #[serde(default)]
    pub spoe_areas_of_law: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AddressRecord {
    /// VISIT_US, VISIT_OR_CONTACT_US or CONTACT_US. Only the first two
    /// take part in searches.
    pub address_type: String,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Local authorities a court covers for one area of law.
#[derive(Debug, Deserialize)]
pub struct LocalAuthorityCatchmentRecord {
    pub area_of_law_id: Uuid,
    pub local_authority_ids: Vec<Uuid>,
}

/// How a court serves one service area.
#[derive(Debug, Deserialize)]
pub struct ServiceAreaCatchmentRecord {
    pub service_area_id: Uuid,
    /// LOCAL, REGIONAL or NATIONAL.
    pub catchment_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "areas_of_law": [
            {"id": "11111111-1111-1111-1111-111111111111", "name": "Money claims"}
        ],
        "local_authorities": [
            {"id": "22222222-2222-2222-2222-222222222222", "name": "Westminster"}
        ],
        "service_areas": [
            {
                "id": "33333333-3333-3333-3333-333333333333",
                "name": "Money claims",
                "type": "CIVIL",
                "catchment_method": "POSTCODE",
                "area_of_law_id": "11111111-1111-1111-1111-111111111111"
            }
        ],
        "courts": [
            {
                "id": "44444444-4444-4444-4444-444444444444",
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
                    {"address_type": "CONTACT_US", "postcode": "WC1A 1AA"}
                ],
                "areas_of_law": ["11111111-1111-1111-1111-111111111111"],
                "service_area_catchments": [
                    {
                        "service_area_id": "33333333-3333-3333-3333-333333333333",
                        "catchment_type": "LOCAL"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn deserializes_the_sample_document() {
        let file: DirectoryFile = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(file.areas_of_law.len(), 1);
        assert_eq!(file.local_authorities[0].name, "Westminster");
        assert_eq!(file.service_areas[0].kind, "CIVIL");

        let court = &file.courts[0];
        assert_eq!(court.slug, "central-london-county-court");
        assert_eq!(court.addresses.len(), 2);
        assert_eq!(court.addresses[0].latitude, Some(51.5172));
        assert_eq!(court.addresses[1].latitude, None);
        assert_eq!(court.service_area_catchments[0].catchment_type, "LOCAL");
        assert!(court.local_authority_catchments.is_empty());
        assert!(court.spoe_areas_of_law.is_empty());
    }

    #[test]
    fn optional_court_lists_default_to_empty() {
        let minimal = r#"{
            "areas_of_law": [],
            "local_authorities": [],
            "service_areas": [],
            "courts": [
                {
                    "id": "44444444-4444-4444-4444-444444444444",
                    "name": "Skeleton Court",
                    "slug": "skeleton-court",
                    "open": false
                }
            ]
        }"#;
        let file: DirectoryFile = serde_json::from_str(minimal).unwrap();

        let court = &file.courts[0];
        assert!(!court.open);
        assert!(court.addresses.is_empty());
        assert!(court.areas_of_law.is_empty());
    }
}
