//! Google Maps web-service response types.
//!
//! Every response carries a top-level `status` string. Fields the collector
//! never reads are not modelled; serde ignores them.

use placegen_core::{LatLng, Place};
use serde::Deserialize;

pub(crate) const STATUS_OK: &str = "OK";
pub(crate) const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    #[serde(default)]
    pub southwest: Option<LatLng>,
}

// ---------------------------------------------------------------------------
// geocode/json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

// ---------------------------------------------------------------------------
// place/nearbysearch/json
// ---------------------------------------------------------------------------

/// One page of nearby-search results.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Missing on some mocked or proxied responses; treated as `OK`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    /// Present when another page is available. The token only becomes
    /// valid a short while after it is issued.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A place as returned by nearby search; enough to dedupe and to center a
/// follow-up search on it.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub geometry: Geometry,
}

// ---------------------------------------------------------------------------
// place/details/json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl From<PlaceDetails> for Place {
    fn from(details: PlaceDetails) -> Self {
        Place {
            name: details.name,
            address: details.formatted_address,
            phone_number: details.formatted_phone_number,
            website: details.website,
            rating: details.rating.unwrap_or(0.0),
        }
    }
}

/// Result of a details lookup that reached the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsOutcome {
    Found(Place),
    /// The provider answered with a non-`OK` status (`NOT_FOUND`,
    /// `INVALID_REQUEST`, ...) or an `OK` without a `result` object.
    Rejected { status: String },
}

impl PlaceDetailsResponse {
    pub(crate) fn into_outcome(self) -> DetailsOutcome {
        match (self.status.as_str(), self.result) {
            (STATUS_OK, Some(details)) => DetailsOutcome::Found(details.into()),
            (STATUS_OK, None) => DetailsOutcome::Rejected {
                status: "OK_WITHOUT_RESULT".to_string(),
            },
            (status, _) => DetailsOutcome::Rejected {
                status: if status.is_empty() {
                    "MISSING_STATUS".to_string()
                } else {
                    status.to_string()
                },
            },
        }
    }
}
