//! GeoNames `searchJSON` response types.
//!
//! Only the fields the collector reads are modelled. Coordinates arrive as
//! strings on the wire and are kept that way.

use serde::Deserialize;

/// Top-level `searchJSON` response: `{ "totalResultsCount": N, "geonames": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "totalResultsCount")]
    pub total_results_count: i64,
    #[serde(default)]
    pub geonames: Vec<GeonameEntry>,
}

/// One matching toponym.
#[derive(Debug, Clone, Deserialize)]
pub struct GeonameEntry {
    pub name: String,
    /// Absent for features outside any country (oceans, continents).
    #[serde(default, rename = "countryName")]
    pub country_name: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "geonameId")]
    pub geoname_id: Option<i64>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}

impl GeonameEntry {
    /// `"<country>: <place>"`, or just the place when no country is known.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.country_name {
            Some(country) => format!("{country}: {}", self.name),
            None => self.name.clone(),
        }
    }

    /// `true` when the place carries the same name as its country, e.g. a
    /// lookup for "Spain" that resolved to the country itself.
    #[must_use]
    pub fn is_country_itself(&self) -> bool {
        self.country_name
            .as_deref()
            .is_some_and(|country| country == self.name)
    }
}

/// Error envelope: `{ "status": { "message": "...", "value": 10 } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub status: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub value: i64,
}
