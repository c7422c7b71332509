//! HTTP client for the Google Maps geocoding and Places endpoints.
//!
//! All endpoints share one `reqwest::Client`, the API key, and a base URL
//! that tests point at a wiremock server.

mod fetch_all;

use std::time::Duration;

use placegen_core::LatLng;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::MapsError;
use crate::geometry::{radius_from_viewport, to_search_radius, GeocodedArea};
use crate::types::{
    DetailsOutcome, GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse, STATUS_OK,
    STATUS_ZERO_RESULTS,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const GEOCODE_PATH: &str = "geocode/json";
const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";
const DETAILS_PATH: &str = "place/details/json";

/// Maximum number of nearby-search pages to follow before returning an
/// error. The provider stops at three; this guards against a cycling token.
pub const MAX_PAGES: usize = 10;

/// Parameters of one nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub center: LatLng,
    pub radius_meters: u32,
    pub keyword: String,
}

/// Client for the Google Maps web services.
pub struct MapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl MapsClient {
    /// Creates a client pointed at the production Google Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MapsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`MapsError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends to the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| MapsError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Geocodes a free-text address into a search center and radius.
    ///
    /// The radius covers the first result's viewport (see
    /// [`radius_from_viewport`]); without a viewport `default_radius_meters`
    /// is used.
    ///
    /// # Errors
    ///
    /// - [`MapsError::NoGeocodeResults`] if nothing matched the address.
    /// - [`MapsError::Api`] for any other non-`OK` status.
    /// - [`MapsError::Http`] / [`MapsError::Deserialize`] on transport or
    ///   decoding failure.
    pub async fn geocode(
        &self,
        address: &str,
        default_radius_meters: u32,
    ) -> Result<GeocodedArea, MapsError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", address)])?;
        let response: GeocodeResponse = self.request_json(&url, GEOCODE_PATH).await?;

        match response.status.as_deref() {
            None | Some(STATUS_OK) => {}
            Some(STATUS_ZERO_RESULTS) => {
                return Err(MapsError::NoGeocodeResults {
                    address: address.to_owned(),
                });
            }
            Some(status) => {
                return Err(MapsError::Api {
                    endpoint: GEOCODE_PATH.to_owned(),
                    status: status.to_owned(),
                    message: response.error_message.unwrap_or_default(),
                });
            }
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| MapsError::NoGeocodeResults {
                address: address.to_owned(),
            })?;

        let center = first.geometry.location;
        let radius_meters = match &first.geometry.viewport {
            Some(viewport) => to_search_radius(radius_from_viewport(center, viewport.northeast)),
            None => default_radius_meters,
        };

        tracing::debug!(
            address,
            resolved = first.formatted_address.as_deref().unwrap_or(""),
            lat = center.lat,
            lng = center.lng,
            radius_meters,
            "geocoded search area"
        );

        Ok(GeocodedArea {
            center,
            radius_meters,
        })
    }

    /// Fetches a single nearby-search page.
    ///
    /// With `page_token` set, requests the continuation page for the same
    /// query.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Api`] if the status is neither `OK` nor `ZERO_RESULTS`.
    /// - [`MapsError::Http`] / [`MapsError::Deserialize`] on transport or
    ///   decoding failure.
    pub async fn nearby_search_page(
        &self,
        query: &NearbyQuery,
        page_token: Option<&str>,
    ) -> Result<NearbySearchResponse, MapsError> {
        let location = query.center.to_string();
        let radius = query.radius_meters.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", query.keyword.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.build_url(NEARBY_SEARCH_PATH, &params)?;
        let response: NearbySearchResponse = self.request_json(&url, NEARBY_SEARCH_PATH).await?;

        if let Some(status) = response.status.as_deref() {
            if status != STATUS_OK && status != STATUS_ZERO_RESULTS {
                return Err(MapsError::Api {
                    endpoint: NEARBY_SEARCH_PATH.to_owned(),
                    status: status.to_owned(),
                    message: response.error_message.clone().unwrap_or_default(),
                });
            }
        }
        Ok(response)
    }

    /// Looks up full details for one place.
    ///
    /// A non-`OK` provider status is returned as
    /// [`DetailsOutcome::Rejected`], not as an error.
    ///
    /// # Errors
    ///
    /// [`MapsError::Http`] / [`MapsError::Deserialize`] on transport or
    /// decoding failure.
    pub async fn place_details(&self, place_id: &str) -> Result<DetailsOutcome, MapsError> {
        let url = self.build_url(DETAILS_PATH, &[("place_id", place_id)])?;
        let response: PlaceDetailsResponse = self.request_json(&url, DETAILS_PATH).await?;
        Ok(response.into_outcome())
    }

    /// Builds an endpoint URL with percent-encoded query parameters and the
    /// API key appended last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, MapsError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| MapsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the body.
    ///
    /// `context` names the endpoint in decoding errors; the full URL is not
    /// used because it carries the API key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, MapsError> {
        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
