//! HTTP client for the GeoNames `searchJSON` endpoint.
//!
//! Wraps `reqwest` with username handling and typed response
//! deserialization. GeoNames reports account and quota problems inside a
//! 200 response as a `status` object; those surface as
//! [`GeonamesError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeonamesError;
use crate::types::{ErrorEnvelope, GeonameEntry, SearchResponse};

const DEFAULT_BASE_URL: &str = "http://api.geonames.org/";

/// Client for the GeoNames web services.
pub struct GeonamesClient {
    client: Client,
    username: String,
    base_url: Url,
}

impl GeonamesClient {
    /// Creates a client pointed at the public GeoNames service.
    ///
    /// # Errors
    ///
    /// Returns [`GeonamesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        username: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeonamesError> {
        Self::with_base_url(username, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeonamesError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`GeonamesError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        username: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeonamesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeonamesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            username: username.to_owned(),
            base_url,
        })
    }

    /// Searches toponyms matching free text, returning at most `max_rows`.
    ///
    /// An empty `Vec` means nothing matched.
    ///
    /// # Errors
    ///
    /// - [`GeonamesError::Api`] if GeoNames returns a `status` error object.
    /// - [`GeonamesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeonamesError::Deserialize`] if the body has an unexpected shape.
    pub async fn search(
        &self,
        query: &str,
        max_rows: u32,
    ) -> Result<Vec<GeonameEntry>, GeonamesError> {
        let max_rows = max_rows.to_string();
        let url = self.build_url("searchJSON", &[("q", query), ("maxRows", &max_rows)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let parsed: SearchResponse =
            serde_json::from_value(body).map_err(|e| GeonamesError::Deserialize {
                context: format!("searchJSON(q={query})"),
                source: e,
            })?;

        tracing::debug!(
            query,
            total = parsed.total_results_count,
            returned = parsed.geonames.len(),
            "geonames search complete"
        );
        Ok(parsed.geonames)
    }

    /// Builds an endpoint URL with percent-encoded query parameters and the
    /// account username appended last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, GeonamesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| GeonamesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("username", &self.username);
        }
        Ok(url)
    }

    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeonamesError> {
        // Strip the URL from transport errors: it carries the username.
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
        serde_json::from_str(&body).map_err(|e| GeonamesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    fn check_api_error(body: &serde_json::Value) -> Result<(), GeonamesError> {
        if body.get("status").is_some() {
            if let Ok(envelope) = serde_json::from_value::<ErrorEnvelope>(body.clone()) {
                return Err(GeonamesError::Api {
                    code: envelope.status.value,
                    message: envelope.status.message,
                });
            }
        }
        Ok(())
    }
}
