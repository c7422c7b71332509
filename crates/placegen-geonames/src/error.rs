use thiserror::Error;

/// Errors returned by the GeoNames client.
#[derive(Debug, Error)]
pub enum GeonamesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GeoNames answered with a `status` object instead of results
    /// (bad username, exhausted credits, ...).
    #[error("GeoNames API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
