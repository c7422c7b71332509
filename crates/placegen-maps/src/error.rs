use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered 200 but with a failure `status`
    /// (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`, `INVALID_REQUEST`, ...).
    #[error("{endpoint} returned status {status}: {message}")]
    Api {
        endpoint: String,
        status: String,
        message: String,
    },

    #[error("no geocoding results for address \"{address}\"")]
    NoGeocodeResults { address: String },

    #[error("pagination limit reached for nearby search at {location}: exceeded {max_pages} pages")]
    PaginationLimit { location: String, max_pages: usize },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
