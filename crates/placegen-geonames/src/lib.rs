//! Client for the GeoNames place-name search service.
//!
//! Used to confirm that free-text input names a real place before it is
//! geocoded.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeonamesClient;
pub use error::GeonamesError;
pub use types::{GeonameEntry, SearchResponse};
