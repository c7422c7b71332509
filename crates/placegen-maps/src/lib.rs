//! Client for the Google Maps geocoding and Places web services.
//!
//! Covers the three calls the collector needs: address geocoding, nearby
//! search (with continuation-token paging), and place details.

pub mod client;
pub mod error;
pub mod geometry;
pub mod types;

pub use client::{MapsClient, NearbyQuery, MAX_PAGES};
pub use error::MapsError;
pub use geometry::{radius_from_viewport, to_search_radius, GeocodedArea};
pub use types::{DetailsOutcome, NearbySearchResponse, PlaceSummary};
