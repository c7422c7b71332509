//! Search-area math.
//!
//! Degrees are turned into meters with a flat 111 km per degree on both
//! axes. That overstates longitude distance away from the equator, which
//! only makes the search circle larger.

use placegen_core::LatLng;

pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Nearby search rejects radii above this.
pub const MAX_SEARCH_RADIUS_METERS: u32 = 50_000;

/// Center and radius of the area to search, as resolved by geocoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodedArea {
    pub center: LatLng,
    pub radius_meters: u32,
}

/// Radius in meters covering the viewport: the larger of the lat/lng
/// offsets from the center to the northeast corner.
#[must_use]
pub fn radius_from_viewport(center: LatLng, northeast: LatLng) -> f64 {
    let d_lat = (center.lat - northeast.lat).abs();
    let d_lng = (center.lng - northeast.lng).abs();
    d_lat.max(d_lng) * METERS_PER_DEGREE
}

/// Round to whole meters and clamp into `1..=MAX_SEARCH_RADIUS_METERS`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_search_radius(meters: f64) -> u32 {
    if !meters.is_finite() || meters < 1.0 {
        return 1;
    }
    let rounded = meters.round();
    if rounded >= f64::from(MAX_SEARCH_RADIUS_METERS) {
        return MAX_SEARCH_RADIUS_METERS;
    }
    rounded as u32
}
