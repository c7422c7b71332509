use std::collections::HashSet;

use placegen_maps::PlaceSummary;

/// Distinct place ids across the area search and every tile search, in
/// first-seen order.
pub(super) fn unique_place_ids(area: &[PlaceSummary], tiles: &[PlaceSummary]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    area.iter()
        .chain(tiles)
        .filter(|place| seen.insert(place.place_id.as_str()))
        .map(|place| place.place_id.clone())
        .collect()
}
