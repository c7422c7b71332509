//! Nearby searches: one paginated search over the whole area, then one
//! single-page search around every place it returned.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use placegen_maps::{GeocodedArea, MapsClient, MapsError, NearbyQuery, PlaceSummary};

/// Paginated nearby search covering the geocoded area.
pub(super) async fn search_area(
    maps: &MapsClient,
    area: &GeocodedArea,
    keyword: &str,
    page_token_delay: Duration,
) -> Result<Vec<PlaceSummary>, MapsError> {
    let query = NearbyQuery {
        center: area.center,
        radius_meters: area.radius_meters,
        keyword: keyword.to_owned(),
    };
    let places = maps.nearby_search_all(&query, page_token_delay).await?;
    tracing::info!(
        center = %area.center,
        radius_meters = area.radius_meters,
        results = places.len(),
        "area search complete"
    );
    Ok(places)
}

/// Secondary search of `tile_radius_meters` around each anchor place.
///
/// Tiles are not paginated. At most `max_concurrent` searches are in
/// flight; results come back in completion order. The first failed tile
/// fails the whole stage once all in-flight searches have finished.
pub(super) async fn search_tiles(
    maps: &MapsClient,
    anchors: &[PlaceSummary],
    keyword: &str,
    tile_radius_meters: u32,
    max_concurrent: usize,
) -> Result<Vec<PlaceSummary>, MapsError> {
    let pages: Vec<Result<Vec<PlaceSummary>, MapsError>> = stream::iter(anchors)
        .map(|anchor| {
            let query = NearbyQuery {
                center: anchor.geometry.location,
                radius_meters: tile_radius_meters,
                keyword: keyword.to_owned(),
            };
            async move {
                let page = maps.nearby_search_page(&query, None).await?;
                tracing::debug!(
                    anchor = %anchor.place_id,
                    results = page.results.len(),
                    "tile search complete"
                );
                Ok::<_, MapsError>(page.results)
            }
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    let mut tiled = Vec::new();
    for page in pages {
        tiled.extend(page?);
    }

    tracing::info!(
        tiles = anchors.len(),
        results = tiled.len(),
        "tile searches complete"
    );
    Ok(tiled)
}
