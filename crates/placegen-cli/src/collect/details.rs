//! Concurrent place-details lookups.

use futures::stream::{self, StreamExt};
use placegen_core::Place;
use placegen_maps::{DetailsOutcome, MapsClient, MapsError};

/// Places that came back `OK`, plus how many lookups the provider refused.
#[derive(Debug, Default)]
pub(super) struct FetchedDetails {
    /// In completion order, not input order.
    pub places: Vec<Place>,
    pub rejected: usize,
}

/// Look up details for every id with at most `max_concurrent` requests in
/// flight, waiting for all of them before returning.
///
/// A non-`OK` provider status drops that place and is logged; a transport
/// or decoding failure on any lookup fails the whole batch.
pub(super) async fn fetch_place_details(
    maps: &MapsClient,
    place_ids: &[String],
    max_concurrent: usize,
) -> Result<FetchedDetails, MapsError> {
    let outcomes: Vec<(&str, Result<DetailsOutcome, MapsError>)> = stream::iter(place_ids)
        .map(|id| async move { (id.as_str(), maps.place_details(id).await) })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    let mut fetched = FetchedDetails {
        places: Vec::with_capacity(outcomes.len()),
        rejected: 0,
    };
    for (place_id, outcome) in outcomes {
        match outcome? {
            DetailsOutcome::Found(place) => fetched.places.push(place),
            DetailsOutcome::Rejected { status } => {
                fetched.rejected += 1;
                tracing::warn!(place_id, status = %status, "details lookup rejected; place dropped");
            }
        }
    }

    if fetched.rejected > 0 {
        tracing::warn!(
            requested = place_ids.len(),
            rejected = fetched.rejected,
            "some places were dropped from the export"
        );
    }
    tracing::info!(
        requested = place_ids.len(),
        fetched = fetched.places.len(),
        "details lookups complete"
    );
    Ok(fetched)
}
