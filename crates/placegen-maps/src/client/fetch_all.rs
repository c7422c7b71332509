//! Multi-page nearby search for `MapsClient`.

use std::time::Duration;

use crate::error::MapsError;
use crate::types::PlaceSummary;

use super::{MapsClient, NearbyQuery, MAX_PAGES};

impl MapsClient {
    /// Runs a nearby search and follows `next_page_token` until the provider
    /// stops issuing one, concatenating results in request order.
    ///
    /// `page_token_delay` is slept before every continuation request; a
    /// freshly issued token is rejected with `INVALID_REQUEST` until it has
    /// propagated on the provider side.
    ///
    /// All-or-nothing: a failure on any page discards earlier pages.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::nearby_search_page`].
    /// Returns [`MapsError::PaginationLimit`] if more than [`MAX_PAGES`]
    /// pages would be requested.
    pub async fn nearby_search_all(
        &self,
        query: &NearbyQuery,
        page_token_delay: Duration,
    ) -> Result<Vec<PlaceSummary>, MapsError> {
        let mut all_places: Vec<PlaceSummary> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(MapsError::PaginationLimit {
                    location: query.center.to_string(),
                    max_pages: MAX_PAGES,
                });
            }

            if page_token.is_some() && !page_token_delay.is_zero() {
                tracing::debug!(
                    delay_ms = page_token_delay.as_millis(),
                    page = page_count,
                    "waiting for continuation token to activate"
                );
                tokio::time::sleep(page_token_delay).await;
            }

            let response = self
                .nearby_search_page(query, page_token.as_deref())
                .await?;

            tracing::debug!(
                location = %query.center,
                page = page_count,
                results = response.results.len(),
                has_next = response.next_page_token.is_some(),
                "nearby search page fetched"
            );

            all_places.extend(response.results);

            page_token = response.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        Ok(all_places)
    }
}
