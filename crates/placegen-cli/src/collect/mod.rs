//! End-to-end collection run: prompt, geocode, search, dedupe, enrich,
//! export.

mod dedupe;
mod details;
mod search;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use placegen_core::AppConfig;
use placegen_geonames::GeonamesClient;
use placegen_maps::MapsClient;

use crate::output;
use crate::prompt::{self, LocationPolicy, Prompter};

/// What a finished run produced.
#[derive(Debug)]
pub(crate) struct CollectionSummary {
    pub location: String,
    pub keyword: String,
    pub area_results: usize,
    pub tile_results: usize,
    pub unique_places: usize,
    pub places_written: usize,
    /// Details lookups dropped because the provider did not answer `OK`.
    pub rejected_details: usize,
    pub output_path: PathBuf,
}

/// Run one collection: ask for a location and keyword, gather every
/// matching place in and around the location, and write them to a CSV in
/// `config.output_dir`.
///
/// # Errors
///
/// Fails if the prompts run out of attempts, any provider call fails at the
/// transport level, geocoding finds nothing, or the output file cannot be
/// written.
pub(crate) async fn run_collection<P: Prompter + ?Sized>(
    config: &AppConfig,
    prompter: &mut P,
) -> anyhow::Result<CollectionSummary> {
    let geonames = GeonamesClient::with_base_url(
        &config.geonames_username,
        config.request_timeout_secs,
        &config.user_agent,
        &config.geonames_base_url,
    )?;
    let maps = MapsClient::with_base_url(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.maps_base_url,
    )?;

    let policy = LocationPolicy {
        max_attempts: config.max_prompt_attempts,
        reject_country_named: config.reject_country_named_places,
    };
    let location = prompt::resolve_location(prompter, &geonames, policy).await?;
    let keyword = prompt::resolve_keyword(prompter, config.max_prompt_attempts)?;

    let area = maps
        .geocode(&location.place, config.default_radius_meters)
        .await
        .with_context(|| format!("failed to geocode '{}'", location.place))?;
    tracing::info!(
        place = %location.place,
        center = %area.center,
        radius_meters = area.radius_meters,
        "location geocoded"
    );

    let area_results = search::search_area(
        &maps,
        &area,
        &keyword,
        Duration::from_millis(config.page_token_delay_ms),
    )
    .await
    .context("area search failed")?;

    let tile_results = search::search_tiles(
        &maps,
        &area_results,
        &keyword,
        config.tile_radius_meters,
        config.max_concurrent_requests,
    )
    .await
    .context("tile search failed")?;

    let place_ids = dedupe::unique_place_ids(&area_results, &tile_results);
    tracing::info!(unique = place_ids.len(), "place ids deduplicated");

    let fetched =
        details::fetch_place_details(&maps, &place_ids, config.max_concurrent_requests)
            .await
            .context("details lookup failed")?;

    let file_name = output::output_file_name(&chrono::Local::now(), &location.place, &keyword);
    let output_path = output::write_places(&config.output_dir, &file_name, &fetched.places)?;
    tracing::info!(
        path = %output_path.display(),
        rows = fetched.places.len(),
        "places written"
    );

    Ok(CollectionSummary {
        location: location.place,
        keyword,
        area_results: area_results.len(),
        tile_results: tile_results.len(),
        unique_places: place_ids.len(),
        places_written: fetched.places.len(),
        rejected_details: fetched.rejected,
        output_path,
    })
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
