use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub geonames_username: String,
    pub log_level: String,
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on in-flight requests during tile search and detail fetch.
    pub max_concurrent_requests: usize,
    /// How many times the location and keyword prompts may be answered
    /// before the run gives up.
    pub max_prompt_attempts: u32,
    /// Wait before a continuation token becomes usable on the provider side.
    pub page_token_delay_ms: u64,
    pub tile_radius_meters: u32,
    pub default_radius_meters: u32,
    pub reject_country_named_places: bool,
    pub maps_base_url: String,
    pub geonames_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("geonames_username", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("output_dir", &self.output_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("max_prompt_attempts", &self.max_prompt_attempts)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("tile_radius_meters", &self.tile_radius_meters)
            .field("default_radius_meters", &self.default_radius_meters)
            .field(
                "reject_country_named_places",
                &self.reject_country_named_places,
            )
            .field("maps_base_url", &self.maps_base_url)
            .field("geonames_base_url", &self.geonames_base_url)
            .finish()
    }
}
