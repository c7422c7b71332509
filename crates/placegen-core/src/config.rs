use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
pub const DEFAULT_GEONAMES_BASE_URL: &str = "http://api.geonames.org/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;
    let geonames_username = require("GEONAMES_USERNAME")?;

    let log_level = or_default("PLACEGEN_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("PLACEGEN_OUTPUT_DIR", "."));
    let request_timeout_secs = parse_u64("PLACEGEN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEGEN_USER_AGENT", "placegen/0.1 (places-export)");
    let max_concurrent_requests = parse_usize("PLACEGEN_MAX_CONCURRENT_REQUESTS", "8")?.max(1);

    let max_prompt_attempts = parse_u32("PLACEGEN_MAX_PROMPT_ATTEMPTS", "5")?;
    if max_prompt_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEGEN_MAX_PROMPT_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let page_token_delay_ms = parse_u64("PLACEGEN_PAGE_TOKEN_DELAY_MS", "2000")?;
    let tile_radius_meters = parse_u32("PLACEGEN_TILE_RADIUS_METERS", "1000")?;
    let default_radius_meters = parse_u32("PLACEGEN_DEFAULT_RADIUS_METERS", "5000")?;
    let reject_country_named_places = parse_bool(
        "PLACEGEN_REJECT_COUNTRY_NAMED_PLACES",
        &or_default("PLACEGEN_REJECT_COUNTRY_NAMED_PLACES", "true"),
    )?;

    let maps_base_url = or_default("PLACEGEN_MAPS_BASE_URL", DEFAULT_MAPS_BASE_URL);
    let geonames_base_url = or_default("PLACEGEN_GEONAMES_BASE_URL", DEFAULT_GEONAMES_BASE_URL);

    Ok(AppConfig {
        google_maps_api_key,
        geonames_username,
        log_level,
        output_dir,
        request_timeout_secs,
        user_agent,
        max_concurrent_requests,
        max_prompt_attempts,
        page_token_delay_ms,
        tile_radius_meters,
        default_radius_meters,
        reject_country_named_places,
        maps_base_url,
        geonames_base_url,
    })
}

/// Parse a boolean flag. Accepts `true`/`false`, `1`/`0`, `yes`/`no`
/// case-insensitively.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
