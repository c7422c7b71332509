//! Shared configuration and domain types for the place collector.

pub mod app_config;
pub mod config;
pub mod place;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use place::{LatLng, Place};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
