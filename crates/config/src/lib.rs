//! Configuration management
//!
//! Layered settings: `config/default.toml`, then an optional
//! environment-specific file, then `ANUVAD__*` environment variables.

pub mod settings;

pub use settings::{
    load_settings, BatchSettings, ObservabilityConfig, ServerConfig, Settings, SttSettings,
    TranslationSettings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("invalid configuration value: {0}")]
    Invalid(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
