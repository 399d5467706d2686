//! Application settings

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ConfigError;

/// Top-level application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stt: SttSettings,
    #[serde(default)]
    pub translation: TranslationSettings,
    #[serde(default)]
    pub batch: BatchSettings,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            stt: SttSettings::default(),
            translation: TranslationSettings::default(),
            batch: BatchSettings::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Speech-to-text sidecar settings
#[derive(Debug, Clone, Deserialize)]
pub struct SttSettings {
    /// Base URL of the whisper sidecar
    #[serde(default = "default_stt_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_stt_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SttSettings {
    fn default() -> Self {
        Self {
            endpoint: default_stt_endpoint(),
            timeout_ms: default_stt_timeout_ms(),
        }
    }
}

/// Translation backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    /// Backend selector: "remote", "nllb" or "disabled"
    #[serde(default = "default_translation_provider")]
    pub provider: String,
    /// Remote translation service base URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_translation_timeout_ms")]
    pub timeout_ms: u64,
    /// NLLB encoder ONNX path (local backend only)
    #[serde(default)]
    pub nllb_encoder_path: String,
    /// NLLB decoder ONNX path (local backend only)
    #[serde(default)]
    pub nllb_decoder_path: String,
    /// NLLB tokenizer.json path (local backend only)
    #[serde(default)]
    pub nllb_tokenizer_path: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: default_translation_provider(),
            endpoint: default_translation_endpoint(),
            timeout_ms: default_translation_timeout_ms(),
            nllb_encoder_path: String::new(),
            nllb_decoder_path: String::new(),
            nllb_tokenizer_path: String::new(),
        }
    }
}

/// Batch translation run settings
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// Audio file the batch binary reads
    #[serde(default = "default_batch_input")]
    pub input_file: String,
    /// Language hint passed to transcription ("hi" or "en"; empty for auto)
    #[serde(default = "default_batch_hint")]
    pub language_hint: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            input_file: default_batch_input(),
            language_hint: default_batch_hint(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_stt_endpoint() -> String {
    "http://127.0.0.1:8091".to_string()
}

fn default_stt_timeout_ms() -> u64 {
    30_000
}

fn default_translation_provider() -> String {
    "remote".to_string()
}

fn default_translation_endpoint() -> String {
    "http://127.0.0.1:8092".to_string()
}

fn default_translation_timeout_ms() -> u64 {
    15_000
}

fn default_batch_input() -> String {
    "sample_hindi.mp3".to_string()
}

fn default_batch_hint() -> String {
    "hi".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load settings from files and environment
///
/// Layering (later wins):
/// 1. `config/default.toml` (optional)
/// 2. `config/{env}.toml` (optional)
/// 3. `ANUVAD__SECTION__KEY` environment variables
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env}")).required(false));
    }

    let config = builder
        .add_source(
            Environment::with_prefix("ANUVAD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = config.try_deserialize::<Settings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.stt.endpoint, "http://127.0.0.1:8091");
        assert_eq!(settings.translation.provider, "remote");
        assert_eq!(settings.batch.input_file, "sample_hindi.mp3");
        assert_eq!(settings.batch.language_hint, "hi");
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_load_without_files() {
        // No config/ directory in the test cwd; defaults must apply.
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert!(settings.server.cors_enabled);
    }
}
