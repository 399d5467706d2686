//! Language detection and translation backends
//!
//! All backends implement the `Translator` trait from `anuvad-core`, so
//! callers pick a direction with explicit source/target tags and never
//! see backend mechanics (HTTP tags vs. forced decoder tokens).

pub mod detect;
pub mod nllb;
pub mod noop;
pub mod remote;
pub mod segment;

pub use detect::ScriptDetector;
pub use nllb::{NllbConfig, NllbTranslator};
pub use noop::NoopTranslator;
pub use remote::RemoteTranslator;
pub use segment::{split_sentences, SENTENCE_DELIMITERS};

use std::path::PathBuf;
use std::sync::Arc;

use anuvad_core::{Language, Result, Translator};
use serde::Deserialize;
use tracing::{info, warn};

/// Translation backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    #[default]
    Remote,
    Nllb,
    Disabled,
}

impl TranslationProvider {
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "nllb" => Self::Nllb,
            "disabled" | "none" | "noop" => Self::Disabled,
            _ => Self::Remote,
        }
    }
}

/// Translation backend configuration
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub provider: TranslationProvider,
    /// Remote translation service base URL
    pub endpoint: String,
    pub timeout_ms: u64,
    /// Local NLLB model paths (nllb provider only)
    pub nllb_encoder_path: PathBuf,
    pub nllb_decoder_path: PathBuf,
    pub nllb_tokenizer_path: PathBuf,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::Remote,
            endpoint: "http://127.0.0.1:8092".to_string(),
            timeout_ms: 15_000,
            nllb_encoder_path: PathBuf::from("models/nllb/encoder.onnx"),
            nllb_decoder_path: PathBuf::from("models/nllb/decoder.onnx"),
            nllb_tokenizer_path: PathBuf::from("models/nllb/tokenizer.json"),
        }
    }
}

/// Supported translation directions
pub fn supported_pairs() -> &'static [(Language, Language)] {
    &[
        (Language::Hindi, Language::English),
        (Language::English, Language::Hindi),
    ]
}

pub fn is_pair_supported(from: Language, to: Language) -> bool {
    supported_pairs().contains(&(from, to))
}

/// Build a translator from configuration
///
/// A backend that fails to construct degrades to the pass-through
/// translator with a warning instead of aborting startup.
pub fn create_translator(config: &TranslationConfig) -> Arc<dyn Translator> {
    match try_create_translator(config) {
        Ok(translator) => translator,
        Err(e) => {
            warn!(error = %e, "translator construction failed, falling back to pass-through");
            Arc::new(NoopTranslator::new())
        }
    }
}

fn try_create_translator(config: &TranslationConfig) -> Result<Arc<dyn Translator>> {
    let translator: Arc<dyn Translator> = match config.provider {
        TranslationProvider::Remote => Arc::new(RemoteTranslator::new(config)?),
        TranslationProvider::Nllb => {
            let nllb_config = NllbConfig {
                encoder_path: config.nllb_encoder_path.clone(),
                decoder_path: config.nllb_decoder_path.clone(),
                tokenizer_path: config.nllb_tokenizer_path.clone(),
                ..NllbConfig::default()
            };
            Arc::new(NllbTranslator::new(nllb_config)?)
        }
        TranslationProvider::Disabled => Arc::new(NoopTranslator::new()),
    };

    info!(translator = translator.name(), "translation backend ready");
    Ok(translator)
}
