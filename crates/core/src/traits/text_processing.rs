//! Text processing traits

use crate::{Language, Result};
use async_trait::async_trait;

/// Translation interface
///
/// Implementations:
/// - `RemoteTranslator` - HTTP translation service with explicit
///   source/target tags
/// - `NllbTranslator` - local NLLB seq2seq model via ONNX (forced-BOS
///   target selection, hidden behind this interface)
/// - `NoopTranslator` - pass-through (disabled)
///
/// # Example
///
/// ```ignore
/// let translator: Arc<dyn Translator> = Arc::new(RemoteTranslator::new(config)?);
/// let english = translator
///     .translate("नमस्ते", Language::Hindi, Language::English)
///     .await?;
/// ```
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate text between languages
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `from` - Source language
    /// * `to` - Target language
    ///
    /// # Returns
    /// Translated text
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Check if language pair is supported
    fn supports_pair(&self, from: Language, to: Language) -> bool;

    /// Get translator name for logging
    fn name(&self) -> &str;
}

/// Language identification interface
///
/// Implementations:
/// - `ScriptDetector` - dominant Unicode script classification
///
/// Detection errors are recoverable by policy: callers default to English
/// and surface a warning rather than failing the request.
pub trait LanguageDetector: Send + Sync + 'static {
    /// Detect the language of a text
    ///
    /// # Errors
    /// Returns a detection error when the text carries no usable signal
    /// (e.g. empty or without script-bearing characters).
    fn detect(&self, text: &str) -> Result<Language>;

    /// Get detector name for logging
    fn name(&self) -> &str;
}
