//! Script-based language detection

use anuvad_core::{Error, Language, LanguageDetector, Result, Script};
use tracing::debug;

/// Detects language by dominant Unicode script
///
/// Devanagari text maps to Hindi; any other dominant script collapses
/// to English. Text without letters at all is a detection error; the
/// caller's policy decides how to recover (the pipeline defaults to
/// English).
#[derive(Debug, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<Language> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::Detection("empty text".to_string()));
        }

        let language = match Script::detect(trimmed) {
            Some(Script::Devanagari) => Language::Hindi,
            Some(Script::Latin) => Language::English,
            None => {
                return Err(Error::Detection(
                    "no script-bearing characters in text".to_string(),
                ))
            }
        };

        debug!(language = %language, "detected language from script");
        Ok(language)
    }

    fn name(&self) -> &str {
        "script-detector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_hindi() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("नमस्ते, आप कैसे हैं?").unwrap(), Language::Hindi);
    }

    #[test]
    fn test_detect_english() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("Hello, how are you?").unwrap(), Language::English);
    }

    #[test]
    fn test_detect_empty_is_error() {
        let detector = ScriptDetector::new();
        assert!(detector.detect("").is_err());
        assert!(detector.detect("   ").is_err());
    }

    #[test]
    fn test_detect_no_letters_is_error() {
        let detector = ScriptDetector::new();
        assert!(detector.detect("12345 !!!").is_err());
    }

    #[test]
    fn test_detect_other_script_collapses_to_english() {
        // Non-Hindi text is classified as English, not rejected.
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("Привет мир").unwrap(), Language::English);
        assert_eq!(detector.detect("你好世界").unwrap(), Language::English);
    }

    #[test]
    fn test_detect_mixed_dominant_script_wins() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("नमस्ते दुनिया ok").unwrap(), Language::Hindi);
    }
}
