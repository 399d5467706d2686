//! Language definitions for the Hindi ↔ English translator
//!
//! The translator works over a closed two-language set. Detection and
//! translation direction are both expressed in terms of this enum; the
//! target of any translation is always the counterpart of the source.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Get the other member of the language pair
    ///
    /// Translation always targets the counterpart of the detected source.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::English,
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Hindi => Script::Devanagari,
        }
    }

    /// Get sentence terminators for this language's script
    pub fn sentence_terminators(&self) -> &'static [char] {
        match self.script() {
            Script::Devanagari => &['.', '?', '!', '।'],
            Script::Latin => &['.', '?', '!'],
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Hindi]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Detect script from text (returns most frequent script)
    ///
    /// Every non-Devanagari letter counts toward Latin, so text in any
    /// other script still classifies as Latin. Only alphabetic
    /// characters are counted; digit- or punctuation-only text detects
    /// as no script at all.
    pub fn detect(text: &str) -> Option<Self> {
        let mut devanagari = 0u32;
        let mut latin = 0u32;

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            if Self::Devanagari.contains_char(c) {
                devanagari += 1;
            } else {
                latin += 1;
            }
        }

        if devanagari == 0 && latin == 0 {
            None
        } else if devanagari > latin {
            Some(Self::Devanagari)
        } else {
            Some(Self::Latin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_counterpart() {
        assert_eq!(Language::Hindi.counterpart(), Language::English);
        assert_eq!(Language::English.counterpart(), Language::Hindi);
        // Round trip lands back on the source
        assert_eq!(Language::Hindi.counterpart().counterpart(), Language::Hindi);
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Hindi.script(), Script::Devanagari);
        assert_eq!(Language::English.script(), Script::Latin);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose("ENGLISH"), Some(Language::English));
        assert_eq!(Language::from_str_loose("unknown"), None);
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("Hello world"), Some(Script::Latin));
        assert_eq!(Script::detect("नमस्ते"), Some(Script::Devanagari));
        // Mixed text resolves to the dominant script
        assert_eq!(Script::detect("नमस्ते ji"), Some(Script::Devanagari));
    }

    #[test]
    fn test_script_detect_no_letters() {
        assert_eq!(Script::detect(""), None);
        assert_eq!(Script::detect("12345 !!! ?"), None);
    }

    #[test]
    fn test_script_detect_other_scripts_count_as_latin() {
        assert_eq!(Script::detect("Привет мир"), Some(Script::Latin));
        assert_eq!(Script::detect("你好世界"), Some(Script::Latin));
    }

    #[test]
    fn test_sentence_terminators() {
        let hindi_terms = Language::Hindi.sentence_terminators();
        assert!(hindi_terms.contains(&'।'));
        assert!(hindi_terms.contains(&'.'));
    }
}
