//! Transcript types

use serde::{Deserialize, Serialize};

use crate::Language;

/// Result of one transcription call
///
/// The text is stored with leading/trailing whitespace removed; callers
/// may edit it freely before handing it to the translation stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcribed text (trimmed)
    pub text: String,
    /// Language the backend reported, if any
    pub language: Option<Language>,
    /// Backend confidence (0.0 when the backend reports none)
    pub confidence: f32,
}

impl TranscriptResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            language: None,
            confidence: 0.0,
        }
    }

    /// True when the transcript carries no usable text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let t = TranscriptResult::new("  नमस्ते  ");
        assert_eq!(t.text, "नमस्ते");
        assert!(!t.is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(TranscriptResult::new("   ").is_empty());
        assert!(TranscriptResult::default().is_empty());
    }
}
