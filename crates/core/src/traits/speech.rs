//! Speech processing traits

use crate::{AudioPayload, Language, Result, TranscriptResult};
use async_trait::async_trait;

/// Speech-to-Text interface
///
/// Implementations:
/// - `WhisperHttpStt` - whisper sidecar service over HTTP
///
/// # Example
///
/// ```ignore
/// let stt: Arc<dyn SpeechToText> = Arc::new(WhisperHttpStt::new(config)?);
/// let transcript = stt.transcribe(&payload, Some(Language::Hindi)).await?;
/// println!("Transcribed: {}", transcript.text);
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe one audio payload
    ///
    /// # Arguments
    /// * `audio` - Audio payload to transcribe
    /// * `language_hint` - Pins the spoken language; `None` lets the
    ///   backend auto-detect
    ///
    /// # Returns
    /// Transcript with trimmed text and the backend-reported language
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        language_hint: Option<Language>,
    ) -> Result<TranscriptResult>;

    /// Get supported languages
    fn supported_languages(&self) -> &[Language];

    /// Get model name for logging
    fn model_name(&self) -> &str;

    /// Check if a specific language is supported
    fn supports_language(&self, lang: Language) -> bool {
        self.supported_languages().contains(&lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioFormat;

    struct MockStt {
        languages: Vec<Language>,
    }

    #[async_trait]
    impl SpeechToText for MockStt {
        async fn transcribe(
            &self,
            _audio: &AudioPayload,
            _language_hint: Option<Language>,
        ) -> Result<TranscriptResult> {
            Ok(TranscriptResult::new("test transcription"))
        }

        fn supported_languages(&self) -> &[Language] {
            &self.languages
        }

        fn model_name(&self) -> &str {
            "mock-stt"
        }
    }

    #[test]
    fn test_supports_language() {
        let stt = MockStt {
            languages: vec![Language::Hindi],
        };
        assert!(stt.supports_language(Language::Hindi));
        assert!(!stt.supports_language(Language::English));
    }

    #[tokio::test]
    async fn test_mock_transcribe() {
        let stt = MockStt {
            languages: vec![Language::Hindi, Language::English],
        };
        let payload = AudioPayload::new(vec![0u8; 16], AudioFormat::Wav);
        let transcript = stt.transcribe(&payload, None).await.unwrap();
        assert_eq!(transcript.text, "test transcription");
    }
}
