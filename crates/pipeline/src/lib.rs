//! Speech translation pipeline
//!
//! Orchestrates transcription, language detection and translation over
//! shared backend handles. Backends are built once at startup and shared
//! through `Arc`; the pipeline itself holds no mutable state.

use std::sync::Arc;

use anuvad_core::{
    AudioPayload, Error, Language, LanguageDetector, Result, SpeechToText, TranscriptResult,
    Translator,
};
use anuvad_translation::split_sentences;
use serde::Serialize;
use tracing::{info, warn};

/// Result of one text translation
#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutcome {
    pub source_text: String,
    pub detected_language: Language,
    pub target_language: Language,
    pub translated_text: String,
    /// True when detection failed and the source language fell back to
    /// English instead of being read from the text.
    pub detection_defaulted: bool,
}

/// Result of one audio translation
#[derive(Debug, Clone, Serialize)]
pub struct AudioTranslationOutcome {
    pub transcript: TranscriptResult,
    /// Absent when the transcript carried no usable text.
    pub translation: Option<TranslationOutcome>,
}

/// End-to-end speech translation pipeline
pub struct SpeechTranslationPipeline {
    stt: Arc<dyn SpeechToText>,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
}

impl SpeechTranslationPipeline {
    pub fn new(
        stt: Arc<dyn SpeechToText>,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        info!(
            stt = stt.model_name(),
            detector = detector.name(),
            translator = translator.name(),
            "pipeline assembled"
        );
        Self {
            stt,
            detector,
            translator,
        }
    }

    /// Detect the source language, defaulting to English on failure
    ///
    /// Detection errors are recoverable by policy: the boolean marks
    /// that the language was assumed rather than detected.
    fn detect_or_default(&self, text: &str) -> (Language, bool) {
        match self.detector.detect(text) {
            Ok(language) => (language, false),
            Err(e) => {
                warn!(error = %e, "language detection failed, defaulting to English");
                (Language::English, true)
            }
        }
    }

    /// Transcribe an audio payload
    pub async fn transcribe(
        &self,
        audio: &AudioPayload,
        language_hint: Option<Language>,
    ) -> Result<TranscriptResult> {
        self.stt.transcribe(audio, language_hint).await
    }

    /// Translate text to the counterpart of its detected language
    ///
    /// Empty input is rejected before any backend is invoked.
    pub async fn translate_text(&self, text: &str) -> Result<TranslationOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("empty text".to_string()));
        }

        let (detected, defaulted) = self.detect_or_default(text);
        let target = detected.counterpart();

        let translated = self.translator.translate(text, detected, target).await?;

        Ok(TranslationOutcome {
            source_text: text.to_string(),
            detected_language: detected,
            target_language: target,
            translated_text: translated,
            detection_defaulted: defaulted,
        })
    }

    /// Transcribe audio, then translate the transcript
    ///
    /// An empty transcript is not an error; the outcome simply carries
    /// no translation.
    pub async fn translate_audio(
        &self,
        audio: &AudioPayload,
        language_hint: Option<Language>,
    ) -> Result<AudioTranslationOutcome> {
        let transcript = self.transcribe(audio, language_hint).await?;

        if transcript.is_empty() {
            warn!("transcript is empty, skipping translation");
            return Ok(AudioTranslationOutcome {
                transcript,
                translation: None,
            });
        }

        let translation = self.translate_text(&transcript.text).await?;
        Ok(AudioTranslationOutcome {
            transcript,
            translation: Some(translation),
        })
    }

    /// Translate text sentence by sentence
    ///
    /// Splits on sentence delimiters, translates each segment in order,
    /// and joins the results with single spaces. The first failing
    /// segment aborts the batch.
    pub async fn translate_sentences(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String> {
        let sentences = split_sentences(text);
        let mut translated = Vec::with_capacity(sentences.len());

        for sentence in &sentences {
            let result = self.translator.translate(sentence, from, to).await?;
            if !result.is_empty() {
                translated.push(result);
            }
        }

        Ok(translated.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockStt {
        text: String,
        languages: Vec<Language>,
    }

    #[async_trait]
    impl SpeechToText for MockStt {
        async fn transcribe(
            &self,
            _audio: &AudioPayload,
            _language_hint: Option<Language>,
        ) -> Result<TranscriptResult> {
            Ok(TranscriptResult::new(self.text.clone()))
        }

        fn supported_languages(&self) -> &[Language] {
            &self.languages
        }

        fn model_name(&self) -> &str {
            "mock-stt"
        }
    }

    struct CountingTranslator {
        calls: AtomicUsize,
    }

    impl CountingTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("<{}>", text))
        }

        fn supports_pair(&self, _from: Language, _to: Language) -> bool {
            true
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct FailingDetector;

    impl LanguageDetector for FailingDetector {
        fn detect(&self, _text: &str) -> Result<Language> {
            Err(Error::Detection("no signal".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn pipeline_with(
        stt_text: &str,
        detector: Arc<dyn LanguageDetector>,
    ) -> (SpeechTranslationPipeline, Arc<CountingTranslator>) {
        let translator = Arc::new(CountingTranslator::new());
        let pipeline = SpeechTranslationPipeline::new(
            Arc::new(MockStt {
                text: stt_text.to_string(),
                languages: vec![Language::Hindi, Language::English],
            }),
            detector,
            translator.clone(),
        );
        (pipeline, translator)
    }

    fn script_detector() -> Arc<dyn LanguageDetector> {
        Arc::new(anuvad_translation::ScriptDetector::new())
    }

    #[tokio::test]
    async fn test_hindi_targets_english() {
        let (pipeline, _) = pipeline_with("", script_detector());
        let outcome = pipeline.translate_text("नमस्ते दुनिया").await.unwrap();
        assert_eq!(outcome.detected_language, Language::Hindi);
        assert_eq!(outcome.target_language, Language::English);
        assert!(!outcome.detection_defaulted);
    }

    #[tokio::test]
    async fn test_english_targets_hindi() {
        let (pipeline, _) = pipeline_with("", script_detector());
        let outcome = pipeline.translate_text("hello world").await.unwrap();
        assert_eq!(outcome.detected_language, Language::English);
        assert_eq!(outcome.target_language, Language::Hindi);
    }

    #[tokio::test]
    async fn test_empty_text_never_reaches_translator() {
        let (pipeline, translator) = pipeline_with("", script_detector());
        let result = pipeline.translate_text("   ").await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_detection_failure_defaults_to_english() {
        let (pipeline, _) = pipeline_with("", Arc::new(FailingDetector));
        let outcome = pipeline.translate_text("12345").await.unwrap();
        assert_eq!(outcome.detected_language, Language::English);
        assert_eq!(outcome.target_language, Language::Hindi);
        assert!(outcome.detection_defaulted);
    }

    #[tokio::test]
    async fn test_empty_transcript_skips_translation() {
        let (pipeline, translator) = pipeline_with("   ", script_detector());
        let payload = AudioPayload::new(vec![0u8; 16], anuvad_core::AudioFormat::Wav);
        let outcome = pipeline.translate_audio(&payload, None).await.unwrap();
        assert!(outcome.translation.is_none());
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_audio_translation() {
        let (pipeline, _) = pipeline_with("नमस्ते।", script_detector());
        let payload = AudioPayload::new(vec![0u8; 16], anuvad_core::AudioFormat::Mp3);
        let outcome = pipeline
            .translate_audio(&payload, Some(Language::Hindi))
            .await
            .unwrap();
        let translation = outcome.translation.unwrap();
        assert_eq!(translation.detected_language, Language::Hindi);
        assert_eq!(translation.target_language, Language::English);
    }

    #[tokio::test]
    async fn test_english_wav_translates_to_hindi() {
        let (pipeline, _) = pipeline_with("hello how are you", script_detector());
        let payload = AudioPayload::new(vec![0u8; 16], anuvad_core::AudioFormat::Wav);
        let outcome = pipeline.translate_audio(&payload, None).await.unwrap();
        assert!(!outcome.transcript.is_empty());
        let translation = outcome.translation.unwrap();
        assert_eq!(translation.detected_language, Language::English);
        assert_eq!(translation.target_language, Language::Hindi);
        assert!(!translation.translated_text.is_empty());
    }

    #[tokio::test]
    async fn test_sentence_batch_joins_with_spaces() {
        let (pipeline, translator) = pipeline_with("", script_detector());
        let result = pipeline
            .translate_sentences(
                "पहला वाक्य। दूसरा वाक्य। तीसरा वाक्य।",
                Language::Hindi,
                Language::English,
            )
            .await
            .unwrap();
        assert_eq!(result, "<पहला वाक्य> <दूसरा वाक्य> <तीसरा वाक्य>");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_sentence_batch_danda_without_space() {
        let (pipeline, translator) = pipeline_with("", script_detector());
        let result = pipeline
            .translate_sentences("नमस्ते।आप कैसे हैं?", Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(result, "<नमस्ते> <आप कैसे हैं>");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_sentence_batch_empty_input() {
        let (pipeline, translator) = pipeline_with("", script_detector());
        let result = pipeline
            .translate_sentences("", Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(result, "");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }
}
