//! Whisper sidecar HTTP client

use std::path::Path;
use std::time::Duration;

use anuvad_core::{
    AudioPayload, Error, Language, Result, SpeechToText, TranscriptResult,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Whisper sidecar connection settings
#[derive(Debug, Clone)]
pub struct WhisperHttpConfig {
    /// Base URL, e.g. `http://127.0.0.1:8091`
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for WhisperHttpConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8091".to_string(),
            timeout_ms: 30_000,
        }
    }
}

#[derive(Serialize)]
struct TranscribeRequest<'a> {
    /// Base64-encoded audio bytes
    audio: String,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranscribeResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    confidence: f32,
    #[serde(default)]
    error: Option<String>,
}

/// Speech-to-text over a whisper HTTP sidecar
///
/// Sends base64 audio as JSON and returns the transcript the sidecar
/// produced. An optional language hint pins decoding to one language;
/// without it the sidecar auto-detects.
pub struct WhisperHttpStt {
    config: WhisperHttpConfig,
    client: reqwest::Client,
    languages: Vec<Language>,
}

impl WhisperHttpStt {
    pub fn new(config: WhisperHttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Stt(format!("failed to build HTTP client: {e}")))?;

        info!(endpoint = %config.endpoint, "whisper STT client ready");

        Ok(Self {
            config,
            client,
            languages: Language::all().to_vec(),
        })
    }

    /// Transcribe an audio file from disk
    ///
    /// Reads the file, validates its extension, and forwards the payload
    /// to the sidecar.
    pub async fn transcribe_file(
        &self,
        path: impl AsRef<Path>,
        language_hint: Option<Language>,
    ) -> Result<TranscriptResult> {
        let payload = AudioPayload::from_file(path)?;
        self.transcribe(&payload, language_hint).await
    }

    /// Probe the sidecar's health endpoint
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.config.endpoint);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!(error = %e, "whisper sidecar health check failed");
                false
            }
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperHttpStt {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        language_hint: Option<Language>,
    ) -> Result<TranscriptResult> {
        if audio.is_empty() {
            return Err(Error::InvalidInput("empty audio payload".to_string()));
        }

        let request = TranscribeRequest {
            audio: BASE64.encode(&audio.data),
            format: audio.format.extension(),
            language: language_hint.map(|l| l.code()),
        };

        debug!(
            bytes = audio.len(),
            format = audio.format.extension(),
            hint = ?language_hint,
            "sending audio to whisper sidecar"
        );

        let url = format!("{}/transcribe", self.config.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Stt(format!("whisper request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Stt(format!(
                "whisper sidecar returned {}",
                response.status()
            )));
        }

        let body: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| Error::Stt(format!("invalid whisper response: {e}")))?;

        if let Some(error) = body.error {
            return Err(Error::Stt(error));
        }

        let mut transcript = TranscriptResult::new(body.text);
        transcript.confidence = body.confidence;
        transcript.language = body
            .language
            .as_deref()
            .and_then(Language::from_str_loose);

        debug!(
            chars = transcript.text.chars().count(),
            language = ?transcript.language,
            "transcription complete"
        );

        Ok(transcript)
    }

    fn supported_languages(&self) -> &[Language] {
        &self.languages
    }

    fn model_name(&self) -> &str {
        "whisper-http"
    }
}
