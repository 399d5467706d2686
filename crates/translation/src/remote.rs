//! Remote translation service client

use std::time::Duration;

use anuvad_core::{Error, Language, Result, Translator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{is_pair_supported, TranslationConfig};

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translated_text: String,
    #[serde(default)]
    error: Option<String>,
}

/// Translator backed by an HTTP translation service
///
/// Sends explicit source/target tags with every request; the service
/// decides nothing about direction on its own.
pub struct RemoteTranslator {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Translation(format!("failed to build HTTP client: {e}")))?;

        info!(endpoint = %config.endpoint, "remote translator ready");

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        if from == to {
            return Ok(text.to_string());
        }
        if !self.supports_pair(from, to) {
            warn!(from = %from, to = %to, "unsupported language pair, passing text through");
            return Ok(text.to_string());
        }

        debug!(from = %from, to = %to, chars = text.chars().count(), "translating via remote service");

        let request = TranslateRequest {
            text,
            source: from.code(),
            target: to.code(),
        };

        let url = format!("{}/translate", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Translation(format!("translation request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Translation(format!(
                "translation service returned {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| Error::Translation(format!("invalid translation response: {e}")))?;

        if let Some(error) = body.error {
            return Err(Error::Translation(error));
        }

        Ok(body.translated_text.trim().to_string())
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        is_pair_supported(from, to)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> RemoteTranslator {
        RemoteTranslator::new(&TranslationConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_text_short_circuits() {
        // Must not hit the network.
        let result = translator().translate("   ", Language::Hindi, Language::English).await;
        assert_eq!(result.unwrap(), "");
    }

    #[tokio::test]
    async fn test_same_language_passthrough() {
        let result = translator()
            .translate("hello", Language::English, Language::English)
            .await;
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn test_response_parse() {
        let json = r#"{"translated_text": "Hello"}"#;
        let body: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.translated_text, "Hello");
        assert!(body.error.is_none());
    }
}
