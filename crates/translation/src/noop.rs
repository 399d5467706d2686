//! Pass-through translator

use anuvad_core::{Language, Result, Translator};
use async_trait::async_trait;
use tracing::debug;

/// Translator that returns the input unchanged
///
/// Used when translation is disabled or a configured backend fails to
/// build; the rest of the pipeline keeps working on original text.
#[derive(Debug, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        debug!(from = %from, to = %to, "translation disabled, passing text through");
        Ok(text.to_string())
    }

    fn supports_pair(&self, _from: Language, _to: Language) -> bool {
        false
    }

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough() {
        let translator = NoopTranslator::new();
        let result = translator
            .translate("hello", Language::English, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(result, "hello");
        assert!(!translator.supports_pair(Language::English, Language::Hindi));
    }
}
