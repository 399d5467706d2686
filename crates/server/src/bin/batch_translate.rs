//! Batch audio translation runner
//!
//! Reads one audio file, transcribes it, then translates the transcript
//! sentence by sentence and prints both to stdout.

use std::sync::Arc;

use anyhow::Context;

use anuvad_config::{load_settings, Settings};
use anuvad_core::{AudioPayload, Language, LanguageDetector};
use anuvad_pipeline::SpeechTranslationPipeline;
use anuvad_stt::{WhisperHttpConfig, WhisperHttpStt};
use anuvad_translation::{
    create_translator, ScriptDetector, TranslationConfig, TranslationProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anuvad=info".into()),
        )
        .init();

    let env = std::env::var("ANUVAD_ENV").ok();
    let settings = load_settings(env.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        Settings::default()
    });

    // Input file may be overridden on the command line.
    let input_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.batch.input_file.clone());

    let hint = Language::from_str_loose(&settings.batch.language_hint);

    tracing::info!(file = %input_file, hint = ?hint, "starting batch translation");

    let payload = AudioPayload::from_file(&input_file)
        .with_context(|| format!("failed to read audio file '{input_file}'"))?;

    let stt = Arc::new(WhisperHttpStt::new(WhisperHttpConfig {
        endpoint: settings.stt.endpoint.clone(),
        timeout_ms: settings.stt.timeout_ms,
    })?);

    let translator = create_translator(&TranslationConfig {
        provider: TranslationProvider::from_str_loose(&settings.translation.provider),
        endpoint: settings.translation.endpoint.clone(),
        timeout_ms: settings.translation.timeout_ms,
        nllb_encoder_path: settings.translation.nllb_encoder_path.clone().into(),
        nllb_decoder_path: settings.translation.nllb_decoder_path.clone().into(),
        nllb_tokenizer_path: settings.translation.nllb_tokenizer_path.clone().into(),
    });
    let detector = Arc::new(ScriptDetector::new());

    let pipeline = SpeechTranslationPipeline::new(stt, detector.clone(), translator);

    let transcript = pipeline
        .transcribe(&payload, hint)
        .await
        .context("transcription failed")?;

    if transcript.is_empty() {
        println!("Transcript: (empty)");
        tracing::warn!("transcript is empty, nothing to translate");
        return Ok(());
    }

    println!("Transcript: {}", transcript.text);

    // Source follows the transcript: backend-reported language, then the
    // hint, then script detection with the English fallback.
    let source = transcript
        .language
        .or(hint)
        .or_else(|| detector.detect(&transcript.text).ok())
        .unwrap_or_default();
    let target = source.counterpart();

    let translated = pipeline
        .translate_sentences(&transcript.text, source, target)
        .await
        .context("translation failed")?;

    println!("Translation ({} -> {}): {}", source, target, translated);
    Ok(())
}
