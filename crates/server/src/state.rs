//! Shared application state

use std::sync::Arc;

use anuvad_config::Settings;
use anuvad_pipeline::SpeechTranslationPipeline;
use anuvad_stt::WhisperHttpStt;

/// State shared across request handlers
///
/// Backends live behind the pipeline and are built once at startup; the
/// STT handle is also kept directly for readiness probes.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub pipeline: Arc<SpeechTranslationPipeline>,
    pub stt: Arc<WhisperHttpStt>,
}
