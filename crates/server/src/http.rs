//! HTTP API
//!
//! JSON endpoints over the pipeline:
//! - `POST /api/translate` - text in, translation to the counterpart language
//! - `POST /api/transcribe` - base64 audio in, transcript out
//! - `POST /api/speech-translate` - base64 audio in, transcript + translation out
//! - `GET /health`, `GET /ready` - liveness and sidecar readiness

use std::io::Write;

use anuvad_core::{AudioFormat, AudioPayload, Error, Language};
use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/translate", post(translate_text))
        .route("/api/transcribe", post(transcribe))
        .route("/api/speech-translate", post(speech_translate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    if !state.settings.server.cors_enabled {
        warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = state
        .settings
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.stt.check_health().await {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "degraded", "stt": "unreachable"})),
        )
    }
}

#[derive(Deserialize)]
struct TranslateTextRequest {
    text: String,
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateTextRequest>,
) -> (StatusCode, Json<Value>) {
    match state.pipeline.translate_text(&request.text).await {
        Ok(outcome) => {
            let mut body = json!({
                "source_text": outcome.source_text,
                "detected_language": outcome.detected_language.code(),
                "target_language": outcome.target_language.code(),
                "translated_text": outcome.translated_text,
            });
            if outcome.detection_defaulted {
                body["warning"] = json!("language detection failed, assumed English");
            }
            (StatusCode::OK, Json(body))
        }
        Err(Error::InvalidInput(msg)) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": msg})))
        }
        Err(e) => {
            error!(error = %e, "translation request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}

#[derive(Deserialize)]
struct AudioRequest {
    /// Base64-encoded audio bytes
    audio: String,
    /// File extension of the upload ("mp3" or "wav")
    format: String,
    /// Optional language hint ("hi" or "en")
    #[serde(default)]
    language: Option<String>,
}

fn decode_audio(request: &AudioRequest) -> Result<(AudioPayload, Option<Language>), String> {
    let format = AudioFormat::from_extension(&request.format)
        .ok_or_else(|| format!("unsupported audio format '{}'", request.format))?;

    let data = BASE64
        .decode(&request.audio)
        .map_err(|e| format!("invalid base64 audio: {e}"))?;

    if data.is_empty() {
        return Err("empty audio payload".to_string());
    }

    let hint = request.language.as_deref().and_then(Language::from_str_loose);
    Ok((AudioPayload::new(data, format), hint))
}

async fn transcribe(
    State(state): State<AppState>,
    Json(request): Json<AudioRequest>,
) -> (StatusCode, Json<Value>) {
    let (payload, hint) = match decode_audio(&request) {
        Ok(decoded) => decoded,
        Err(msg) => {
            warn!(error = %msg, "rejected transcription request");
            return (StatusCode::BAD_REQUEST, Json(json!({"error": msg})));
        }
    };

    // Uploads go to disk first; the STT backend reads from the path.
    let temp = match write_temp_audio(&payload) {
        Ok(temp) => temp,
        Err(e) => {
            error!(error = %e, "failed to stage audio upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "failed to stage audio upload"})),
            );
        }
    };

    match state.stt.transcribe_file(temp.path(), hint).await {
        Ok(transcript) => (
            StatusCode::OK,
            Json(json!({
                "text": transcript.text,
                "language": transcript.language.map(|l| l.code()),
                "confidence": transcript.confidence,
            })),
        ),
        Err(e) => {
            error!(error = %e, "transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}

fn write_temp_audio(payload: &AudioPayload) -> std::io::Result<tempfile::NamedTempFile> {
    let mut temp = tempfile::Builder::new()
        .prefix("anuvad-upload-")
        .suffix(&format!(".{}", payload.format.extension()))
        .tempfile()?;
    temp.write_all(&payload.data)?;
    temp.flush()?;
    Ok(temp)
}

async fn speech_translate(
    State(state): State<AppState>,
    Json(request): Json<AudioRequest>,
) -> (StatusCode, Json<Value>) {
    let (payload, hint) = match decode_audio(&request) {
        Ok(decoded) => decoded,
        Err(msg) => {
            warn!(error = %msg, "rejected speech translation request");
            return (StatusCode::BAD_REQUEST, Json(json!({"error": msg})));
        }
    };

    match state.pipeline.translate_audio(&payload, hint).await {
        Ok(outcome) => {
            let translation = outcome.translation.map(|t| {
                json!({
                    "detected_language": t.detected_language.code(),
                    "target_language": t.target_language.code(),
                    "translated_text": t.translated_text,
                    "detection_defaulted": t.detection_defaulted,
                })
            });
            (
                StatusCode::OK,
                Json(json!({
                    "transcript": outcome.transcript.text,
                    "translation": translation,
                })),
            )
        }
        Err(e) => {
            error!(error = %e, "speech translation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}
