//! Speech translator server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use anuvad_config::{load_settings, Settings};
use anuvad_pipeline::SpeechTranslationPipeline;
use anuvad_stt::{WhisperHttpConfig, WhisperHttpStt};
use anuvad_translation::{create_translator, ScriptDetector, TranslationConfig, TranslationProvider};

mod http;
mod state;

use http::create_router;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env}.toml > config/default.toml > defaults
    let env = std::env::var("ANUVAD_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting speech translator server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_env = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    // Backends are built once and shared for the life of the process.
    let stt = Arc::new(WhisperHttpStt::new(WhisperHttpConfig {
        endpoint: settings.stt.endpoint.clone(),
        timeout_ms: settings.stt.timeout_ms,
    })?);

    let translator = create_translator(&translation_config(&settings));
    let detector = Arc::new(ScriptDetector::new());

    let pipeline = Arc::new(SpeechTranslationPipeline::new(
        stt.clone(),
        detector,
        translator,
    ));

    let app_state = AppState {
        settings: Arc::new(settings.clone()),
        pipeline,
        stt,
    };

    let app = create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn translation_config(settings: &Settings) -> TranslationConfig {
    TranslationConfig {
        provider: TranslationProvider::from_str_loose(&settings.translation.provider),
        endpoint: settings.translation.endpoint.clone(),
        timeout_ms: settings.translation.timeout_ms,
        nllb_encoder_path: settings.translation.nllb_encoder_path.clone().into(),
        nllb_decoder_path: settings.translation.nllb_decoder_path.clone().into(),
        nllb_tokenizer_path: settings.translation.nllb_tokenizer_path.clone().into(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("anuvad={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
