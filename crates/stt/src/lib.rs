//! Speech-to-text backends
//!
//! Transcription runs in a whisper sidecar process; this crate holds the
//! HTTP client that talks to it.

pub mod whisper_http;

pub use whisper_http::{WhisperHttpConfig, WhisperHttpStt};
