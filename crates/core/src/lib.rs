//! Core traits and types for the speech translator
//!
//! This crate provides foundational types used across all other crates:
//! - Core traits for pluggable backends (STT, translation, detection)
//! - Audio payload types
//! - Language definitions (Hindi and English)
//! - Transcript types
//! - Error types

pub mod audio;
pub mod error;
pub mod language;
pub mod traits;
pub mod transcript;

pub use audio::{AudioFormat, AudioPayload};
pub use error::{Error, Result};
pub use language::{Language, Script};
pub use transcript::TranscriptResult;

pub use traits::{LanguageDetector, SpeechToText, Translator};
