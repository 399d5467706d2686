//! Error types shared across the workspace
//!
//! Only language detection is ever recovered from (the pipeline fails open
//! to English); every other variant propagates to the caller unhandled.

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("STT error: {0}")]
    Stt(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Language detection error: {0}")]
    Detection(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Workspace-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
