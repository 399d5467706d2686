//! Capability traits for pluggable backends

mod speech;
mod text_processing;

pub use speech::SpeechToText;
pub use text_processing::{LanguageDetector, Translator};
