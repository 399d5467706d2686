//! Audio payload types
//!
//! An [`AudioPayload`] is the raw bytes of one uploaded or on-disk audio
//! file plus its container format. Only the file extension is inspected;
//! the bytes are never validated here. Malformed content surfaces as an
//! error from the transcription stage.

use std::path::Path;

use crate::{Error, Result};

/// Accepted audio container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    /// Parse from a file extension or format string (case-insensitive,
    /// leading dot allowed). Anything other than mp3/wav is rejected.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().trim_start_matches('.').to_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// MIME type for HTTP handoff
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One audio file's bytes, owned for the duration of a single request
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioPayload {
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Read a payload from disk, filtering on the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Audio(format!("no file extension: {}", path.display())))?;
        let format = AudioFormat::from_extension(ext)
            .ok_or_else(|| Error::Audio(format!("unsupported audio format: {}", ext)))?;

        let data = std::fs::read(path)?;
        Ok(Self { data, format })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(AudioFormat::from_extension("mp3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension(".WAV"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_extension("ogg"), None);
        assert_eq!(AudioFormat::from_extension("webm"), None);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let err = AudioPayload::from_file("clip.flac").unwrap_err();
        assert!(matches!(err, Error::Audio(_)));
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
    }
}
