//! Error taxonomy shared by the codecs, the embedder and the WAV pipeline.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The WAV container could not be read or written, or is not 16-bit PCM.
    #[error("Invalid audio file: {0}")]
    InvalidAudioFile(String),

    /// The serialized bitstream does not fit in the carrier samples.
    #[error("Message too long to embed: needs {required} bits, maximum is {capacity} bits")]
    MessageTooLong { capacity: usize, required: usize },

    /// No end marker was found in the extracted bitstream.
    #[error("No hidden message found (end marker missing)")]
    MessageNotFound,

    /// Strict mode rejected a character that has no Morse symbol.
    #[error("Unsupported character for Morse encoding: {0:?}")]
    UnsupportedCharacter(char),

    #[error("Steganography error: {0}")]
    Steganography(String),
}

impl From<hound::Error> for StegoError {
    fn from(err: hound::Error) -> Self {
        StegoError::InvalidAudioFile(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StegoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_reports_capacity() {
        let err = StegoError::MessageTooLong {
            capacity: 100,
            required: 134,
        };
        let text = err.to_string();
        assert!(text.contains("100"));
        assert!(text.contains("134"));
    }

    #[test]
    fn test_hound_errors_become_invalid_audio() {
        let err: StegoError = hound::Error::FormatError("no RIFF tag found").into();
        assert!(matches!(err, StegoError::InvalidAudioFile(_)));
    }
}
