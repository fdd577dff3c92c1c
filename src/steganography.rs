/// Morse steganography engine
/// Ties text -> Morse -> bitstream -> LSB together, in memory and over WAV files

use crate::bitstream::{bitstream_to_morse, morse_to_bitstream};
use crate::error::{Result, StegoError};
use crate::lsb;
use crate::morse::{morse_to_text, text_to_morse, unsupported_characters};
use crate::progress::ProgressFn;
use crate::wav;
use std::path::Path;

/// Main steganography engine
#[derive(Debug, Clone, Copy, Default)]
pub struct MorseStego {
    strict: bool,
}

impl MorseStego {
    /// Create an engine that silently drops characters without a Morse symbol
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Create an engine that refuses messages with unsupported characters
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn check_message(&self, message: &str) -> Result<()> {
        if self.strict {
            if let Some(&c) = unsupported_characters(message).first() {
                return Err(StegoError::UnsupportedCharacter(c));
            }
        }
        Ok(())
    }

    /// Number of carrier samples the encoded message occupies
    pub fn required_bits(message: &str) -> usize {
        morse_to_bitstream(&text_to_morse(message)).len()
    }

    /// Number of bits the samples can carry
    pub fn calculate_capacity(samples: &[i16]) -> usize {
        lsb::capacity(samples)
    }

    /// Embed a message into a copy of `samples`
    pub fn embed(
        &self,
        samples: &[i16],
        message: &str,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<i16>> {
        self.check_message(message)?;
        let bits = morse_to_bitstream(&text_to_morse(message));
        lsb::embed(samples, bits.as_slice(), progress)
    }

    /// Extract the message hidden in `samples`
    pub fn extract(&self, samples: &[i16], progress: Option<ProgressFn<'_>>) -> Result<String> {
        let bits = lsb::extract(samples, progress);
        let morse = bitstream_to_morse(bits.as_slice())?;
        Ok(morse_to_text(&morse))
    }

    /// Read `input`, embed `message`, write the stego file to `output`
    ///
    /// Nothing is written when the message does not fit.
    pub fn embed_message<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        message: &str,
        output: Q,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<()> {
        let (input, output) = (input.as_ref(), output.as_ref());
        self.check_message(message)?;

        let (samples, spec) = wav::read_samples(input)?;
        tracing::info!(
            input = %input.display(),
            capacity = Self::calculate_capacity(&samples),
            required = Self::required_bits(message),
            "embedding message"
        );

        let stego = self.embed(&samples, message, progress)?;
        wav::write_samples(output, spec, &stego)?;

        tracing::info!(output = %output.display(), "message embedded");
        Ok(())
    }

    /// Read a stego file and return the hidden message
    pub fn extract_message<P: AsRef<Path>>(
        &self,
        path: P,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<String> {
        let path = path.as_ref();
        let (samples, _) = wav::read_samples(path)?;
        tracing::info!(path = %path.display(), samples = samples.len(), "extracting message");

        let message = self.extract(&samples, progress)?;
        tracing::debug!(chars = message.chars().count(), "message decoded");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hi_in_silence() {
        let stego = MorseStego::new();
        let samples = vec![0i16; 100];
        let carrier = stego.embed(&samples, "HI", None).unwrap();
        assert_eq!(stego.extract(&carrier, None).unwrap(), "HI");
    }

    #[test]
    fn test_case_normalized() {
        let stego = MorseStego::new();
        let samples: Vec<i16> = (0..2000).map(|i| ((i * 31) % 4000 - 2000) as i16).collect();
        let carrier = stego.embed(&samples, "Meet at dawn, gate 7.", None).unwrap();
        assert_eq!(stego.extract(&carrier, None).unwrap(), "MEET AT DAWN, GATE 7.");
    }

    #[test]
    fn test_exact_capacity() {
        let stego = MorseStego::new();
        let needed = MorseStego::required_bits("SOS");
        let samples = vec![100i16; needed];
        assert!(stego.embed(&samples, "SOS", None).is_ok());

        let short = vec![100i16; needed - 1];
        assert_eq!(
            stego.embed(&short, "SOS", None),
            Err(StegoError::MessageTooLong {
                capacity: needed - 1,
                required: needed
            })
        );
    }

    #[test]
    fn test_no_marker_in_odd_samples() {
        let stego = MorseStego::new();
        let samples = vec![1i16; 500];
        assert_eq!(stego.extract(&samples, None), Err(StegoError::MessageNotFound));
    }

    #[test]
    fn test_strict_mode() {
        let samples = vec![0i16; 500];
        assert_eq!(
            MorseStego::strict().embed(&samples, "hi!", None),
            Err(StegoError::UnsupportedCharacter('!'))
        );

        let lenient = MorseStego::new();
        let carrier = lenient.embed(&samples, "hi!", None).unwrap();
        assert_eq!(lenient.extract(&carrier, None).unwrap(), "HI");
    }

    #[test]
    fn test_empty_message_round_trip() {
        let stego = MorseStego::new();
        let carrier = stego.embed(&[1i16; 64], "", None).unwrap();
        assert_eq!(stego.extract(&carrier, None).unwrap(), "");
    }

    #[test]
    fn test_required_bits() {
        // "E" is a single dot followed by the end marker
        assert_eq!(MorseStego::required_bits("E"), 1 + crate::bitstream::END_MARKER_LEN);
        assert_eq!(MorseStego::calculate_capacity(&[0; 42]), 42);
    }
}
