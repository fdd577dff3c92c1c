//! # morsesteg
//!
//! Hides short text messages in 16-bit PCM WAV files. The text is converted to
//! Morse code, the Morse timing is serialized as a run-length bitstream ending in
//! a 21-bit zero marker, and that bitstream is written into the least-significant
//! bits of the audio samples.
//!
//! ## Quick Start
//!
//! ```no_run
//! use morsesteg::MorseStego;
//!
//! # fn main() -> anyhow::Result<()> {
//! let stego = MorseStego::new();
//!
//! // Hide a message
//! stego.embed_message("cover.wav", "meet at noon", "stego.wav", None)?;
//!
//! // Read it back (uppercased, as Morse has no case)
//! let message = stego.extract_message("stego.wav", None)?;
//! assert_eq!(message, "MEET AT NOON");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `morse`: text <-> Morse code
//! - `bitstream`: Morse <-> run-length bitstream with end marker
//! - `lsb`: bitstream <-> sample LSBs
//! - `wav`: WAV reading and writing
//! - `steganography`: the engine combining all of the above

pub mod bitstream;
pub mod error;
pub mod lsb;
pub mod morse;
pub mod progress;
pub mod steganography;
pub mod wav;

// Re-export main types for convenience
pub use bitstream::{bitstream_to_morse, morse_to_bitstream, Bitstream, END_MARKER_LEN};
pub use error::{Result, StegoError};
pub use morse::{morse_to_text, text_to_morse};
pub use progress::ProgressFn;
pub use steganography::MorseStego;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Embed `message` into the WAV file at `input`, writing the result to `output`
///
/// Uses the default (non-strict) engine.
pub fn embed_message<P: AsRef<std::path::Path>, Q: AsRef<std::path::Path>>(
    input: P,
    message: &str,
    output: Q,
    progress: Option<ProgressFn<'_>>,
) -> Result<()> {
    MorseStego::new().embed_message(input, message, output, progress)
}

/// Extract the message hidden in the WAV file at `path`
pub fn extract_message<P: AsRef<std::path::Path>>(
    path: P,
    progress: Option<ProgressFn<'_>>,
) -> Result<String> {
    MorseStego::new().extract_message(path, progress)
}
