//! Run-length serialization of Morse code into a self-delimiting bitstream.
//!
//! Only run lengths carry information:
//! - a run of `1`s of length 1 is a dot, length 3 is a dash
//! - a run of `0`s of length 1 separates symbols, 3 separates characters,
//!   7 separates words
//!
//! Every encoded stream ends with [`END_MARKER_LEN`] zero bits. No gap inside a
//! message is longer than 7, so the first run of at least that many zeros marks
//! the end of the message even when arbitrary carrier noise follows it.

use crate::error::{Result, StegoError};
use crate::morse::WORD_SEPARATOR;
use std::fmt;
use std::str::FromStr;

/// Length of the all-zero end marker
pub const END_MARKER_LEN: usize = 21;

const DOT_LEN: usize = 1;
const DASH_LEN: usize = 3;
const SYMBOL_GAP: usize = 1;
const CHARACTER_GAP: usize = 3;
const WORD_GAP: usize = 7;

/// A sequence of bits, stored one bit per byte (0 or 1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<u8>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit as u8);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bits
    }

    fn push_run(&mut self, bit: u8, len: usize) {
        self.bits.extend(std::iter::repeat(bit).take(len));
    }
}

impl From<Vec<u8>> for Bitstream {
    fn from(mut bits: Vec<u8>) -> Self {
        for bit in bits.iter_mut() {
            *bit = (*bit != 0) as u8;
        }
        Self { bits }
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstream {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                other => {
                    return Err(StegoError::Steganography(format!(
                        "invalid bit {other:?} at position {i}"
                    )))
                }
            }
        }
        Ok(Self { bits })
    }
}

/// Maximal runs of identical bits as `(bit, length)` pairs
struct Runs<'a> {
    bits: &'a [u8],
    offset: usize,
}

impl<'a> Runs<'a> {
    fn new(bits: &'a [u8]) -> Self {
        Self { bits, offset: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = (u8, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.bits[self.offset..];
        let first = (*rest.first()? != 0) as u8;
        let len = rest
            .iter()
            .take_while(|&&b| (b != 0) as u8 == first)
            .count();
        self.offset += len;
        Some((first, len))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    Character,
    Word,
}

fn mark_len(symbol: char) -> Option<usize> {
    match symbol {
        '.' => Some(DOT_LEN),
        '-' => Some(DASH_LEN),
        _ => None,
    }
}

/// Serialize Morse code into a terminated bitstream
///
/// Empty characters produce neither marks nor gaps, repeated word separators
/// collapse into one word gap, and nothing but the end marker follows the last
/// mark.
pub fn morse_to_bitstream(morse: &str) -> Bitstream {
    let mut stream = Bitstream::with_capacity(morse.len() * 4 + END_MARKER_LEN);
    let mut pending = Gap::None;

    for (index, word) in morse.split(WORD_SEPARATOR).enumerate() {
        if index > 0 {
            pending = Gap::Word;
        }
        for character in word.split(' ') {
            let marks: Vec<usize> = character.chars().filter_map(mark_len).collect();
            if marks.is_empty() {
                continue;
            }

            let gap = match pending {
                Gap::None => 0,
                Gap::Character => CHARACTER_GAP,
                Gap::Word => WORD_GAP,
            };
            stream.push_run(0, gap);

            for (i, &len) in marks.iter().enumerate() {
                if i > 0 {
                    stream.push_run(0, SYMBOL_GAP);
                }
                stream.push_run(1, len);
            }
            pending = Gap::Character;
        }
    }

    stream.push_run(0, END_MARKER_LEN);
    stream
}

/// Index of the first bit of the end marker, if any
pub fn find_end_marker(bits: &[u8]) -> Option<usize> {
    let mut zeros = 0usize;
    for (i, &bit) in bits.iter().enumerate() {
        if bit == 0 {
            zeros += 1;
            if zeros == END_MARKER_LEN {
                return Some(i + 1 - END_MARKER_LEN);
            }
        } else {
            zeros = 0;
        }
    }
    None
}

/// Decode a bitstream (possibly followed by noise) back into Morse code
///
/// Fails with [`StegoError::MessageNotFound`] when no end marker is present.
/// A marker at the very start yields an empty string.
pub fn bitstream_to_morse(bits: &[u8]) -> Result<String> {
    let end = find_end_marker(bits).ok_or(StegoError::MessageNotFound)?;

    let mut morse = String::new();
    for (bit, len) in Runs::new(&bits[..end]) {
        if bit == 1 {
            morse.push(if len >= DASH_LEN { '-' } else { '.' });
        } else if len >= WORD_GAP {
            morse.push_str(" / ");
        } else if len >= CHARACTER_GAP {
            morse.push(' ');
        }
    }

    Ok(morse.trim().to_string())
}
