/// Morse alphabet and text <-> Morse conversion
/// Unknown characters are dropped silently in both directions, so both transforms are total

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Token standing for a literal space between words
pub const WORD_SEPARATOR: &str = "/";

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"), ('5', "....."),
    ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."), ('0', "-----"),
    (',', "--..--"), ('.', ".-.-.-"), ('?', "..--.."), ('/', "-..-."), ('-', "-....-"),
    ('(', "-.--."), (')', "-.--.-"),
    (' ', WORD_SEPARATOR),
];

static CHAR_TO_MORSE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MORSE_TABLE.iter().copied().collect());

static MORSE_TO_CHAR: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect());

fn lookup(c: char) -> Option<&'static str> {
    // Every key is ASCII
    CHAR_TO_MORSE.get(&c.to_ascii_uppercase()).copied()
}

/// Whether `c` (case-insensitive) has a Morse symbol
pub fn is_supported(c: char) -> bool {
    lookup(c).is_some()
}

/// Characters that `text_to_morse` would drop, in order of first appearance
pub fn unsupported_characters(text: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in text.chars() {
        if !is_supported(c) && !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Convert text to Morse code
///
/// Symbols are joined by a single space; a space in the input becomes `/`.
/// Characters without a symbol contribute an empty token.
///
/// # Examples
///
/// ```
/// assert_eq!(morsesteg::morse::text_to_morse("Hello"), ".... . .-.. .-.. ---");
/// ```
pub fn text_to_morse(text: &str) -> String {
    text.chars()
        .map(|c| lookup(c).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert Morse code back to uppercase text, skipping tokens with no match
pub fn morse_to_text(morse: &str) -> String {
    morse
        .split_whitespace()
        .filter_map(|token| MORSE_TO_CHAR.get(token).copied())
        .collect()
}
