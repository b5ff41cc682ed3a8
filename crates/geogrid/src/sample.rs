//! Reinterpretation of raw words as integers.
//!
//! This is the only place that knows about byte order and sign handling.
//! It never consults the host byte order.

use crate::grid::{Endianness, WordSize};

/// Decode one stored word into an integer.
///
/// `word` must hold at least `word_size.bytes()` bytes; extra bytes are
/// ignored. The bytes are assembled in the given byte order and the result
/// is sign-extended from the word width when `signed` is set (two's
/// complement).
///
/// # Panics
///
/// Panics if `word` is shorter than the word size.
pub fn decode_word(word: &[u8], word_size: WordSize, endianness: Endianness, signed: bool) -> i64 {
    let word = &word[..word_size.bytes()];

    let raw = match endianness {
        Endianness::Big => word.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32),
        Endianness::Little => word.iter().rev().fold(0u32, |acc, &b| (acc << 8) | b as u32),
    };

    if signed {
        // Move the sign bit to bit 31, then shift back arithmetically.
        let shift = 32 - 8 * word_size.bytes() as u32;
        (((raw << shift) as i32) >> shift) as i64
    } else {
        raw as i64
    }
}

/// Decode a word and apply the scale factor.
///
/// The product is formed in `f64` and narrowed to `f32`; no further rounding
/// is applied.
pub fn decode_scaled(
    word: &[u8],
    word_size: WordSize,
    endianness: Endianness,
    signed: bool,
    scale: f64,
) -> f32 {
    (decode_word(word, word_size, endianness, signed) as f64 * scale) as f32
}
