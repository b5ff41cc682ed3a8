//! Test data generators: integer sample patterns and their raw encodings.
//!
//! The encoders here are the inverse of the geogrid word decoder. They take
//! plain parameters rather than the decoder's types so that this crate can
//! be used from any test in the workspace.

/// Encodes one integer as a stored word.
///
/// Only the low `word_size` bytes of the two's-complement representation
/// are kept, so negative values round-trip when decoded as signed.
///
/// # Example
///
/// ```
/// use test_utils::encode_word;
///
/// assert_eq!(encode_word(0x0102, 2, false), vec![0x01, 0x02]);
/// assert_eq!(encode_word(0x0102, 2, true), vec![0x02, 0x01]);
/// assert_eq!(encode_word(-1, 2, false), vec![0xFF, 0xFF]);
/// ```
pub fn encode_word(value: i64, word_size: usize, little_endian: bool) -> Vec<u8> {
    let be = (value as u32).to_be_bytes();
    let mut word = be[4 - word_size..].to_vec();
    if little_endian {
        word.reverse();
    }
    word
}

/// Encodes a sequence of integers in storage order.
pub fn encode_samples(values: &[i64], word_size: usize, little_endian: bool) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&v| encode_word(v, word_size, little_endian))
        .collect()
}

/// Encodes physical values the way the WRF geogrid writer does: divide by
/// the scale, truncate toward zero, then store the integer.
pub fn encode_scaled(values: &[f64], scale: f64, word_size: usize, little_endian: bool) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&v| encode_word((v / scale) as i64, word_size, little_endian))
        .collect()
}

/// Creates integer samples with predictable values in `(z, y, x)` order.
///
/// Each value is `z * 10000 + y * 100 + x`, which makes misplaced samples
/// easy to spot. Keep `nx` and `ny` below 100.
///
/// # Example
///
/// ```
/// use test_utils::create_test_samples;
///
/// let samples = create_test_samples(3, 2, 2);
/// assert_eq!(samples.len(), 12);
/// assert_eq!(samples[1], 1);      // x=1
/// assert_eq!(samples[3], 100);    // y=1
/// assert_eq!(samples[6], 10000);  // z=1
/// ```
pub fn create_test_samples(nx: usize, ny: usize, nz: usize) -> Vec<i64> {
    let mut data = Vec::with_capacity(nx * ny * nz);
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                data.push((z * 10000 + y * 100 + x) as i64);
            }
        }
    }
    data
}

/// Creates a terrain-like height field in metres, including values below
/// sea level.
///
/// Heights range from roughly -50 m in one corner to 3000 m in the other.
pub fn create_terrain_samples(nx: usize, ny: usize) -> Vec<i64> {
    let mut data = Vec::with_capacity(nx * ny);
    for y in 0..ny {
        for x in 0..nx {
            let fx = x as f64 / nx.max(1) as f64;
            let fy = y as f64 / ny.max(1) as f64;
            data.push((-50.0 + 1500.0 * fx + 1550.0 * fy) as i64);
        }
    }
    data
}

/// Creates samples spanning the full range of a word size.
///
/// Returns the minimum, a small negative, zero, a small positive and the
/// maximum for the given width and signedness.
pub fn create_extreme_samples(word_size: usize, signed: bool) -> Vec<i64> {
    let bits = 8 * word_size as u32;
    if signed {
        let max = (1i64 << (bits - 1)) - 1;
        vec![-max - 1, -7, 0, 7, max]
    } else {
        let max = (1i64 << bits) - 1;
        vec![0, 1, 7, max / 2, max]
    }
}
