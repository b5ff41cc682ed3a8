//! Grid geometry, sample encoding and the decoded float grid.

use std::fmt;

use crate::error::{GeogridError, GeogridResult};

/// Number of bytes per stored sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    One,
    Two,
    Four,
}

impl WordSize {
    /// Width of one word in bytes.
    pub fn bytes(self) -> usize {
        match self {
            WordSize::One => 1,
            WordSize::Two => 2,
            WordSize::Four => 4,
        }
    }
}

impl TryFrom<usize> for WordSize {
    type Error = GeogridError;

    fn try_from(bytes: usize) -> GeogridResult<Self> {
        match bytes {
            1 => Ok(WordSize::One),
            2 => Ok(WordSize::Two),
            4 => Ok(WordSize::Four),
            other => Err(GeogridError::UnsupportedWordSize(other)),
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Byte order of the stored words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Most significant byte first (WRF default).
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => f.write_str("big"),
            Endianness::Little => f.write_str("little"),
        }
    }
}

/// Geometry and encoding of a geogrid file.
///
/// The file stores `nx * ny * nz` words with x varying fastest, then y,
/// then z. Nothing in the file describes this layout, so every field has to
/// come from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Number of points in X
    pub nx: usize,
    /// Number of points in Y
    pub ny: usize,
    /// Number of levels (1 for a 2-D field)
    pub nz: usize,
    /// Bytes per stored word
    pub word_size: WordSize,
    /// Words are two's-complement signed integers
    pub signed: bool,
    /// Byte order of each word
    pub endianness: Endianness,
    /// Factor applied to every decoded integer
    pub scale: f64,
}

impl GridSpec {
    /// Build a validated grid specification.
    ///
    /// Fails with [`GeogridError::UnsupportedWordSize`] for word sizes other
    /// than 1, 2 or 4, and with [`GeogridError::InvalidSpec`] for empty
    /// extents, a non-positive scale, or a byte size that overflows `u64`.
    pub fn new(
        nx: usize,
        ny: usize,
        nz: usize,
        word_size: usize,
        signed: bool,
        endianness: Endianness,
        scale: f64,
    ) -> GeogridResult<Self> {
        let word_size = WordSize::try_from(word_size)?;

        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GeogridError::invalid_spec(format!(
                "grid extents must be positive, got {}x{}x{}",
                nx, ny, nz
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeogridError::invalid_spec(format!(
                "scale must be a positive number, got {}",
                scale
            )));
        }

        let spec = Self {
            nx,
            ny,
            nz,
            word_size,
            signed,
            endianness,
            scale,
        };
        spec.checked_byte_len()?;
        Ok(spec)
    }

    /// Number of samples in the grid.
    pub fn num_points(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of samples in one z-slice.
    pub fn slice_len(&self) -> usize {
        self.nx * self.ny
    }

    /// Bytes the input must hold at minimum.
    pub fn byte_len(&self) -> u64 {
        // Validated in `new`; a hand-built spec that overflows saturates.
        self.checked_byte_len().unwrap_or(u64::MAX)
    }

    /// True when the grid has a single level and is written as 2-D.
    pub fn is_2d(&self) -> bool {
        self.nz == 1
    }

    fn checked_byte_len(&self) -> GeogridResult<u64> {
        [self.ny, self.nz, self.word_size.bytes()]
            .iter()
            .try_fold(self.nx as u64, |acc, &n| acc.checked_mul(n as u64))
            .filter(|&len| usize::try_from(len).is_ok())
            .ok_or_else(|| {
                GeogridError::invalid_spec(format!(
                    "grid {}x{}x{} of {}-byte words is too large",
                    self.nx, self.ny, self.nz, self.word_size
                ))
            })
    }
}

/// Dense grid of decoded values indexed as `[z][y][x]`.
///
/// The linear offset of `(x, y, z)` is `z * nx * ny + y * nx + x`, which is
/// also the order of the words in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatGrid {
    nx: usize,
    ny: usize,
    nz: usize,
    data: Vec<f32>,
}

impl FloatGrid {
    /// Wrap an existing buffer. Returns `None` if its length is not `nx * ny * nz`.
    pub fn from_vec(nx: usize, ny: usize, nz: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != nx * ny * nz {
            return None;
        }
        Some(Self { nx, ny, nz, data })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Value at `(x, y, z)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.nx || y >= self.ny || z >= self.nz {
            return None;
        }
        self.data.get(z * self.nx * self.ny + y * self.nx + x).copied()
    }

    /// All values of level `z`, or `None` if `z` is out of range.
    pub fn slice(&self, z: usize) -> Option<&[f32]> {
        let len = self.nx * self.ny;
        self.data.get(z * len..(z + 1) * len)
    }

    /// Iterate over the z-slices from bottom to top.
    pub fn slices(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact((self.nx * self.ny).max(1))
    }

    /// The whole buffer in `(z, y, x)` order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
