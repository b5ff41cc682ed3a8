//! Error types for geogrid decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for geogrid operations.
pub type GeogridResult<T> = Result<T, GeogridError>;

/// Errors raised while describing or decoding a geogrid file.
#[derive(Error, Debug)]
pub enum GeogridError {
    /// The input file could not be opened or read.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input holds fewer bytes than the declared grid needs.
    #[error("{} holds {actual} bytes but the grid needs {expected}", path.display())]
    ShortInput {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// Word width other than 1, 2 or 4 bytes.
    #[error("unsupported word size: {0} bytes (expected 1, 2 or 4)")]
    UnsupportedWordSize(usize),

    /// Grid geometry or scale that cannot describe a grid.
    #[error("invalid grid specification: {0}")]
    InvalidSpec(String),
}

impl GeogridError {
    /// Create an InvalidSpec error.
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }

    /// True for the I/O class of failures (unreadable or truncated input).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::IoError(_) | Self::ShortInput { .. })
    }
}
