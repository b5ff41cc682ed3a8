//! Decoder for WRF geogrid files.
//!
//! A geogrid file is an ENVI-style flat binary array: `nx * ny * nz`
//! fixed-width integers with no header. Word width, signedness, byte order
//! and scale factor are supplied by the caller through a [`GridSpec`]; this
//! crate turns the bytes into a dense [`FloatGrid`] of `f32` values.
//!
//! # Example
//!
//! ```ignore
//! use geogrid::{decode, slice_statistics, Endianness, GridSpec};
//!
//! let spec = GridSpec::new(1200, 1200, 1, 2, true, Endianness::Big, 1.0)?;
//! let grid = decode("topo_30s/00001-01200.00001-01200", &spec)?;
//!
//! for stats in slice_statistics(&grid) {
//!     println!("{}", stats);
//! }
//! ```

pub mod decoder;
pub mod error;
pub mod grid;
pub mod sample;
pub mod stats;

pub use decoder::{decode, decode_bytes};
pub use error::{GeogridError, GeogridResult};
pub use grid::{Endianness, FloatGrid, GridSpec, WordSize};
pub use sample::{decode_scaled, decode_word};
pub use stats::{slice_statistics, SliceStatistics};
