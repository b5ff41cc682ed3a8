//! WRF geogrid to NetCDF-4 converter.
//!
//! Provides an independent check on WRF static input: a geogrid tile is
//! decoded with explicitly supplied geometry and encoding, written as a
//! compressed NetCDF-4 variable, and summarized level by level.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{Args, ConvertConfig};
pub use error::{ConfigError, ConvertError};
pub use pipeline::{run, run_with, ConversionSummary};
