//! Error types for the converter.

use geogrid::GeogridError;
use thiserror::Error;

/// Missing or malformed options, detected before any file is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing input file (--input/-i), see --help")]
    MissingInput,

    #[error("missing output file (--output/-o), see --help")]
    MissingOutput,
}

/// Errors that stop a conversion.
///
/// Failures while writing the output are not errors here; they are part of
/// the materialization report.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GeogridError),
}
