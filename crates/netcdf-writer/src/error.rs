//! Error types for NetCDF materialization.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for a single materialization step.
pub type MaterializeResult<T> = Result<T, MaterializeError>;

/// Failure of one step of writing the output file.
#[derive(Error, Debug)]
pub enum MaterializeError {
    /// The output file could not be created.
    #[error("cannot create {}: {message}", path.display())]
    Create { path: PathBuf, message: String },

    /// Error reported by the NetCDF library.
    #[error("{0}")]
    Library(#[from] netcdf::Error),

    /// A step ran without an open output file.
    #[error("no open output file")]
    NotOpen,

    /// A step referred to a variable that was never defined.
    #[error("variable '{0}' is not defined")]
    UndefinedVariable(String),

    /// Error from a non-NetCDF array store.
    #[error("{0}")]
    Backend(String),
}
