//! The array-file operations the materializer depends on.

use std::path::Path;

use crate::error::MaterializeResult;

/// Primitive operations of an array-file library.
///
/// Each call is one independently fallible step. Implementations must keep
/// accepting calls after a failure and report their own error (for example
/// [`MaterializeError::NotOpen`](crate::MaterializeError::NotOpen)) when a
/// step cannot run because an earlier one failed.
pub trait ArrayStore {
    /// Create the output file, replacing any existing file at `path`.
    fn create(&mut self, path: &Path) -> MaterializeResult<()>;

    /// Declare a dimension.
    fn define_dimension(&mut self, name: &str, len: usize) -> MaterializeResult<()>;

    /// Declare an `f32` variable over the named dimensions, slowest first.
    fn define_variable(&mut self, name: &str, dimensions: &[&str]) -> MaterializeResult<()>;

    /// Enable deflate compression on a variable.
    fn set_compression(
        &mut self,
        variable: &str,
        deflate_level: i32,
        shuffle: bool,
    ) -> MaterializeResult<()>;

    /// Leave define mode so data can be written.
    fn end_definitions(&mut self) -> MaterializeResult<()>;

    /// Write the full contents of a variable in one call.
    fn write_values(&mut self, variable: &str, values: &[f32]) -> MaterializeResult<()>;

    /// Flush and close the output file.
    fn close(&mut self) -> MaterializeResult<()>;
}
