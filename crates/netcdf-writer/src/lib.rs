//! NetCDF-4 output for decoded geogrid fields.
//!
//! Writes a [`geogrid::FloatGrid`] as a single deflate-compressed `f32`
//! variable named `var`. Grids with one level become `var(y, x)`, deeper
//! grids `var(z, y, x)`; the buffer is written in its decoded order.
//!
//! Each library call is a separate step whose outcome is recorded in a
//! [`MaterializeReport`] instead of aborting on the first error.
//!
//! # Example
//!
//! ```ignore
//! use netcdf_writer::ArrayMaterializer;
//!
//! let report = ArrayMaterializer::new().write(Path::new("topo.nc"), &grid);
//! for step in report.steps() {
//!     println!("{}", step);
//! }
//! ```

pub mod error;
pub mod layout;
pub mod materializer;
pub mod native;
pub mod store;

pub use error::{MaterializeError, MaterializeResult};
pub use layout::{Dimension, OutputLayout, DEFLATE_LEVEL, VARIABLE_NAME};
pub use materializer::{ArrayMaterializer, MaterializeReport, Step, StepOutcome};
pub use native::{silence_hdf5_errors, NetcdfStore};
pub use store::ArrayStore;
