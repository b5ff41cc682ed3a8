//! Native NetCDF output using the netcdf library.
//!
//! [`NetcdfStore`] maps each [`ArrayStore`] step onto one call of the
//! `netcdf` crate (which wraps libnetcdf/HDF5). The file is created in
//! NetCDF-4 mode and stays in define mode until
//! [`ArrayStore::end_definitions`].

use std::path::Path;
use std::sync::Once;

use tracing::debug;

use crate::error::{MaterializeError, MaterializeResult};
use crate::store::ArrayStore;

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when the
/// failure is returned to Rust and reported as a step outcome, which buries
/// the `[XX]` report lines in `HDF5-DIAG` traces.
///
/// Only needs to run once per process; [`NetcdfStore::create`] calls it
/// before the first library call.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// [`ArrayStore`] backed by a NetCDF-4 file.
///
/// The file handle is closed explicitly by [`ArrayStore::close`], or when
/// the store is dropped.
#[derive(Default)]
pub struct NetcdfStore {
    file: Option<netcdf::FileMut>,
}

impl NetcdfStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn file_mut(&mut self) -> MaterializeResult<&mut netcdf::FileMut> {
        self.file.as_mut().ok_or(MaterializeError::NotOpen)
    }

    fn variable_mut(&mut self, name: &str) -> MaterializeResult<netcdf::VariableMut<'_>> {
        self.file_mut()?
            .variable_mut(name)
            .ok_or_else(|| MaterializeError::UndefinedVariable(name.to_string()))
    }
}

impl ArrayStore for NetcdfStore {
    fn create(&mut self, path: &Path) -> MaterializeResult<()> {
        silence_hdf5_errors();

        // A file left open by an earlier run of this store is closed first.
        self.file = None;

        let file = netcdf::create_with(path, netcdf::Options::NETCDF4).map_err(|e| {
            MaterializeError::Create {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        debug!(path = %path.display(), "Created NetCDF-4 file");
        self.file = Some(file);
        Ok(())
    }

    fn define_dimension(&mut self, name: &str, len: usize) -> MaterializeResult<()> {
        self.file_mut()?.add_dimension(name, len)?;
        Ok(())
    }

    fn define_variable(&mut self, name: &str, dimensions: &[&str]) -> MaterializeResult<()> {
        self.file_mut()?.add_variable::<f32>(name, dimensions)?;
        Ok(())
    }

    fn set_compression(
        &mut self,
        variable: &str,
        deflate_level: i32,
        shuffle: bool,
    ) -> MaterializeResult<()> {
        self.variable_mut(variable)?
            .set_compression(deflate_level, shuffle)?;
        Ok(())
    }

    fn end_definitions(&mut self) -> MaterializeResult<()> {
        self.file_mut()?.enddef()?;
        Ok(())
    }

    fn write_values(&mut self, variable: &str, values: &[f32]) -> MaterializeResult<()> {
        self.variable_mut(variable)?.put_values(values, ..)?;
        Ok(())
    }

    fn close(&mut self) -> MaterializeResult<()> {
        let file = self.file.take().ok_or(MaterializeError::NotOpen)?;
        file.close()?;
        Ok(())
    }
}
