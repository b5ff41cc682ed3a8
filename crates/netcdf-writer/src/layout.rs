//! Dimension and variable layout of the output file.

use geogrid::{FloatGrid, GridSpec};

/// Name of the single data variable.
pub const VARIABLE_NAME: &str = "var";

/// Deflate level applied to the data variable. Not configurable.
pub const DEFLATE_LEVEL: i32 = 4;

/// One declared dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub name: &'static str,
    pub len: usize,
}

/// Layout of the output file.
///
/// Dimensions are declared slowest-varying first, so `x` is always last and
/// the decoded buffer can be written without transposition. A grid with a
/// single level is written as 2-D `(y, x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dimensions: Vec<Dimension>,
    pub variable: &'static str,
    pub deflate_level: i32,
    pub shuffle: bool,
}

impl OutputLayout {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        let mut dimensions = Vec::with_capacity(3);
        if nz > 1 {
            dimensions.push(Dimension { name: "z", len: nz });
        }
        dimensions.push(Dimension { name: "y", len: ny });
        dimensions.push(Dimension { name: "x", len: nx });

        Self {
            dimensions,
            variable: VARIABLE_NAME,
            deflate_level: DEFLATE_LEVEL,
            shuffle: false,
        }
    }

    pub fn from_spec(spec: &GridSpec) -> Self {
        Self::new(spec.nx, spec.ny, spec.nz)
    }

    pub fn for_grid(grid: &FloatGrid) -> Self {
        Self::new(grid.nx(), grid.ny(), grid.nz())
    }

    /// Dimension names in declaration order.
    pub fn dimension_names(&self) -> Vec<&'static str> {
        self.dimensions.iter().map(|d| d.name).collect()
    }

    /// Variable shape in declaration order.
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|d| d.len).collect()
    }
}
