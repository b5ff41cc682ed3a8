//! Writing a [`FloatGrid`] as a compressed array, one reported step at a time.

use std::fmt;
use std::path::{Path, PathBuf};

use geogrid::FloatGrid;
use tracing::{debug, warn};

use crate::error::MaterializeResult;
use crate::layout::OutputLayout;
use crate::native::NetcdfStore;
use crate::store::ArrayStore;

/// One operation against the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Create,
    DefineDimension { name: String, len: usize },
    DefineVariable { name: String, dimensions: Vec<String> },
    SetCompression { deflate_level: i32, shuffle: bool },
    EndDefinitions,
    WriteData { values: usize },
    Close,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Create => f.write_str("create file"),
            Step::DefineDimension { name, len } => write!(f, "define dimension {} = {}", name, len),
            Step::DefineVariable { name, dimensions } => {
                write!(f, "define variable {}({})", name, dimensions.join(", "))
            }
            Step::SetCompression {
                deflate_level,
                shuffle,
            } => write!(
                f,
                "set compression (deflate {}, {})",
                deflate_level,
                if *shuffle { "shuffle" } else { "no shuffle" }
            ),
            Step::EndDefinitions => f.write_str("end definitions"),
            Step::WriteData { values } => write!(f, "write {} values", values),
            Step::Close => f.write_str("close file"),
        }
    }
}

/// A step together with its result.
#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub result: MaterializeResult<()>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Formats as a console report line: `[OK] step` or `[XX] step: error`.
impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "[OK] {}", self.step),
            Err(e) => write!(f, "[XX] {}: {}", self.step, e),
        }
    }
}

/// Outcome of every step of one materialization.
#[derive(Debug)]
pub struct MaterializeReport {
    path: PathBuf,
    steps: Vec<StepOutcome>,
}

impl MaterializeReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, step: Step, result: MaterializeResult<()>) {
        match &result {
            Ok(()) => debug!(step = %step, "NetCDF step succeeded"),
            Err(e) => warn!(step = %step, error = %e, "NetCDF step failed"),
        }
        self.steps.push(StepOutcome { step, result });
    }

    /// Output path the report refers to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All steps in the order they ran.
    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// True when every step succeeded.
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(StepOutcome::is_ok)
    }

    /// The steps that failed.
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.is_ok())
    }
}

/// Writes decoded grids through an [`ArrayStore`].
///
/// Every step is attempted even when an earlier one failed, so the report
/// shows everything the library had to say about the output. The data in
/// the file is incomplete or absent whenever [`MaterializeReport::succeeded`]
/// is false.
pub struct ArrayMaterializer<S = NetcdfStore> {
    store: S,
}

impl ArrayMaterializer<NetcdfStore> {
    /// Materializer writing NetCDF-4 files.
    pub fn new() -> Self {
        Self::with_store(NetcdfStore::new())
    }
}

impl Default for ArrayMaterializer<NetcdfStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ArrayStore> ArrayMaterializer<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write `grid` to `path` as the variable `var`.
    pub fn write(&mut self, path: &Path, grid: &FloatGrid) -> MaterializeReport {
        let layout = OutputLayout::for_grid(grid);
        let dimensions = layout.dimension_names();
        let mut report = MaterializeReport::new(path);

        report.record(Step::Create, self.store.create(path));

        for dim in &layout.dimensions {
            report.record(
                Step::DefineDimension {
                    name: dim.name.to_string(),
                    len: dim.len,
                },
                self.store.define_dimension(dim.name, dim.len),
            );
        }

        report.record(
            Step::DefineVariable {
                name: layout.variable.to_string(),
                dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            },
            self.store.define_variable(layout.variable, &dimensions),
        );

        report.record(
            Step::SetCompression {
                deflate_level: layout.deflate_level,
                shuffle: layout.shuffle,
            },
            self.store
                .set_compression(layout.variable, layout.deflate_level, layout.shuffle),
        );

        report.record(Step::EndDefinitions, self.store.end_definitions());

        report.record(
            Step::WriteData {
                values: grid.as_slice().len(),
            },
            self.store.write_values(layout.variable, grid.as_slice()),
        );

        report.record(Step::Close, self.store.close());

        report
    }
}
