//! The conversion pipeline: decode, materialize, summarize.

use geogrid::{slice_statistics, SliceStatistics};
use netcdf_writer::{ArrayMaterializer, ArrayStore, MaterializeReport};
use tracing::{info, warn};

use crate::config::ConvertConfig;
use crate::error::ConvertError;

/// Everything a finished conversion has to report.
#[derive(Debug)]
pub struct ConversionSummary {
    /// Outcome of each NetCDF step.
    pub report: MaterializeReport,
    /// Statistics for each level of the decoded grid.
    pub statistics: Vec<SliceStatistics>,
}

impl ConversionSummary {
    /// True when the output file was written completely.
    pub fn succeeded(&self) -> bool {
        self.report.succeeded()
    }

    /// Console report: one line per NetCDF step, then one per level.
    pub fn lines(&self) -> Vec<String> {
        self.report
            .steps()
            .iter()
            .map(|s| s.to_string())
            .chain(self.statistics.iter().map(|s| s.to_string()))
            .collect()
    }
}

/// Convert `config.input` to a NetCDF-4 file at `config.output`.
pub fn run(config: &ConvertConfig) -> Result<ConversionSummary, ConvertError> {
    run_with(config, ArrayMaterializer::new())
}

/// Convert using a caller-supplied materializer.
///
/// Decoding failures abort before the output is touched. Materialization
/// failures do not; they are reported in the summary.
pub fn run_with<S: ArrayStore>(
    config: &ConvertConfig,
    mut materializer: ArrayMaterializer<S>,
) -> Result<ConversionSummary, ConvertError> {
    info!(input = %config.input.display(), "Decoding geogrid");
    let grid = geogrid::decode(&config.input, &config.spec)?;
    info!(points = grid.as_slice().len(), levels = grid.nz(), "Decoded geogrid");

    let report = materializer.write(&config.output, &grid);
    if report.succeeded() {
        info!(output = %config.output.display(), "Wrote NetCDF file");
    } else {
        warn!(
            output = %config.output.display(),
            failed_steps = report.failures().count(),
            "NetCDF output incomplete"
        );
    }

    let statistics = slice_statistics(&grid);

    Ok(ConversionSummary { report, statistics })
}
