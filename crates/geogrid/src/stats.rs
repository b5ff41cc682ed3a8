//! Per-level summary statistics.

use std::fmt;

use crate::grid::FloatGrid;

/// Mean, minimum and maximum of one z-slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceStatistics {
    /// Level number, starting at 1.
    pub index: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for SliceStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6}",
            self.index, self.mean, self.min, self.max
        )
    }
}

/// Compute statistics for every z-slice of the grid.
///
/// The running minimum and maximum start at 0.0 rather than at the first
/// sample, so an all-positive slice reports a minimum of 0.0 and an
/// all-negative slice a maximum of 0.0. Existing consumers of the report
/// depend on these values.
pub fn slice_statistics(grid: &FloatGrid) -> Vec<SliceStatistics> {
    let slice_len = grid.nx() * grid.ny();

    grid.slices()
        .enumerate()
        .map(|(k, values)| {
            let mut sum = 0.0f64;
            let mut min = 0.0f64;
            let mut max = 0.0f64;
            for &v in values {
                let v = v as f64;
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
                sum += v;
            }

            SliceStatistics {
                index: k + 1,
                mean: sum / slice_len as f64,
                min,
                max,
            }
        })
        .collect()
}
