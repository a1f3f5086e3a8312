//! Sampling grids for plots and tables.

use log::warn;

/// Upper bound on the number of samples [`range_with_step`] produces.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Convert nanometres to micrometres.
pub fn nm_to_micron(nm: f64) -> f64 {
    nm / 1000.0
}

/// Samples from `start` to `end` inclusive, `step` apart.
///
/// The last sample is `end` itself when the range is a whole number of
/// steps. A non-positive or non-finite step, a non-finite bound, or
/// `end < start` yields just `[start]`. At most [`MAX_SAMPLES`] samples
/// are returned.
pub fn range_with_step(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite()) || end < start {
        return vec![start];
    }
    // Tolerate rounding in (end - start) / step.
    let steps = ((end - start) / step + 1e-9).floor();
    let count = if steps.is_finite() && steps < MAX_SAMPLES as f64 {
        steps as usize + 1
    } else {
        warn!(
            "Range {}..{} step {} truncated to {} samples",
            start, end, step, MAX_SAMPLES
        );
        MAX_SAMPLES
    };
    (0..count).map(|i| start + step * i as f64).collect()
}
