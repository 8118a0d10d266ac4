//! Quantile snapshots of the parameter population

use crate::io::SummaryRecord;
use ndarray::Array1;

/// Linear-interpolation quantile of pre-sorted values
///
/// Position q * (n - 1) interpolated between its floor and ceiling
/// neighbors. `sorted` must be non-empty.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Accumulates 25th/50th/75th percentile snapshots at a fixed interval
///
/// Created empty, appended to once per checkpoint, and finalized into a
/// [`SummaryRecord`] when the run completes.
pub struct QuantileRecorder {
    low: Vec<f64>,
    median: Vec<f64>,
    high: Vec<f64>,
    interval: usize,
}

impl QuantileRecorder {
    /// Create an empty recorder for the given logging interval
    pub fn new(interval: usize) -> Self {
        Self { low: Vec::new(), median: Vec::new(), high: Vec::new(), interval }
    }

    /// Steps between checkpoints
    #[must_use]
    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Number of checkpoints recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.median.len()
    }

    /// True if no checkpoint has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }

    /// Snapshot the quartiles of the current population
    ///
    /// NaN samples sort last, so a degenerate population drags the upper
    /// quantiles toward NaN first.
    pub fn checkpoint(&mut self, population: &Array1<f64>) {
        let mut sorted = population.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        self.low.push(quantile(&sorted, 0.25));
        self.median.push(quantile(&sorted, 0.5));
        self.high.push(quantile(&sorted, 0.75));
    }

    /// Consume the recorder into its serializable record
    pub fn finalize(self) -> SummaryRecord {
        SummaryRecord {
            low: self.low,
            median: self.median,
            high: self.high,
            interval: self.interval,
        }
    }
}
