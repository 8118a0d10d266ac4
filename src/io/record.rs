//! Serializable simulation result record

use serde::{Deserialize, Serialize};

fn default_interval() -> usize {
    1
}

/// Quantile history of one simulation run
///
/// `low`, `median`, and `high` are equal-length sequences holding the
/// 25th/50th/75th percentile of the parameter population at each
/// checkpoint. `interval` is the step spacing between checkpoints;
/// records written before the field existed omit it, and loading such a
/// record falls back to an interval of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub low: Vec<f64>,
    pub median: Vec<f64>,
    pub high: Vec<f64>,
    #[serde(default = "default_interval")]
    pub interval: usize,
}

impl SummaryRecord {
    /// Number of checkpoints
    #[must_use]
    pub fn len(&self) -> usize {
        self.median.len()
    }

    /// True if the run recorded no checkpoint
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }

    /// Step indices of the checkpoints: interval, 2·interval, …
    #[must_use]
    pub fn step_axis(&self) -> Vec<usize> {
        (1..=self.len()).map(|j| j * self.interval).collect()
    }
}
