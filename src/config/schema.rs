//! Simulation spec: every knob of a run, with defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_algo() -> String {
    "adam".to_string()
}

fn default_lr() -> f64 {
    0.01
}

fn default_beta2() -> f64 {
    0.999
}

fn default_noise() -> f64 {
    10.0
}

fn default_steps() -> usize {
    2_000_000
}

fn default_samples() -> usize {
    1000
}

fn default_interval() -> usize {
    1000
}

fn default_seed() -> u64 {
    1
}

fn default_output() -> PathBuf {
    PathBuf::from("output.json")
}

/// Complete simulation specification
///
/// Deserializable from YAML, overridable from CLI flags; every field has a
/// default, so an empty spec is a valid (if long) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSpec {
    /// Optimizer variant: adam, amsgrad, or adopt
    #[serde(default = "default_algo")]
    pub algo: String,

    /// Base learning rate
    #[serde(default = "default_lr")]
    pub lr: f64,

    /// Second-moment decay constant (beta1 is fixed at 0.9)
    #[serde(default = "default_beta2")]
    pub beta2: f64,

    /// Noise constant k controlling gradient magnitude and sparsity
    #[serde(default = "default_noise")]
    pub noise: f64,

    /// Number of iterations
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Number of independent parameter samples
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Initial parameter value, broadcast to all samples
    #[serde(default)]
    pub init: f64,

    /// Steps between quantile checkpoints
    #[serde(default = "default_interval")]
    pub interval: usize,

    /// Random seed for the gradient oracle
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Result destination
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SimSpec {
    fn default() -> Self {
        Self {
            algo: default_algo(),
            lr: default_lr(),
            beta2: default_beta2(),
            noise: default_noise(),
            steps: default_steps(),
            samples: default_samples(),
            init: 0.0,
            interval: default_interval(),
            seed: default_seed(),
            output: default_output(),
        }
    }
}
