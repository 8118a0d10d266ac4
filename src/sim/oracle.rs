//! Synthetic noisy-gradient oracle

use ndarray::Array1;
use rand::Rng;

/// Two-point biased gradient distribution
///
/// For a noise constant k > 0, each element of a batch is drawn
/// independently as k² with probability 1/k and -k otherwise. The
/// expectation per element is (1/k)·k² + (1 - 1/k)·(-k) = 1: a constant
/// positive drift buried under heavy-tailed sign noise. Larger k makes the
/// positive samples rarer and more extreme while keeping the drift fixed.
pub struct GradientOracle {
    prob: f64,
    hit: f64,
    miss: f64,
    samples: usize,
}

impl GradientOracle {
    /// Create an oracle for the given noise constant and batch size
    pub fn new(noise: f64, samples: usize) -> Self {
        Self { prob: 1.0 / noise, hit: noise * noise, miss: -noise, samples }
    }

    /// Draw one gradient batch, consuming one uniform draw per element
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Array1<f64> {
        Array1::from_shape_fn(self.samples, |_| {
            if rng.random::<f64>() < self.prob {
                self.hit
            } else {
                self.miss
            }
        })
    }

    /// Batch size of every draw
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}
