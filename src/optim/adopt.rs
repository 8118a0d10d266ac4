//! ADOPT optimizer (normalized-gradient first moment with a warm-up step)

use ndarray::Array1;

/// ADOPT optimizer
///
/// Two regimes keyed on the step counter:
///
/// - Step 0 warms up the second moment only: `v += g²` (no decay, no first
///   moment update, no parameter update).
/// - Every later step normalizes the gradient by the *previous* second
///   moment before it enters the first moment, updates the parameters, and
///   only then refreshes the second moment:
///
///   m_t = β1 * m_{t-1} + (1 - β1) * g / √v_{t-1}
///   θ_t = θ_{t-1} - lr * m_t
///   v_t = β2 * v_{t-1} + (1 - β2) * g²
///
/// The normalize-then-refresh ordering is part of the update rule, not an
/// implementation detail: folding g² into v before the normalization would
/// change the trajectory.
#[derive(Debug)]
pub struct Adopt {
    params: Array1<f64>,
    betas: (f64, f64),
    step: u64,
    exp_avg: Array1<f64>,
    exp_avg_sq: Array1<f64>,
}

impl Adopt {
    /// Create a new ADOPT optimizer owning `params`
    pub fn new(params: Array1<f64>, betas: (f64, f64)) -> Self {
        let exp_avg = Array1::zeros(params.len());
        let exp_avg_sq = Array1::zeros(params.len());
        Self { params, betas, step: 0, exp_avg, exp_avg_sq }
    }

    /// Apply one update from a gradient batch at the given learning rate
    ///
    /// The step counter advances on every call, the warm-up call included.
    pub fn update(&mut self, grads: &Array1<f64>, lr: f64) {
        if self.step == 0 {
            self.exp_avg_sq.zip_mut_with(grads, |v, &g| *v += g * g);
        } else {
            let (beta1, beta2) = self.betas;

            // Normalize by the second moment as of the previous step.
            let normalized = grads / &self.exp_avg_sq.mapv(f64::sqrt);
            self.exp_avg *= beta1;
            self.exp_avg.scaled_add(1.0 - beta1, &normalized);

            self.params.scaled_add(-lr, &self.exp_avg);

            self.exp_avg_sq *= beta2;
            self.exp_avg_sq.zip_mut_with(grads, |v, &g| *v += (1.0 - beta2) * g * g);
        }

        self.step += 1;
    }

    /// Number of calls applied so far, warm-up included
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Current parameter population
    pub fn params(&self) -> &Array1<f64> {
        &self.params
    }

    /// Mutable parameter population (used by the driver's clamp step)
    pub fn params_mut(&mut self) -> &mut Array1<f64> {
        &mut self.params
    }

    /// Second moment estimate
    pub fn exp_avg_sq(&self) -> &Array1<f64> {
        &self.exp_avg_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn test_warmup_touches_only_second_moment() {
        let mut opt = Adopt::new(Array1::from_elem(3, 0.5), (0.9, 0.999));
        opt.update(&arr1(&[4.0, -2.0, 1.0]), 0.1);

        assert!(opt.params().iter().all(|&p| p == 0.5));
        assert_abs_diff_eq!(opt.exp_avg_sq()[0], 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(opt.exp_avg_sq()[1], 4.0, epsilon = 1e-12);
        assert_eq!(opt.step_count(), 1);
    }

    #[test]
    fn test_second_step_normalizes_by_warmup_moment() {
        // Warm up with g0 = 2 (v = 4), then update with g1 = 3:
        // m = (1-β1) * 3 / √4 = 0.15, so θ moves by -lr * 0.15.
        let mut opt = Adopt::new(Array1::zeros(1), (0.9, 0.999));
        opt.update(&arr1(&[2.0]), 0.1);
        opt.update(&arr1(&[3.0]), 0.1);

        assert_abs_diff_eq!(opt.params()[0], -0.1 * 0.15, epsilon = 1e-12);
        // v refreshed after the normalization: β2*4 + (1-β2)*9
        assert_abs_diff_eq!(opt.exp_avg_sq()[0], 0.999 * 4.0 + 0.001 * 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_refresh_ordering_is_previous_moment() {
        // If v were refreshed before the normalization, the second-step
        // update would divide by √(β2*4 + (1-β2)*9) instead of √4.
        let mut opt = Adopt::new(Array1::zeros(1), (0.9, 0.999));
        opt.update(&arr1(&[2.0]), 1.0);
        opt.update(&arr1(&[3.0]), 1.0);

        let wrong = -(0.1 * 3.0 / (0.999 * 4.0 + 0.001 * 9.0_f64).sqrt());
        assert!((opt.params()[0] - wrong).abs() > 1e-6);
        assert_abs_diff_eq!(opt.params()[0], -0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_counter_advances_every_call() {
        let mut opt = Adopt::new(Array1::zeros(1), (0.9, 0.999));
        for i in 1..=4u64 {
            opt.update(&arr1(&[1.0]), 0.01);
            assert_eq!(opt.step_count(), i);
        }
    }
}
