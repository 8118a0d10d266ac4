//! Adam optimizer (exponential moving averages of gradient and squared gradient)

use ndarray::Array1;

/// Adam optimizer over a population of independent scalar parameters
///
/// Maintains exponential moving averages of the gradient (first moment) and
/// of the squared gradient (second moment):
///
/// m_t = β1 * m_{t-1} + (1 - β1) * g
/// v_t = β2 * v_{t-1} + (1 - β2) * g²
/// θ_t = θ_{t-1} - lr * m_t / √v_t
///
/// Applies neither bias correction nor a stability epsilon in the
/// denominator: division by a near-zero second moment in early steps
/// produces large or non-finite updates, and that is part of the update
/// rule under study.
#[derive(Debug)]
pub struct Adam {
    params: Array1<f64>,
    betas: (f64, f64),
    step: u64,
    exp_avg: Array1<f64>,
    exp_avg_sq: Array1<f64>,
}

impl Adam {
    /// Create a new Adam optimizer owning `params`
    pub fn new(params: Array1<f64>, betas: (f64, f64)) -> Self {
        let exp_avg = Array1::zeros(params.len());
        let exp_avg_sq = Array1::zeros(params.len());
        Self { params, betas, step: 0, exp_avg, exp_avg_sq }
    }

    /// Apply one update from a gradient batch at the given learning rate
    pub fn update(&mut self, grads: &Array1<f64>, lr: f64) {
        self.step += 1;
        let (beta1, beta2) = self.betas;

        self.exp_avg *= beta1;
        self.exp_avg.scaled_add(1.0 - beta1, grads);

        self.exp_avg_sq *= beta2;
        self.exp_avg_sq.zip_mut_with(grads, |v, &g| *v += (1.0 - beta2) * g * g);

        let update = &self.exp_avg / &self.exp_avg_sq.mapv(f64::sqrt) * lr;
        self.params -= &update;
    }

    /// Number of updates applied so far
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
