//! AMSGrad optimizer (Adam with a running-maximum second moment)

use ndarray::Array1;

/// AMSGrad optimizer
///
/// Identical moment updates to [`Adam`](super::Adam), but the denominator
/// is the elementwise running maximum of the second moment rather than the
/// second moment itself:
///
/// vmax_t = max(vmax_{t-1}, v_t)
/// θ_t = θ_{t-1} - lr * m_t / √vmax_t
///
/// The maximum is monotone, so the effective per-element step size never
/// grows back after a large gradient has been seen. Like Adam here, no
/// bias correction and no denominator epsilon.
#[derive(Debug)]
pub struct AmsGrad {
    params: Array1<f64>,
    betas: (f64, f64),
    step: u64,
    exp_avg: Array1<f64>,
    exp_avg_sq: Array1<f64>,
    max_exp_avg_sq: Array1<f64>,
}

impl AmsGrad {
    /// Create a new AMSGrad optimizer owning `params`
    pub fn new(params: Array1<f64>, betas: (f64, f64)) -> Self {
        let exp_avg = Array1::zeros(params.len());
        let exp_avg_sq = Array1::zeros(params.len());
        let max_exp_avg_sq = Array1::zeros(params.len());
        Self { params, betas, step: 0, exp_avg, exp_avg_sq, max_exp_avg_sq }
    }

    /// Apply one update from a gradient batch at the given learning rate
    pub fn update(&mut self, grads: &Array1<f64>, lr: f64) {
        self.step += 1;
        let (beta1, beta2) = self.betas;

        self.exp_avg *= beta1;
        self.exp_avg.scaled_add(1.0 - beta1, grads);

        self.exp_avg_sq *= beta2;
        self.exp_avg_sq.zip_mut_with(grads, |v, &g| *v += (1.0 - beta2) * g * g);

        self.max_exp_avg_sq.zip_mut_with(&self.exp_avg_sq, |m, &v| *m = m.max(v));

        let update = &self.exp_avg / &self.max_exp_avg_sq.mapv(f64::sqrt) * lr;
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

    /// Running elementwise maximum of the second moment
    pub fn max_exp_avg_sq(&self) -> &Array1<f64> {
        &self.max_exp_avg_sq
    }
}
