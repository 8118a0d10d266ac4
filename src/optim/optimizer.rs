//! Closed optimizer variant set with a uniform update contract

use super::{Adam, Adopt, AmsGrad};
use ndarray::Array1;

/// The optimizer variants under comparison
///
/// A closed enum rather than trait objects: the variant set is fixed and
/// the simulation selects exactly one per run, so dispatch stays a match.
#[derive(Debug)]
pub enum Optimizer {
    Adam(Adam),
    AmsGrad(AmsGrad),
    Adopt(Adopt),
}

impl Optimizer {
    /// Apply one update from a gradient batch at the given learning rate
    pub fn update(&mut self, grads: &Array1<f64>, lr: f64) {
        match self {
            Optimizer::Adam(opt) => opt.update(grads, lr),
            Optimizer::AmsGrad(opt) => opt.update(grads, lr),
            Optimizer::Adopt(opt) => opt.update(grads, lr),
        }
    }

    /// Current parameter population
    pub fn params(&self) -> &Array1<f64> {
        match self {
            Optimizer::Adam(opt) => opt.params(),
            Optimizer::AmsGrad(opt) => opt.params(),
            Optimizer::Adopt(opt) => opt.params(),
        }
    }

    /// Mutable parameter population (used by the driver's clamp step)
    pub fn params_mut(&mut self) -> &mut Array1<f64> {
        match self {
            Optimizer::Adam(opt) => opt.params_mut(),
            Optimizer::AmsGrad(opt) => opt.params_mut(),
            Optimizer::Adopt(opt) => opt.params_mut(),
        }
    }

    /// Number of updates applied so far
    #[must_use]
    pub fn step_count(&self) -> u64 {
        match self {
            Optimizer::Adam(opt) => opt.step_count(),
            Optimizer::AmsGrad(opt) => opt.step_count(),
            Optimizer::Adopt(opt) => opt.step_count(),
        }
    }

    /// Variant name as accepted by configuration
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Optimizer::Adam(_) => "adam",
            Optimizer::AmsGrad(_) => "amsgrad",
            Optimizer::Adopt(_) => "adopt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_dispatch_matches_inner() {
        let mut wrapped = Optimizer::Adam(Adam::new(Array1::zeros(2), (0.9, 0.999)));
        let mut inner = Adam::new(Array1::zeros(2), (0.9, 0.999));

        let g = arr1(&[1.0, -1.0]);
        wrapped.update(&g, 0.01);
        inner.update(&g, 0.01);

        assert_eq!(wrapped.params(), inner.params());
        assert_eq!(wrapped.step_count(), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(Optimizer::Adam(Adam::new(Array1::zeros(1), (0.9, 0.999))).name(), "adam");
        assert_eq!(
            Optimizer::AmsGrad(AmsGrad::new(Array1::zeros(1), (0.9, 0.999))).name(),
            "amsgrad"
        );
        assert_eq!(Optimizer::Adopt(Adopt::new(Array1::zeros(1), (0.9, 0.999))).name(), "adopt");
    }

    #[test]
    fn test_params_mut_edits_are_visible() {
        let mut opt = Optimizer::Adopt(Adopt::new(Array1::zeros(1), (0.9, 0.999)));
        opt.update(&arr1(&[2.0]), 0.1);
        opt.params_mut()[0] = 0.25;
        assert_eq!(opt.params()[0], 0.25);
    }
}
