//! Build the optimizer from configuration

use super::SimSpec;
use crate::optim::{Adam, Adopt, AmsGrad, Optimizer};
use crate::{Error, Result};
use ndarray::Array1;

/// First-moment decay constant, fixed for all variants
const BETA1: f64 = 0.9;

/// Build the selected optimizer variant, owning a freshly initialized
/// parameter population
///
/// The population starts as `samples` copies of `init`; `beta2` is taken
/// from the spec and `beta1` is fixed at 0.9.
pub fn build_optimizer(spec: &SimSpec) -> Result<Optimizer> {
    let params = Array1::from_elem(spec.samples, spec.init);
    let betas = (BETA1, spec.beta2);

    match spec.algo.to_lowercase().as_str() {
        "adam" => Ok(Optimizer::Adam(Adam::new(params, betas))),
        "amsgrad" => Ok(Optimizer::AmsGrad(AmsGrad::new(params, betas))),
        "adopt" => Ok(Optimizer::Adopt(Adopt::new(params, betas))),
        name => Err(Error::ConfigError(format!(
            "Unknown optimizer: {name}. Supported: adam, amsgrad, adopt"
        ))),
    }
}
