//! Spec validation before a run

use super::SimSpec;
use crate::{Error, Result};

/// Reject specs the simulation cannot honor
///
/// The oracle's two-point distribution needs a positive finite noise
/// constant, and the quantile recorder needs a non-empty population and a
/// positive interval. Everything else (extreme learning rates, beta2
/// outside the usual range) is allowed: degenerate numerics are observable
/// behavior, not configuration errors.
pub fn validate_spec(spec: &SimSpec) -> Result<()> {
    if !(spec.noise > 0.0 && spec.noise.is_finite()) {
        return Err(Error::ConfigError(format!(
            "noise must be a positive finite constant, got {}",
            spec.noise
        )));
    }
    if spec.samples == 0 {
        return Err(Error::ConfigError("samples must be at least 1".to_string()));
    }
    if spec.interval == 0 {
        return Err(Error::ConfigError("interval must be at least 1".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        assert!(validate_spec(&SimSpec::default()).is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_noise() {
        for noise in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let spec = SimSpec { noise, ..SimSpec::default() };
            assert!(validate_spec(&spec).is_err(), "accepted noise = {noise}");
        }
    }

    #[test]
    fn test_rejects_empty_population() {
        let spec = SimSpec { samples: 0, ..SimSpec::default() };
        assert!(validate_spec(&spec).is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let spec = SimSpec { interval: 0, ..SimSpec::default() };
        assert!(validate_spec(&spec).is_err());
    }

    #[test]
    fn test_fractional_noise_is_valid() {
        // k < 1 saturates the oracle but is still a legal configuration.
        let spec = SimSpec { noise: 0.5, ..SimSpec::default() };
        assert!(validate_spec(&spec).is_ok());
    }
}
