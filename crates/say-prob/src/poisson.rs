//! Poisson distribution utilities.

use say_core::{Error, Result, SpecialFunctions};

use crate::special::StatrsFunctions;

/// Log-PMF of a Poisson distribution with mean `lambda` at count `k`.
///
/// `lambda == 0` is the empty-expectation limit: a certain non-event for
/// `k == 0`, impossible otherwise.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    logpmf_with(&StatrsFunctions, k, lambda)
}

/// Same as [`logpmf`], with an explicit special-function backend.
pub fn logpmf_with<S: SpecialFunctions>(sf: &S, k: u64, lambda: f64) -> Result<f64> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::Validation(format!("lambda must be finite and >= 0, got {}", lambda)));
    }
    if lambda == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }

    let kf = k as f64;
    Ok(kf * lambda.ln() - lambda - sf.ln_gamma(kf + 1.0))
}
