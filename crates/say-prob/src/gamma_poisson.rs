//! Poisson marginalized over a Gamma-distributed rate.
//!
//! With a rate prior `λ ~ Gamma(alpha, rate = beta)`, the marginal
//! `∫ Poisson(k; λ) dGamma(λ)` has the negative-binomial-form closed log
//! density
//!
//! ```text
//! alpha·ln(beta) + lnΓ(k+alpha) − lnΓ(k+1) − (k+alpha)·ln(1+beta) − lnΓ(alpha)
//! ```
//!
//! The five terms can differ by many orders of magnitude with mixed sign, so
//! they are combined with compensated summation, and `ln(1+beta)` goes
//! through the stable primitive rather than a direct logarithm.

use say_core::{Error, Result, SpecialFunctions};

use crate::math::{ln_1p_stable, sum_compensated};
use crate::special::StatrsFunctions;

/// Log-PMF of the Gamma-prior Poisson marginal at count `k`.
///
/// Parameterization:
/// - `alpha > 0` (Gamma shape)
/// - `beta > 0` (Gamma rate)
pub fn logpmf(k: u64, alpha: f64, beta: f64) -> Result<f64> {
    logpmf_with(&StatrsFunctions, k, alpha, beta)
}

/// Same as [`logpmf`], with an explicit special-function backend.
///
/// A `beta <= -1` reaching the stable `ln(1+x)` means the rate parameter was
/// mis-derived upstream; the resulting domain error propagates uncaught.
pub fn logpmf_with<S: SpecialFunctions>(sf: &S, k: u64, alpha: f64, beta: f64) -> Result<f64> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(Error::Validation(format!(
            "alpha must be finite and > 0, got {}",
            alpha
        )));
    }
    if !beta.is_finite() || beta <= 0.0 {
        return Err(Error::Validation(format!("beta must be finite and > 0, got {}", beta)));
    }

    let kf = k as f64;
    // Term order is part of the cancellation contract; do not reorder.
    let terms = [
        alpha * beta.ln(),
        sf.ln_gamma(kf + alpha),
        -sf.ln_gamma(kf + 1.0),
        -(kf + alpha) * ln_1p_stable(beta)?,
        -sf.ln_gamma(alpha),
    ];
    Ok(sum_compensated(terms))
}
