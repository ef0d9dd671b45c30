//! Gaussian chi-square approximations to the weighted-MC bin likelihood.
//!
//! Cheap alternatives to the marginalized forms in [`crate::weighted`]:
//! the bin content is treated as Gaussian around the weight sum. The plain
//! form uses the Poisson variance `μ`; the Pearson form widens it by the
//! Monte Carlo contribution `μ₂ = Σw²`. Every input has a defined value, so
//! these are infallible.

use crate::weighted::WeightStats;

/// Chi-square log-likelihood `-(μ - k)² / (2μ)`; `0` for a non-positive
/// expectation.
pub fn logl(k: u64, weight_sum: f64) -> f64 {
    if weight_sum > 0.0 {
        let diff = weight_sum - k as f64;
        -(diff * diff) / (2.0 * weight_sum)
    } else {
        0.0
    }
}

/// [`logl`] from raw per-event weights.
pub fn logl_from_weights(k: u64, weights: &[f64]) -> f64 {
    logl(k, WeightStats::from_weights(weights).sum)
}

/// Pearson chi-square log-likelihood `-(μ - k)² / (2(μ + μ₂))`, widening the
/// variance by the Monte Carlo term; `0` for a non-positive expectation.
pub fn pearson_logl(k: u64, weight_sum: f64, weight_sq_sum: f64) -> f64 {
    if weight_sum > 0.0 {
        let diff = weight_sum - k as f64;
        -(diff * diff) / (2.0 * (weight_sum + weight_sq_sum))
    } else {
        0.0
    }
}

/// [`pearson_logl`] from raw per-event weights.
pub fn pearson_logl_from_weights(k: u64, weights: &[f64]) -> f64 {
    let stats = WeightStats::from_weights(weights);
    pearson_logl(k, stats.sum, stats.sum_sq)
}
