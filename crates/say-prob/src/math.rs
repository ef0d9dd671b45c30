//! Small numerically-stable math utilities used across likelihood code.

use say_core::{Error, Result};

/// Magnitude below which `ln_1p_stable` switches to its Taylor expansion.
const LN_1P_TAYLOR_CUTOFF: f64 = 1e-4;

/// Stable `ln(1 + x)`.
///
/// For `|x| > 1e-4` the direct logarithm is well conditioned. Below that,
/// forming `1 + x` first cancels catastrophically, so the 4th-order Taylor
/// expansion `x - x²/2 + x³/3 - x⁴/4` is used instead; the truncated term is
/// `x⁵/5`, under `1e-16` relative at the cutoff. The cutoff and order are a
/// frozen accuracy contract for small-rate kernel arguments.
///
/// Errors with [`Error::Domain`] for `x <= -1`, where `1 + x` leaves the
/// logarithm's domain.
pub fn ln_1p_stable(x: f64) -> Result<f64> {
    if x <= -1.0 {
        return Err(Error::Domain(format!("ln(1+x) requires x > -1, got {}", x)));
    }
    if x.abs() > LN_1P_TAYLOR_CUTOFF {
        return Ok((1.0 + x).ln());
    }
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    Ok(x - x2 / 2.0 + x3 / 3.0 - x4 / 4.0)
}

/// Compensated (Kahan–Babuška–Neumaier) summation, strictly in input order.
///
/// The running compensation recovers low-order bits lost when terms of mixed
/// sign and very different magnitude meet the partial sum. Callers construct
/// their terms so that cancellation happens in a particular order; no
/// reordering or sorting is applied.
pub fn sum_compensated<I>(terms: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut comp = 0.0_f64;
    for t in terms {
        let new_sum = sum + t;
        if sum.abs() >= t.abs() {
            comp += (sum - new_sum) + t;
        } else {
            comp += (t - new_sum) + sum;
        }
        sum = new_sum;
    }
    sum + comp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln_1p_matches_direct_log_above_cutoff() {
        let xs: [f64; 8] = [-0.9, -0.5, -0.001, 0.001, 0.5, 1.0, 10.0, 1e6];
        for x in xs {
            let direct = (1.0 + x).ln();
            let stable = ln_1p_stable(x).unwrap();
            let rel = ((stable - direct) / direct.abs().max(f64::MIN_POSITIVE)).abs();
            assert!(rel < 1e-12, "x={}: {} vs {}", x, stable, direct);
        }
    }

    #[test]
    fn test_ln_1p_accurate_near_zero() {
        // std's ln_1p is the reference where the naive form loses precision.
        let xs: [f64; 6] = [1e-4, -1e-4, 1e-8, -1e-8, 1e-12, -1e-12];
        for x in xs {
            let reference = x.ln_1p();
            let stable = ln_1p_stable(x).unwrap();
            let rel = ((stable - reference) / reference).abs();
            assert!(rel < 1e-10, "x={}: {} vs {}", x, stable, reference);
        }
    }

    #[test]
    fn test_ln_1p_zero() {
        assert_eq!(ln_1p_stable(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_ln_1p_domain_error() {
        assert!(ln_1p_stable(-1.0).is_err());
        assert!(ln_1p_stable(-2.0).is_err());
        assert!(ln_1p_stable(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_sum_compensated_recovers_cancelled_low_bits() {
        // Naive left-to-right summation loses the 1.0s entirely.
        let total = sum_compensated([1e16, 1.0, 1.0, -1e16]);
        assert_eq!(total, 2.0);
    }

    #[test]
    fn test_sum_compensated_mixed_magnitudes() {
        let terms = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(sum_compensated(terms), 2.0);
    }

    #[test]
    fn test_sum_compensated_empty_and_single() {
        let empty: [f64; 0] = [];
        assert_eq!(sum_compensated(empty), 0.0);
        assert_eq!(sum_compensated([42.5]), 42.5);
    }

    #[test]
    fn test_sum_compensated_matches_naive_on_benign_input() {
        let terms: Vec<f64> = (1..=100).map(|i| i as f64 * 0.25).collect();
        let naive: f64 = terms.iter().sum();
        let comp = sum_compensated(terms.iter().copied());
        assert!((naive - comp).abs() < 1e-9);
    }
}
