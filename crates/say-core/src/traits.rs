//! Core traits for the SAY bin-likelihood crates.
//!
//! Dependency inversion at the numeric seam: likelihood kernels state the
//! special functions they need, concrete backends live downstream and can be
//! swapped for unit testing against reference values.

/// Special-function capability required by the likelihood kernels.
///
/// Implementations must be pure functions of their inputs; together with
/// `Send + Sync` this makes concurrent evaluation from multiple threads a
/// stated guarantee rather than an accident of implementation.
pub trait SpecialFunctions: Send + Sync {
    /// Natural log of the Gamma function.
    ///
    /// Every argument produced by this workspace is real and strictly
    /// positive; an implementation wrapping a complex log-Gamma must project
    /// onto the real part.
    fn ln_gamma(&self, x: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FactorialTable;

    impl SpecialFunctions for FactorialTable {
        fn ln_gamma(&self, x: f64) -> f64 {
            // Integer arguments only, enough for a seam test.
            let n = x as u64;
            (1..n).map(|i| (i as f64).ln()).sum()
        }
    }

    #[test]
    fn test_backend_substitution() {
        let table = FactorialTable;
        assert_eq!(table.ln_gamma(1.0), 0.0);
        assert!((table.ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
    }
}
