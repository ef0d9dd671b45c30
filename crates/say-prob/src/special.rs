//! Special-function backends.
//!
//! The kernels take their log-Gamma through the
//! [`SpecialFunctions`](say_core::SpecialFunctions) capability, so the
//! precision of the backend bounds the precision of every likelihood built on
//! it. The default backend wraps `statrs`.

use say_core::SpecialFunctions;

/// Default special-function backend over `statrs`.
///
/// Double precision, relative error near machine epsilon for moderate
/// arguments; see the `statrs` documentation for the tails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsFunctions;

impl SpecialFunctions for StatrsFunctions {
    fn ln_gamma(&self, x: f64) -> f64 {
        statrs::function::gamma::ln_gamma(x)
    }
}
