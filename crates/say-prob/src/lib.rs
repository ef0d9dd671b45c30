//! Probability building blocks for the SAY bin likelihoods.
//!
//! Binned fits usually assume the expected bin content is known exactly; when
//! it is itself estimated from a finite weighted Monte Carlo sample, the
//! estimator's variance must enter the likelihood or the fit overstates its
//! confidence. This crate hosts the pieces of that correction:
//! - the Gamma-prior Poisson marginal kernel
//! - the moment-matched weighted-MC bin likelihoods built on it
//! - chi-square approximations to the same bin problem
//! - small numeric helpers (stable `log1p`, compensated summation)
//!
//! Everything is a pure function of its inputs; identical inputs yield
//! bit-identical outputs, and concurrent calls from multiple threads need no
//! synchronization.

pub mod chi2;
pub mod gamma_poisson;
pub mod math;
pub mod poisson;
pub mod special;
pub mod weighted;
