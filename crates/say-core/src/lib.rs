//! Core types for the SAY bin-likelihood crates.
//!
//! Hosts the shared error type and the numeric-backend traits so that
//! likelihood code can state what it needs without depending on a concrete
//! special-function library.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::SpecialFunctions;
