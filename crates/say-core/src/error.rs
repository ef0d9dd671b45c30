//! Error types shared across the workspace.

use thiserror::Error;

/// Workspace error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Argument outside a function's mathematical domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
