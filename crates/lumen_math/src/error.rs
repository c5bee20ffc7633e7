//! Errors raised when a computation would leave the valid vector domain.

use thiserror::Error;

/// Errors that can occur in vector arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The result would be the zero vector, which has no direction.
    #[error("zero vector is not a valid direction")]
    ZeroVector,

    /// Two identical points were subtracted.
    #[error("subtracting identical points yields the zero vector")]
    CoincidentPoints,
}

/// Result type for vector arithmetic.
pub type MathResult<T> = Result<T, MathError>;
