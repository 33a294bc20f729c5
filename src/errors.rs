use thiserror::Error;

/// A result type for mean function operations
pub type Result<T> = std::result::Result<T, MeanError>;

/// An error when building or evaluating a [`Mean`](crate::Mean) expression
#[derive(Error, Debug)]
pub enum MeanError {
    /// When a leaf hyperparameter is used before it has been registered
    #[error("Unset hyperparameter '{0}': call check_hypers first")]
    UnsetHyper(String),
    /// When a hyperparameter has no bound value at evaluation time
    #[error("Unbound hyperparameter '{0}'")]
    UnboundHyper(String),
    /// When a bound value does not match the expected dimension
    #[error("Shape mismatch error: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension of the bound value
        actual: usize,
    },
    /// When an error is due to a bad value
    #[error("InvalidValue error: {0}")]
    InvalidValue(String),
}
