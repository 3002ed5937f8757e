use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from date operations
    #[error("Date error: {0}")]
    Date(String),

    /// Error from decimal operations
    #[error("Decimal error: {0}")]
    Decimal(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
