use thiserror::Error;

/// Errors raised before any concurrent work is scheduled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bad operator count: {count} (must be between {min} and {max})")]
    BadOperatorCount { count: usize, min: usize, max: usize },
    #[error("min must be < max (min={min}, max={max})")]
    EmptyTermRange { min: i64, max: i64 },
    #[error("buffer capacity must be at least 1")]
    ZeroBufferCapacity,
    #[error("hidden operator sequence has {actual} operators, expected {expected}")]
    OperatorLengthMismatch { expected: usize, actual: usize },
}
