use thiserror::Error;

use crate::enumerator::EnumeratorError;
use crate::utils::ConfigError;

/// Errors that can occur while generating a puzzle
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Enumerator error: {0}")]
    Enumerator(#[from] EnumeratorError),
}
