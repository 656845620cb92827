use std::io;

use thiserror::Error;

use crate::utils::ConfigError;

#[derive(Error, Debug)]
pub enum EnumeratorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to spawn enumerator: {0}")]
    Spawn(#[from] io::Error),
}
