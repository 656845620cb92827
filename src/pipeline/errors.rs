use std::io;

use thiserror::Error;

/// Reasons a pipeline stops accepting new stages
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to spawn filter stage {stage}: {source}")]
    Spawn {
        stage: usize,
        #[source]
        source: io::Error,
    },
    #[error("pipeline was cancelled")]
    Cancelled,
}
