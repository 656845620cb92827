use crate::pipeline::constants::DEFAULT_BUFFER_CAPACITY;
use crate::utils::{
    ConfigError, validate_buffer_capacity, validate_operator_count, validate_term_range,
};

/// Largest candidate space [`HistoryPolicy::ShrinkingOnly`] holds in memory
pub const DEFAULT_MATERIALIZE_LIMIT: u64 = 1 << 20;

/// Which rounds end up in a puzzle's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Record every round; candidates are filtered through the streaming pipeline
    #[default]
    EveryRound,
    /// Record only rounds that eliminate at least one candidate, and stop once
    /// a single candidate is left
    ///
    /// Spaces above [`PuzzleConfig::materialize_limit`] are re-streamed and
    /// counted each round instead of being held in memory.
    ShrinkingOnly,
}

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub term_count: usize,
    /// Inclusive lower bound of a term
    pub min: i64,
    /// Exclusive upper bound of a term
    pub max: i64,
    pub attempts: usize,
    pub history_policy: HistoryPolicy,
    pub buffer_capacity: usize,
    /// Candidate count up to which survivors may be materialized
    pub materialize_limit: u64,
    pub seed: Option<u64>,
}

impl PuzzleConfig {
    pub fn operator_count(&self) -> usize {
        self.term_count.saturating_sub(1)
    }

    /// # Errors
    ///
    /// Returns the first configuration problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_operator_count(self.operator_count())?;
        validate_term_range(self.min, self.max)?;
        validate_buffer_capacity(self.buffer_capacity)?;
        Ok(())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            term_count: 3,
            min: 2,
            max: 20,
            attempts: 20,
            history_policy: HistoryPolicy::EveryRound,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            materialize_limit: DEFAULT_MATERIALIZE_LIMIT,
            seed: None,
        }
    }
}
