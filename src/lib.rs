//! Deductix - A library for generating arithmetic deduction puzzles
//!
//! A puzzle hides a sequence of binary operators applied left to right to a
//! row of numbers. Every clue is a row of terms together with the result of
//! the hidden sequence, and the library narrows the space of all candidate
//! sequences clue by clue through a chain of concurrent filter stages.

pub mod enumerator;
pub mod operator;
pub mod pipeline;
pub mod puzzle;
pub mod utils;

// Re-export the main public API
pub use enumerator::{EnumeratorError, enumerate};
pub use operator::{Candidate, Operator, OperatorError};
pub use pipeline::{Pipeline, PipelineError, Stream};
pub use puzzle::{HistoryPolicy, Puzzle, PuzzleConfig, PuzzleError, PuzzleGenerator, TermSet};
pub use utils::ConfigError;

/// Generate a puzzle for a random hidden operator sequence
///
/// This is a convenience function that validates `config`, draws the hidden
/// sequence and runs `config.attempts` rounds of elimination.
///
/// # Errors
///
/// This function will return an error if:
/// * `config.term_count - 1` is outside `[1, 15]`
/// * `config.min >= config.max`
/// * `config.buffer_capacity` is zero
///
/// # Examples
///
/// ```
/// use deductix::{PuzzleConfig, generate_puzzle};
///
/// let config = PuzzleConfig {
///     term_count: 3,
///     attempts: 4,
///     seed: Some(1),
///     ..PuzzleConfig::default()
/// };
///
/// match generate_puzzle(config) {
///     Ok(puzzle) => {
///         println!("Hidden: {}", puzzle.actual());
///         for clue in puzzle.history() {
///             println!("{}", clue);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_puzzle(config: PuzzleConfig) -> Result<Puzzle, PuzzleError> {
    PuzzleGenerator::new(config).generate_random()
}
