//! Puzzle driver: narrows the candidate space round by round

mod config;
mod core;
mod errors;
mod terms;

pub use config::{DEFAULT_MATERIALIZE_LIMIT, HistoryPolicy, PuzzleConfig};
pub use self::core::{Puzzle, PuzzleGenerator};
pub use errors::PuzzleError;
pub use terms::TermSet;
