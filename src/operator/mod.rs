//! Binary operators and the left-to-right evaluation of operator sequences

mod ast;
mod display;
mod errors;
mod eval;
mod filter;

pub use ast::{Candidate, Operator};
pub use errors::OperatorError;
pub use eval::DIVISION_BY_ZERO;
pub use filter::filter_candidates;

#[cfg(test)]
mod tests;
