use log::trace;

use crate::operator::ast::{Candidate, Operator};

/// Result of dividing by zero
///
/// Evaluation is total: a zero divisor yields this value instead of an error,
/// so predicates built on it only ever answer yes or no.
pub const DIVISION_BY_ZERO: i64 = i64::MAX;

impl Operator {
    /// Combine two values; overflow wraps
    #[inline]
    pub fn apply(self, first: i64, second: i64) -> i64 {
        match self {
            Operator::Add => first.wrapping_add(second),
            Operator::Subtract => first.wrapping_sub(second),
            Operator::Multiply => first.wrapping_mul(second),
            Operator::Divide => {
                if second == 0 {
                    DIVISION_BY_ZERO
                } else {
                    first.wrapping_div(second)
                }
            }
        }
    }
}

impl Candidate {
    /// Fold `terms` left to right through the operators, ignoring precedence
    ///
    /// Returns `None` when the candidate does not have exactly one operator
    /// fewer than there are terms.
    pub fn evaluate(&self, terms: &[i64]) -> Option<i64> {
        if self.len() + 1 != terms.len() {
            trace!(
                "Length mismatch: {} operators for {} terms",
                self.len(),
                terms.len()
            );
            return None;
        }

        let (first, rest) = terms.split_first()?;
        Some(
            self.operators()
                .iter()
                .zip(rest)
                .fold(*first, |total, (operator, &term)| operator.apply(total, term)),
        )
    }

    /// Whether this candidate is consistent with the observation `terms = goal`
    #[inline]
    pub fn matches(&self, terms: &[i64], goal: i64) -> bool {
        self.evaluate(terms) == Some(goal)
    }
}
