use std::fmt;

use rand::Rng;

use crate::operator::Candidate;

/// The terms of one round and, once known, the hidden sequence's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<i64>,
    solution: Option<i64>,
}

impl TermSet {
    pub fn new(terms: Vec<i64>) -> Self {
        Self {
            terms,
            solution: None,
        }
    }

    /// Draw `count` terms uniformly from `[min, max)`
    ///
    /// The caller guarantees `min < max`.
    pub fn random<R: Rng + ?Sized>(count: usize, min: i64, max: i64, rng: &mut R) -> Self {
        Self::new((0..count).map(|_| rng.random_range(min..max)).collect())
    }

    /// Attach the result of applying `actual` to these terms
    pub fn solved(mut self, actual: &Candidate) -> Self {
        self.solution = actual.evaluate(&self.terms);
        self
    }

    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    pub fn solution(&self) -> Option<i64> {
        self.solution
    }
}

impl fmt::Display for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} = ", self.terms)?;
        match self.solution {
            Some(solution) => write!(f, "{}", solution),
            None => write!(f, "?"),
        }
    }
}
