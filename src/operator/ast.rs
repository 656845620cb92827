use rand::Rng;

use crate::utils::{ConfigError, validate_operator_count};

/// One of the four binary operators a puzzle can hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in ordinal order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode a base-4 digit into an operator
    pub const fn from_digit(digit: u64) -> Option<Self> {
        match digit {
            0 => Some(Operator::Add),
            1 => Some(Operator::Subtract),
            2 => Some(Operator::Multiply),
            3 => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A hypothesis for the hidden operator sequence
///
/// A candidate for `n` terms holds `n - 1` operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Candidate(Vec<Operator>);

impl Candidate {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self(operators)
    }

    pub fn operators(&self) -> &[Operator] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draw a uniformly random operator sequence of the given length
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is outside the range the enumerator supports.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, ConfigError> {
        validate_operator_count(len)?;

        let operators = (0..len)
            .map(|_| Operator::ALL[rng.random_range(0..Operator::ALL.len())])
            .collect();
        Ok(Self(operators))
    }
}

impl From<Vec<Operator>> for Candidate {
    fn from(operators: Vec<Operator>) -> Self {
        Self(operators)
    }
}
