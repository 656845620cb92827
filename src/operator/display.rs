use std::fmt;
use std::str::FromStr;

use crate::operator::ast::{Candidate, Operator};
use crate::operator::errors::OperatorError;

impl Operator {
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// # Errors
    ///
    /// Returns an error for anything other than `+ - * /` (or `×` and `÷`).
    pub fn from_symbol(symbol: char) -> Result<Self, OperatorError> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' | 'x' | '×' => Ok(Operator::Multiply),
            '/' | '÷' => Ok(Operator::Divide),
            other => Err(OperatorError::UnknownSymbol(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, operator) in self.operators().iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", operator)?;
        }
        write!(f, "]")
    }
}

impl FromStr for Candidate {
    type Err = OperatorError;

    /// Parse `"+*"`, `"+ *"` or `"[+ *]"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != '[' && *c != ']' && *c != ',')
            .map(Operator::from_symbol)
            .collect::<Result<Vec<_>, _>>()
            .map(Candidate::new)
    }
}
