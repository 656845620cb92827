use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unknown operator symbol: '{0}'")]
    UnknownSymbol(char),
}
