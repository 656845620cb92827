//! Configuration checks shared by the enumerator and the puzzle driver

mod errors;
mod validation;

pub use errors::ConfigError;
pub use validation::{validate_buffer_capacity, validate_operator_count, validate_term_range};
