pub mod constants;
mod core;
mod errors;

pub use self::core::{candidate_count, decode_candidate, enumerate};
pub use errors::EnumeratorError;

#[cfg(test)]
mod tests;
