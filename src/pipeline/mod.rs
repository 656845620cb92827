//! Concurrent filter chains over bounded streams
//!
//! A [`Pipeline`] starts from a root [`Stream`] and grows by one stage per
//! [`Pipeline::filter`] call. Every stage is a thread that reads its input
//! stream, forwards accepted items into a freshly allocated bounded stream
//! and closes that stream once the input is exhausted.

mod cancel;
pub mod constants;
mod core;
mod errors;
mod stream;

pub use cancel::CancelToken;
pub use self::core::{Pipeline, StageReport};
pub use errors::PipelineError;
pub use stream::{Stream, StreamState, StreamWriter, stream};
