use std::thread;

use log::{debug, info};

use crate::operator::{Candidate, Operator};
use crate::pipeline::{Stream, stream};
use crate::utils::{validate_buffer_capacity, validate_operator_count};

use super::constants::{BITS_PER_OPERATOR, ENUMERATOR_THREAD_NAME};
use super::errors::EnumeratorError;

const DIGIT_MASK: u64 = (1 << BITS_PER_OPERATOR) - 1;

/// Size of the candidate space for `operator_count` operators (4^n)
pub fn candidate_count(operator_count: usize) -> u64 {
    1_u64 << (BITS_PER_OPERATOR * operator_count)
}

/// Read `index` as a base-4 number, least significant digit first
pub fn decode_candidate(index: u64, operator_count: usize) -> Candidate {
    (0..operator_count)
        .filter_map(|position| {
            Operator::from_digit((index >> (BITS_PER_OPERATOR * position)) & DIGIT_MASK)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Stream every operator sequence of length `operator_count`
///
/// A producer thread writes the candidates in ascending order of their
/// base-4 encoding into a stream buffering at most `capacity` items, and
/// closes it when done. The producer stops early if the stream's reader is
/// dropped.
///
/// # Errors
///
/// Fails before any thread is started if `operator_count` is outside
/// `[1, 15]` or `capacity` is zero.
pub fn enumerate(
    operator_count: usize,
    capacity: usize,
) -> Result<Stream<Candidate>, EnumeratorError> {
    validate_operator_count(operator_count)?;
    validate_buffer_capacity(capacity)?;

    let total = candidate_count(operator_count);
    let (writer, candidates) = stream(capacity);

    info!(
        "Enumerating {} candidates of {} operators",
        total, operator_count
    );

    thread::Builder::new()
        .name(ENUMERATOR_THREAD_NAME.to_string())
        .spawn(move || {
            for index in 0..total {
                if !writer.send(decode_candidate(index, operator_count)) {
                    debug!("Enumerator stopped after {} candidates: reader gone", index);
                    return;
                }
            }
            debug!("Enumerator finished all {} candidates", total);
        })?;

    Ok(candidates)
}
