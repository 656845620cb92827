use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

use crate::enumerator::{EnumeratorError, candidate_count, decode_candidate, enumerate};
use crate::operator::{Candidate, Operator};
use crate::utils::ConfigError;

use Operator::{Add, Divide, Multiply, Subtract};

fn drained(operator_count: usize) -> Vec<Candidate> {
    match enumerate(operator_count, 64) {
        Ok(stream) => stream.drain(),
        Err(e) => panic!("enumerate({}) failed: {}", operator_count, e),
    }
}

#[test]
fn test_single_operator_order() {
    let expected: Vec<Candidate> = [Add, Subtract, Multiply, Divide]
        .into_iter()
        .map(|op| Candidate::new(vec![op]))
        .collect();
    assert_eq!(drained(1), expected);
}

#[test]
fn test_two_operators_least_significant_first() {
    let expected: Vec<Candidate> = [
        [Add, Add],
        [Subtract, Add],
        [Multiply, Add],
        [Divide, Add],
        [Add, Subtract],
        [Subtract, Subtract],
        [Multiply, Subtract],
        [Divide, Subtract],
        [Add, Multiply],
        [Subtract, Multiply],
        [Multiply, Multiply],
        [Divide, Multiply],
        [Add, Divide],
        [Subtract, Divide],
        [Multiply, Divide],
        [Divide, Divide],
    ]
    .into_iter()
    .map(|ops| Candidate::new(ops.to_vec()))
    .collect();

    assert_eq!(drained(2), expected);
}

#[test]
fn test_enumeration_is_complete_and_distinct() {
    for operator_count in 1..=5 {
        let candidates = drained(operator_count);
        let expected = candidate_count(operator_count);
        assert_eq!(candidates.len() as u64, expected);

        let distinct: HashSet<_> = candidates.iter().collect();
        assert_eq!(distinct.len() as u64, expected);
        assert!(candidates.iter().all(|c| c.len() == operator_count));
    }
}

#[test]
fn test_candidate_count() {
    assert_eq!(candidate_count(1), 4);
    assert_eq!(candidate_count(2), 16);
    assert_eq!(candidate_count(15), 1 << 30);
}

#[test]
fn test_decode_candidate() {
    // 27 = 0b01_10_11
    assert_eq!(
        decode_candidate(27, 3),
        Candidate::new(vec![Divide, Multiply, Subtract])
    );
    assert_eq!(decode_candidate(0, 2), Candidate::new(vec![Add, Add]));
}

#[test]
fn test_bad_operator_count() {
    for count in [0, 16, 1000] {
        let result = enumerate(count, 8);
        assert!(matches!(
            result,
            Err(EnumeratorError::Config(ConfigError::BadOperatorCount { .. }))
        ));
        if let Err(e) = result {
            assert!(e.to_string().contains("bad operator count"));
        }
    }
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(
        enumerate(2, 0),
        Err(EnumeratorError::Config(ConfigError::ZeroBufferCapacity))
    ));
}

#[test]
fn test_large_space_streams_within_buffer() {
    let capacity = 16;
    let stream = enumerate(15, capacity);
    assert!(stream.is_ok());

    if let Ok(stream) = stream {
        let start = Instant::now();
        while stream.buffered() < capacity && start.elapsed() < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
        }
        thread::sleep(Duration::from_millis(20));
        assert_eq!(stream.buffered(), capacity);

        let first = stream.recv();
        assert_eq!(first, Some(Candidate::new(vec![Add; 15])));
    }
}
