use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::operator::{Candidate, DIVISION_BY_ZERO, Operator, OperatorError, filter_candidates};

use Operator::{Add, Divide, Multiply, Subtract};

fn candidate(operators: &[Operator]) -> Candidate {
    Candidate::new(operators.to_vec())
}

#[test]
fn test_apply_each_operator() {
    let cases = [
        (Add, 1, 1, 2),
        (Subtract, 1, 1, 0),
        (Multiply, 1, 1, 1),
        (Divide, 1, 1, 1),
        (Add, 10, 2, 12),
        (Subtract, 10, 2, 8),
        (Multiply, 10, 2, 20),
        (Divide, 10, 2, 5),
        (Divide, 1, 0, DIVISION_BY_ZERO),
    ];

    for (operator, first, second, expected) in cases {
        assert_eq!(
            operator.apply(first, second),
            expected,
            "{} {} {}",
            first,
            operator,
            second
        );
    }
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(Divide.apply(7, 2), 3);
    assert_eq!(Divide.apply(-7, 2), -3);
    assert_eq!(Divide.apply(7, -2), -3);
}

#[test]
fn test_division_by_zero_is_max_integer() {
    assert_eq!(Divide.apply(0, 0), i64::MAX);
    assert_eq!(Divide.apply(-5, 0), i64::MAX);
}

#[test]
fn test_overflow_wraps_instead_of_panicking() {
    assert_eq!(Add.apply(i64::MAX, 1), i64::MIN);
    assert_eq!(Multiply.apply(i64::MAX, 2), -2);
    assert_eq!(Divide.apply(i64::MIN, -1), i64::MIN);
}

#[test]
fn test_evaluate_candidate() {
    assert_eq!(candidate(&[Multiply]).evaluate(&[3, 3]), Some(9));
    assert_eq!(candidate(&[Add, Multiply]).evaluate(&[2, 1, 4]), Some(12));
    assert_eq!(candidate(&[Divide]).evaluate(&[1, 0]), Some(i64::MAX));
}

#[test]
fn test_evaluation_ignores_precedence() {
    // 2 + 3 * 4 folds to (2 + 3) * 4
    assert_eq!(candidate(&[Add, Multiply]).evaluate(&[2, 3, 4]), Some(20));
}

#[test]
fn test_matches_table() {
    let cases: [(&[Operator], &[i64], i64, bool); 9] = [
        (&[], &[2], 2, true),
        (&[Add], &[2, 1], 2, false),
        (&[Multiply], &[2, 1], 2, true),
        (&[Subtract], &[2, 1], 2, false),
        (&[Divide], &[2, 1], 2, true),
        (&[Add, Multiply], &[2, 1, 4], 12, true),
        (&[Add, Multiply], &[2, 1, 4], 11, false),
        (&[Add], &[2, 1, 4], 12, false),
        (&[], &[], 12, false),
    ];

    for (index, (operators, terms, goal, expected)) in cases.into_iter().enumerate() {
        assert_eq!(
            candidate(operators).matches(terms, goal),
            expected,
            "case {}",
            index
        );
    }
}

#[test]
fn test_length_mismatch_always_rejects() {
    assert_eq!(candidate(&[Add]).evaluate(&[1]), None);
    assert!(!candidate(&[Add]).matches(&[1], 1));
    assert!(!candidate(&[Add]).matches(&[1, 1, 1], 3));
    assert!(!candidate(&[]).matches(&[], 0));
}

#[test]
fn test_single_term_matches_goal_directly() {
    assert!(candidate(&[]).matches(&[7], 7));
    assert!(!candidate(&[]).matches(&[7], 8));
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Add), "+");
    assert_eq!(format!("{}", Subtract), "-");
    assert_eq!(format!("{}", Multiply), "*");
    assert_eq!(format!("{}", Divide), "/");
    assert_eq!(format!("{}", candidate(&[Add, Multiply])), "[+ *]");
    assert_eq!(format!("{}", candidate(&[])), "[]");
}

#[test]
fn test_parse_candidate() {
    let parsed: Result<Candidate, _> = "+*".parse();
    assert_eq!(parsed, Ok(candidate(&[Add, Multiply])));

    let parsed: Result<Candidate, _> = "[- /]".parse();
    assert_eq!(parsed, Ok(candidate(&[Subtract, Divide])));

    let parsed: Result<Candidate, _> = "+?".parse();
    assert_eq!(parsed, Err(OperatorError::UnknownSymbol('?')));
}

#[test]
fn test_digit_round_trip_matches_ordinal() {
    for operator in Operator::ALL {
        assert_eq!(
            Operator::from_digit(u64::from(operator.ordinal())),
            Some(operator)
        );
    }
    assert_eq!(Operator::from_digit(4), None);
}

#[test]
fn test_random_candidate() {
    let mut rng = StdRng::seed_from_u64(7);
    let generated = Candidate::random(15, &mut rng);
    assert!(generated.is_ok());
    if let Ok(generated) = generated {
        assert_eq!(generated.len(), 15);
    }

    assert!(Candidate::random(0, &mut rng).is_err());
    assert!(Candidate::random(16, &mut rng).is_err());
}

#[test]
fn test_random_candidate_is_reproducible_with_seed() {
    let first = Candidate::random(10, &mut StdRng::seed_from_u64(42));
    let second = Candidate::random(10, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn test_filter_candidates() {
    let all = vec![
        candidate(&[Add]),
        candidate(&[Subtract]),
        candidate(&[Divide]),
        candidate(&[Multiply]),
    ];

    assert_eq!(filter_candidates(&all, &[1, 1], 2), vec![candidate(&[Add])]);
    assert_eq!(
        filter_candidates(&all, &[1, 1], 1),
        vec![candidate(&[Divide]), candidate(&[Multiply])]
    );
    assert!(filter_candidates(&all, &[1, 1], 3).is_empty());
    assert!(filter_candidates(&[], &[1, 1], 3).is_empty());
    assert!(filter_candidates(&[candidate(&[Add])], &[1], 3).is_empty());
    assert!(filter_candidates(&[candidate(&[Add])], &[1, 1, 1], 3).is_empty());
}
