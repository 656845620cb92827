use log::debug;
use rayon::prelude::*;

use crate::operator::ast::Candidate;

/// Keep the candidates consistent with `terms = goal`, preserving order
///
/// This is the in-memory counterpart of a pipeline stage, used when the
/// caller needs the surviving count after every round.
pub fn filter_candidates(candidates: &[Candidate], terms: &[i64], goal: i64) -> Vec<Candidate> {
    let survivors: Vec<Candidate> = candidates
        .par_iter()
        .filter(|candidate| candidate.matches(terms, goal))
        .cloned()
        .collect();

    debug!(
        "Filtered {} candidates down to {} for {:?} = {}",
        candidates.len(),
        survivors.len(),
        terms,
        goal
    );
    survivors
}
