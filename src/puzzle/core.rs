use std::iter;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::enumerator::{candidate_count, enumerate};
use crate::operator::{Candidate, filter_candidates};
use crate::pipeline::Pipeline;
use crate::utils::ConfigError;

use super::config::{HistoryPolicy, PuzzleConfig};
use super::errors::PuzzleError;
use super::terms::TermSet;

enum Survivors {
    Streaming(Pipeline<Candidate>),
    Materialized(Vec<Candidate>),
}

/// A generated puzzle: the hidden sequence, its clues and the candidates left
pub struct Puzzle {
    actual: Candidate,
    history: Vec<TermSet>,
    survivors: Survivors,
}

impl Puzzle {
    pub fn actual(&self) -> &Candidate {
        &self.actual
    }

    pub fn history(&self) -> &[TermSet] {
        &self.history
    }

    /// Keep the clues and abandon the remaining filtering work
    pub fn into_history(self) -> Vec<TermSet> {
        self.history
    }

    /// Candidates consistent with every clue, in enumeration order
    ///
    /// With [`HistoryPolicy::EveryRound`] this blocks until the pipeline drains.
    pub fn into_survivors(self) -> Vec<Candidate> {
        self.into_parts().1
    }

    pub fn into_parts(self) -> (Vec<TermSet>, Vec<Candidate>) {
        let survivors = match self.survivors {
            Survivors::Streaming(pipeline) => pipeline.drain(),
            Survivors::Materialized(candidates) => candidates,
        };
        (self.history, survivors)
    }
}

/// Builds puzzles by eliminating candidate operator sequences
pub struct PuzzleGenerator {
    config: PuzzleConfig,
}

impl PuzzleGenerator {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generate a puzzle for a randomly drawn hidden sequence
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any thread is started.
    pub fn generate_random(&self) -> Result<Puzzle, PuzzleError> {
        self.config.validate()?;

        let mut rng = self.rng();
        let actual = Candidate::random(self.config.operator_count(), &mut rng)?;
        self.generate_with_rng(actual, &mut rng)
    }

    /// Generate a puzzle for the given hidden sequence
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any thread is started.
    pub fn generate(&self, actual: Candidate) -> Result<Puzzle, PuzzleError> {
        let mut rng = self.rng();
        self.generate_with_rng(actual, &mut rng)
    }

    /// Run the elimination over caller-supplied rounds of terms
    ///
    /// At most `attempts` rounds are consumed.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any thread is started.
    pub fn generate_with_terms<I>(
        &self,
        actual: Candidate,
        rounds: I,
    ) -> Result<Puzzle, PuzzleError>
    where
        I: IntoIterator<Item = Vec<i64>>,
    {
        self.run(actual, rounds.into_iter().map(TermSet::new))
    }

    fn generate_with_rng(
        &self,
        actual: Candidate,
        rng: &mut StdRng,
    ) -> Result<Puzzle, PuzzleError> {
        let (count, min, max) = (self.config.term_count, self.config.min, self.config.max);
        self.run(
            actual,
            iter::repeat_with(|| TermSet::random(count, min, max, &mut *rng)),
        )
    }

    fn run(
        &self,
        actual: Candidate,
        rounds: impl Iterator<Item = TermSet>,
    ) -> Result<Puzzle, PuzzleError> {
        self.check(&actual)?;

        let rounds = rounds.take(self.config.attempts);
        match self.config.history_policy {
            HistoryPolicy::EveryRound => self.run_streaming(actual, rounds),
            HistoryPolicy::ShrinkingOnly
                if candidate_count(self.config.operator_count()) <= self.config.materialize_limit =>
            {
                self.run_materialized(actual, rounds)
            }
            HistoryPolicy::ShrinkingOnly => self.run_counting(actual, rounds),
        }
    }

    fn check(&self, actual: &Candidate) -> Result<(), ConfigError> {
        self.config.validate()?;

        let expected = self.config.operator_count();
        if actual.len() != expected {
            warn!(
                "Hidden sequence {} does not fit {} terms",
                actual, self.config.term_count
            );
            return Err(ConfigError::OperatorLengthMismatch {
                expected,
                actual: actual.len(),
            });
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Every round is recorded and chained onto the pipeline as one stage
    fn run_streaming(
        &self,
        actual: Candidate,
        rounds: impl Iterator<Item = TermSet>,
    ) -> Result<Puzzle, PuzzleError> {
        let root = enumerate(self.config.operator_count(), self.config.buffer_capacity)?;
        let mut pipeline = Pipeline::with_capacity(root, self.config.buffer_capacity);
        let mut history = Vec::new();

        for round in rounds {
            let round = round.solved(&actual);
            let Some(goal) = round.solution() else {
                warn!("Skipping round {}: wrong number of terms", round);
                continue;
            };

            info!("Created terms: {}", round);
            let observed = round.terms().to_vec();
            history.push(round);
            pipeline = pipeline.filter(move |candidate: &Candidate| {
                candidate.matches(&observed, goal)
            });
        }

        if pipeline.is_errored() {
            warn!(
                "Pipeline stopped growing after {} stages",
                pipeline.stage_count()
            );
        }

        Ok(Puzzle {
            actual,
            history,
            survivors: Survivors::Streaming(pipeline),
        })
    }

    /// Survivors are counted after every round; only rounds that shrink them are kept
    fn run_materialized(
        &self,
        actual: Candidate,
        rounds: impl Iterator<Item = TermSet>,
    ) -> Result<Puzzle, PuzzleError> {
        let mut survivors =
            enumerate(self.config.operator_count(), self.config.buffer_capacity)?.drain();
        let mut history = Vec::new();

        for round in rounds {
            if survivors.len() <= 1 {
                debug!("Single candidate left, stopping early");
                break;
            }

            let round = round.solved(&actual);
            let Some(goal) = round.solution() else {
                warn!("Skipping round {}: wrong number of terms", round);
                continue;
            };

            let remaining = filter_candidates(&survivors, round.terms(), goal);
            if remaining.len() < survivors.len() {
                info!(
                    "Created terms: {} ({} candidates left)",
                    round,
                    remaining.len()
                );
                history.push(round);
                survivors = remaining;
            } else {
                debug!("Terms {} eliminated nothing", round);
            }
        }

        Ok(Puzzle {
            actual,
            history,
            survivors: Survivors::Materialized(survivors),
        })
    }

    /// Same elimination as [`run_materialized`](Self::run_materialized) for
    /// spaces too large to hold: every round re-streams the enumeration and
    /// counts the candidates consistent with all clues so far.
    fn run_counting(
        &self,
        actual: Candidate,
        rounds: impl Iterator<Item = TermSet>,
    ) -> Result<Puzzle, PuzzleError> {
        let mut remaining = candidate_count(self.config.operator_count());
        let mut history: Vec<TermSet> = Vec::new();

        info!(
            "Counting survivors by streaming {} candidates per round",
            remaining
        );

        for round in rounds {
            if remaining <= 1 {
                debug!("Single candidate left, stopping early");
                break;
            }

            let round = round.solved(&actual);
            let Some(goal) = round.solution() else {
                warn!("Skipping round {}: wrong number of terms", round);
                continue;
            };

            let count = self.count_survivors(&history, round.terms(), goal)?;
            if count < remaining {
                info!("Created terms: {} ({} candidates left)", round, count);
                history.push(round);
                remaining = count;
            } else {
                debug!("Terms {} eliminated nothing", round);
            }
        }

        let root = enumerate(self.config.operator_count(), self.config.buffer_capacity)?;
        let mut pipeline = Pipeline::with_capacity(root, self.config.buffer_capacity);
        for clue in &history {
            let observed = clue.terms().to_vec();
            let goal = clue.solution();
            pipeline = pipeline.filter(move |candidate: &Candidate| {
                goal.is_some_and(|goal| candidate.matches(&observed, goal))
            });
        }

        Ok(Puzzle {
            actual,
            history,
            survivors: Survivors::Streaming(pipeline),
        })
    }

    fn count_survivors(
        &self,
        clues: &[TermSet],
        terms: &[i64],
        goal: i64,
    ) -> Result<u64, PuzzleError> {
        let count = enumerate(self.config.operator_count(), self.config.buffer_capacity)?
            .filter(|candidate| {
                candidate.matches(terms, goal)
                    && clues.iter().all(|clue| {
                        clue.solution()
                            .is_some_and(|solved| candidate.matches(clue.terms(), solved))
                    })
            })
            .count();
        Ok(count as u64)
    }
}
