//! Parallel full-dictionary simulation.
//!
//! Plays every answer word as the secret, one independent game per
//! word, and aggregates the results. Games share nothing but the
//! read-only dictionary, so the sweep is embarrassingly parallel and
//! the summary reduction is commutative: execution order never changes
//! the report.

use rayon::prelude::*;

use crate::feedback::FeedbackPattern;
use crate::game::{run_game, GameConfig, GameReport, Outcome};
use crate::word::{Dictionary, Word};
use crate::WordleError;

/// Opening words worth comparing, from strongest known openers.
pub const DEFAULT_OPENINGS: [&str; 4] = ["raise", "audio", "crane", "slate"];

/// One flattened turn, suitable for tabular export.
#[derive(Debug, Clone, Copy)]
pub struct TurnRow {
    pub secret: Word,
    pub opening: Option<Word>,
    pub outcome: Outcome,
    pub rounds: usize,
    pub round: usize,
    pub guess: Word,
    pub pattern: FeedbackPattern,
    pub entropy: f64,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Aggregate statistics over a set of games.
///
/// `merge` is commutative and associative, so summaries can be reduced
/// in any order the scheduler picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub wins: usize,
    pub failures: usize,
    pub total_rounds_in_wins: usize,
    /// `distribution[n]` counts games solved in exactly `n` rounds.
    pub distribution: Vec<usize>,
    /// Secrets the solver did not find within the attempt limit,
    /// sorted for order-independent reporting.
    pub failed_words: Vec<Word>,
}

impl Summary {
    /// Summary of a single game.
    pub fn record(report: &GameReport) -> Self {
        let mut summary = Summary {
            games: 1,
            ..Summary::default()
        };
        match report.outcome {
            Outcome::Solved => {
                let rounds = report.rounds();
                summary.wins = 1;
                summary.total_rounds_in_wins = rounds;
                summary.distribution.resize(rounds + 1, 0);
                summary.distribution[rounds] = 1;
            }
            Outcome::Failed => {
                summary.failures = 1;
                summary.failed_words.push(report.secret);
            }
        }
        summary
    }

    /// Combine two summaries. Order-independent.
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.wins += other.wins;
        self.failures += other.failures;
        self.total_rounds_in_wins += other.total_rounds_in_wins;

        if self.distribution.len() < other.distribution.len() {
            self.distribution.resize(other.distribution.len(), 0);
        }
        for (slot, count) in self.distribution.iter_mut().zip(other.distribution) {
            *slot += count;
        }

        self.failed_words.extend(other.failed_words);
        self.failed_words.sort();
        self
    }

    /// Mean rounds over solved games, `None` if nothing was solved.
    pub fn mean_rounds(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.total_rounds_in_wins as f64 / self.wins as f64)
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }
}

/// Play every answer word as the secret, in parallel.
pub fn simulate_all(
    dictionary: &Dictionary,
    config: GameConfig,
) -> Result<Vec<GameReport>, WordleError> {
    dictionary
        .answers()
        .par_iter()
        .map(|&secret| run_game(dictionary, secret, config))
        .collect()
}

/// Run the full-dictionary sweep once per opening word.
pub fn simulate_openings(
    dictionary: &Dictionary,
    openings: &[Word],
    base: GameConfig,
) -> Result<Vec<(Word, Vec<GameReport>)>, WordleError> {
    let mut runs = Vec::with_capacity(openings.len());
    for &opening in openings {
        log::info!(
            "simulating {} secrets with opening {}",
            dictionary.answers().len(),
            opening
        );
        let config = GameConfig {
            opening: Some(opening),
            ..base
        };
        runs.push((opening, simulate_all(dictionary, config)?));
    }
    Ok(runs)
}

/// Reduce per-game reports into one summary, in parallel.
pub fn summarize(reports: &[GameReport]) -> Summary {
    reports
        .par_iter()
        .map(Summary::record)
        .reduce(Summary::default, Summary::merge)
}

/// Flatten reports into per-turn rows for tabular export.
pub fn turn_rows(reports: &[GameReport]) -> Vec<TurnRow> {
    reports
        .iter()
        .flat_map(|report| {
            report.history.iter().map(move |record| TurnRow {
                secret: report.secret,
                opening: report.opening,
                outcome: report.outcome,
                rounds: report.rounds(),
                round: record.round,
                guess: record.guess,
                pattern: record.pattern,
                entropy: record.entropy,
                pool_before: record.pool_before,
                pool_after: record.pool_after,
            })
        })
        .collect()
}
