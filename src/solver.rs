//! Guess selection over a shrinking candidate pool.
//!
//! The solver owns the set of answers still consistent with every
//! feedback pattern observed so far, scores admissible guesses by
//! expected information against that pool, and picks the best one under
//! a deterministic tie-break.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::entropy;
use crate::feedback::FeedbackPattern;
use crate::word::{Dictionary, Word};
use crate::WordleError;

/// Which words are admissible as guesses when ranking a round.
///
/// Scoring the full guess set is optimal; scoring only the current
/// candidates trades a little optimality for a large speedup late in
/// the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPolicy {
    /// Score every word in the guess set.
    FullGuessSet,
    /// Score only words still in the candidate pool.
    PoolOnly,
    /// Score the full guess set while the pool is larger than
    /// `threshold`, then switch to candidates only.
    Adaptive { threshold: usize },
}

impl Default for GuessPolicy {
    fn default() -> Self {
        GuessPolicy::Adaptive { threshold: 50 }
    }
}

/// Result of analyzing one candidate guess against the current pool.
#[derive(Debug, Clone, Copy)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// The candidate pool plus the machinery to rank guesses against it.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    pool: Vec<Word>,
    policy: GuessPolicy,
}

impl<'a> Solver<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_policy(dictionary, GuessPolicy::default())
    }

    pub fn with_policy(dictionary: &'a Dictionary, policy: GuessPolicy) -> Self {
        Self {
            dictionary,
            pool: dictionary.answers().to_vec(),
            policy,
        }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Answers still consistent with every feedback seen so far.
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn remaining_count(&self) -> usize {
        self.pool.len()
    }

    pub fn policy(&self) -> GuessPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: GuessPolicy) {
        self.policy = policy;
    }

    /// Restore the pool to the full answer set.
    pub fn reset(&mut self) {
        self.pool = self.dictionary.answers().to_vec();
    }

    /// Remove every candidate that would not have produced `pattern`
    /// for this guess.
    ///
    /// If the filter would empty the pool the feedback was inconsistent
    /// with every dictionary word; the pool is left unchanged and
    /// [`WordleError::EmptyPool`] is returned so the caller can retry
    /// the round.
    pub fn apply_feedback(
        &mut self,
        guess: Word,
        pattern: FeedbackPattern,
    ) -> Result<(), WordleError> {
        let filtered: Vec<Word> = self
            .pool
            .iter()
            .copied()
            .filter(|&candidate| FeedbackPattern::calculate(guess, candidate) == pattern)
            .collect();

        if filtered.is_empty() {
            return Err(WordleError::EmptyPool);
        }

        log::debug!(
            "filtered pool {} -> {} on {} {}",
            self.pool.len(),
            filtered.len(),
            guess,
            pattern
        );
        self.pool = filtered;
        Ok(())
    }

    /// The guesses the current policy admits for ranking.
    fn admissible_guesses(&self) -> &[Word] {
        match self.policy {
            GuessPolicy::FullGuessSet => self.dictionary.guesses(),
            GuessPolicy::PoolOnly => &self.pool,
            GuessPolicy::Adaptive { threshold } => {
                if self.pool.len() <= threshold {
                    &self.pool
                } else {
                    self.dictionary.guesses()
                }
            }
        }
    }

    /// Rank order: higher entropy first, then guesses that could still
    /// be the answer, then lexicographically smaller words. Total, so
    /// identical inputs always rank identically.
    fn rank(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
        b.entropy
            .partial_cmp(&a.entropy)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.is_candidate.cmp(&a.is_candidate))
            .then_with(|| a.word.cmp(&b.word))
    }

    /// Score one guess against the current pool.
    pub fn analyze(&self, word: Word) -> GuessAnalysis {
        let entropy = entropy::entropy_of(word, &self.pool);
        GuessAnalysis {
            word,
            entropy,
            expected_remaining: self.pool.len() as f64 / 2_f64.powf(entropy),
            is_candidate: self.pool.contains(&word),
        }
    }

    /// The best guess for the current pool, or `None` if no candidates
    /// remain.
    pub fn best_guess(&self) -> Option<GuessAnalysis> {
        if self.pool.len() == 1 {
            return Some(GuessAnalysis {
                word: self.pool[0],
                entropy: 0.0,
                expected_remaining: 1.0,
                is_candidate: true,
            });
        }

        self.analyses().min_by(Self::rank)
    }

    /// The `n` best guesses, ranked.
    pub fn top_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        let mut analyses: Vec<GuessAnalysis> = self.analyses().collect();
        analyses.sort_by(Self::rank);
        analyses.truncate(n);
        analyses
    }

    fn analyses(&self) -> impl ParallelIterator<Item = GuessAnalysis> + '_ {
        self.admissible_guesses()
            .par_iter()
            .map(|&word| self.analyze(word))
    }
}
