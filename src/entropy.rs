//! Pool partitioning and entropy scoring.
//!
//! A guess splits the candidate pool into groups by the feedback pattern
//! each candidate would produce if it were the secret. The expected
//! information of the guess is the Shannon entropy of that partition.

use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// Count the pool members falling into each feedback-pattern group.
///
/// The pool is read, never mutated; the same pool is scored against many
/// candidate guesses in one round.
pub fn partition_counts(guess: Word, pool: &[Word]) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &secret in pool {
        let pattern = FeedbackPattern::calculate(guess, secret);
        counts[pattern.index()] += 1;
    }
    counts
}

/// Expected information of a guess against a pool, in bits.
///
/// For a pool of size `n` and a group of size `c`, the group contributes
/// `(c/n) * log2(n/c)`. Zero when the pool holds at most one word: there
/// is no uncertainty left to resolve.
pub fn entropy_of(guess: Word, pool: &[Word]) -> f64 {
    if pool.len() <= 1 {
        return 0.0;
    }
    let n = pool.len() as f64;

    let mut entropy = 0.0;
    for &count in partition_counts(guess, pool).iter() {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }
    entropy
}
