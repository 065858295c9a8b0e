//! Feedback calculation for Wordle guesses.
//!
//! This module computes the per-letter feedback pattern (green/yellow/gray)
//! for a guess against a secret word, including the multiset rules for
//! repeated letters.

use crate::word::Word;
use crate::{WordleError, WORD_LENGTH};

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// The symbol used at the live-play boundary.
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'B',
        }
    }

    /// Parse a boundary symbol (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Feedback::Correct),
            'Y' => Some(Feedback::Present),
            'B' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a five-letter guess.
///
/// Encoded as a single `u8` in `0..243`. Each position holds 0 (absent),
/// 1 (present), or 2 (correct); position 0 is the least significant
/// base-3 digit. The encoding is the partition key used by the entropy
/// scorer, so it doubles as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The pattern indicating a win (all correct)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Build a pattern from individual feedback values.
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Correct => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Compute the feedback pattern for a guess against a secret.
    ///
    /// Two passes. The first marks greens and consumes the matched
    /// letters from the secret's remaining-letter multiset. The second
    /// marks a yellow only while unconsumed copies of the letter remain,
    /// so a letter guessed twice against a secret that holds it once
    /// yields exactly one non-gray mark.
    pub fn calculate(guess: Word, secret: Word) -> Self {
        let guess_letters = guess.letters();
        let secret_letters = secret.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut secret_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess_letters[i] == secret_letters[i] {
                feedback[i] = Feedback::Correct;
            } else {
                let idx = (secret_letters[i] - b'a') as usize;
                secret_remaining[idx] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = (guess_letters[i] - b'a') as usize;
                if secret_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Unpack into per-position feedback values.
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// The encoded value, usable as a partition-array index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this pattern is a win (all correct).
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a boundary feedback string like `"GYBBB"`.
    ///
    /// Wrong length or a symbol outside G/Y/B is an input error; nothing
    /// is coerced.
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        if s.chars().count() != WORD_LENGTH {
            return Err(WordleError::InvalidFeedback(s.to_string()));
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_char(c)
                .ok_or_else(|| WordleError::InvalidFeedback(s.to_string()))?;
        }
        Ok(Self::new(feedbacks))
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols: String = self.to_feedbacks().iter().map(|fb| fb.to_char()).collect();
        write!(f, "{}", symbols)
    }
}
