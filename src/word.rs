//! Word and dictionary types.
//!
//! A [`Word`] is five lowercase ASCII letters, validated once at the
//! boundary. The [`Dictionary`] holds the guess set and the answer set,
//! loaded once and immutable for the process lifetime.

use std::fmt;
use std::str::FromStr;

use crate::{WordleError, WORD_LENGTH};

/// A five-letter word, stored as lowercase ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, normalizing to lowercase. Anything that is not
    /// exactly five ASCII letters is rejected.
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(WordleError::InvalidWord(s.to_string()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(WordleError::InvalidWord(s.to_string()));
            }
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    /// The letters of the word, always lowercase `a-z`.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Letters are validated ASCII at construction.
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

/// The guess set and the answer set.
///
/// Every answer must also be a legal guess. Neither list changes after
/// construction, so a single `Dictionary` can be shared by reference
/// across concurrently running games.
#[derive(Debug, Clone)]
pub struct Dictionary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, WordleError> {
        if guesses.is_empty() || answers.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }
        for &answer in &answers {
            if !guesses.contains(&answer) {
                return Err(WordleError::AnswerNotGuessable(answer));
            }
        }
        Ok(Self { guesses, answers })
    }

    /// Parse two line-delimited word lists. Blank lines are skipped;
    /// any malformed entry fails the whole load.
    pub fn from_lines(guesses: &str, answers: &str) -> Result<Self, WordleError> {
        let parse_list = |text: &str| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Word::parse)
                .collect::<Result<Vec<_>, _>>()
        };
        Self::new(parse_list(guesses)?, parse_list(answers)?)
    }

    /// All words accepted as guesses.
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// All words that may be the secret.
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn is_guessable(&self, word: Word) -> bool {
        self.guesses.contains(&word)
    }
}
