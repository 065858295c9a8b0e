//! # Wordle Entropy
//!
//! An entropy-driven Wordle solver.
//!
//! Each round, the solver ranks admissible guesses by the expected
//! information (Shannon entropy, base 2) of the feedback they would
//! produce against the remaining candidate pool, and plays the best one.
//! A parallel simulation harness replays every dictionary word as the
//! secret to measure how well a given opening word performs.

pub mod entropy;
pub mod feedback;
pub mod game;
pub mod simulation;
pub mod solver;
pub mod word;

pub use feedback::{Feedback, FeedbackPattern};
pub use game::{run_game, Game, GameConfig, GameReport, GameState, GuessRecord, Outcome};
pub use simulation::{simulate_all, simulate_openings, summarize, Summary};
pub use solver::{GuessAnalysis, GuessPolicy, Solver};
pub use word::{Dictionary, Word};

use thiserror::Error;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// The errors the solving core can produce.
///
/// Exhausting the attempt limit is not among them: that is the normal
/// [`Outcome::Failed`] terminal state, counted by the harness.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// A word that is not exactly five ASCII letters.
    #[error("\"{0}\" is not a five-letter word")]
    InvalidWord(String),

    /// A feedback string that is not five symbols from G/Y/B.
    #[error("\"{0}\" is not a valid feedback pattern (need five of G, Y, B)")]
    InvalidFeedback(String),

    /// A word list with no entries.
    #[error("word list is empty")]
    EmptyDictionary,

    /// An answer word missing from the guess list.
    #[error("answer \"{0}\" is missing from the guess list")]
    AnswerNotGuessable(Word),

    /// The observed feedback is consistent with no remaining candidate.
    /// Recoverable: the pool and history are left untouched so the
    /// caller can re-enter the current round.
    #[error("no candidates remain consistent with the observed feedback")]
    EmptyPool,
}

/// Load the dictionary from the embedded word lists.
pub fn load_dictionary() -> Dictionary {
    Dictionary::from_lines(
        include_str!("../dictionary/guesses.txt"),
        include_str!("../dictionary/answers.txt"),
    )
    .expect("embedded word lists are valid")
}
