//! The per-game solve loop.
//!
//! A [`Game`] drives successive guesses against one secret: pick a
//! guess, observe a feedback pattern, shrink the pool, repeat until the
//! pattern is all-green or the attempt limit runs out.

use crate::entropy;
use crate::feedback::FeedbackPattern;
use crate::solver::{GuessAnalysis, GuessPolicy, Solver};
use crate::word::{Dictionary, Word};
use crate::WordleError;

/// Standard attempt limit.
pub const MAX_ATTEMPTS: usize = 6;

/// The opening word played when the caller does not supply one.
pub const DEFAULT_OPENING: &str = "raise";

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Guesses remain and the secret is not yet confirmed.
    Active,
    /// A guess came back all-green.
    Solved,
    /// The attempt limit ran out. A normal outcome, not an error.
    Failed,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Failed,
}

/// One round of the history: the guess, what came back, and how the
/// pool moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessRecord {
    pub round: usize,
    pub guess: Word,
    pub pattern: FeedbackPattern,
    /// Expected information of the guess against the pool it was played
    /// into.
    pub entropy: f64,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Per-game knobs.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// First guess to play without consulting the selector. `None`
    /// means round one pays for a full ranking too.
    pub opening: Option<Word>,
    pub max_attempts: usize,
    pub policy: GuessPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening: None,
            max_attempts: MAX_ATTEMPTS,
            policy: GuessPolicy::default(),
        }
    }
}

/// A single game in progress.
pub struct Game<'a> {
    solver: Solver<'a>,
    history: Vec<GuessRecord>,
    state: GameState,
    config: GameConfig,
}

impl<'a> Game<'a> {
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self {
            solver: Solver::with_policy(dictionary, config.policy),
            history: Vec::new(),
            state: GameState::Active,
            config,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn pool(&self) -> &[Word] {
        self.solver.pool()
    }

    pub fn remaining_count(&self) -> usize {
        self.solver.remaining_count()
    }

    pub fn top_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        self.solver.top_guesses(n)
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn policy(&self) -> GuessPolicy {
        self.solver.policy()
    }

    pub fn set_policy(&mut self, policy: GuessPolicy) {
        self.config.policy = policy;
        self.solver.set_policy(policy);
    }

    /// The guess this game would play next, or `None` once the game is
    /// over.
    ///
    /// Round one plays the configured opening word without ranking
    /// anything; a single remaining candidate is played directly; every
    /// other round goes through the selector.
    pub fn next_guess(&self) -> Option<Word> {
        if self.state != GameState::Active {
            return None;
        }
        if self.history.is_empty() {
            if let Some(opening) = self.config.opening {
                return Some(opening);
            }
        }
        self.solver.best_guess().map(|analysis| analysis.word)
    }

    /// Feed the observed pattern for a guess back into the game.
    ///
    /// Filters the pool, appends to the history, and moves the state
    /// machine. A round either completes in full or, when the feedback
    /// matches no remaining candidate, returns
    /// [`WordleError::EmptyPool`] with pool, history, and state exactly
    /// as they were, so live play can retry the round.
    pub fn apply_feedback(
        &mut self,
        guess: Word,
        pattern: FeedbackPattern,
    ) -> Result<GameState, WordleError> {
        if self.state != GameState::Active {
            return Ok(self.state);
        }

        let pool_before = self.solver.remaining_count();
        let guess_entropy = entropy::entropy_of(guess, self.solver.pool());

        if pattern.is_win() {
            self.state = GameState::Solved;
            self.history.push(GuessRecord {
                round: self.history.len() + 1,
                guess,
                pattern,
                entropy: guess_entropy,
                pool_before,
                pool_after: 1,
            });
            return Ok(self.state);
        }

        self.solver.apply_feedback(guess, pattern)?;

        self.history.push(GuessRecord {
            round: self.history.len() + 1,
            guess,
            pattern,
            entropy: guess_entropy,
            pool_before,
            pool_after: self.solver.remaining_count(),
        });

        if self.history.len() >= self.config.max_attempts {
            self.state = GameState::Failed;
        }
        Ok(self.state)
    }
}

/// Everything a finished simulated game produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub secret: Word,
    pub opening: Option<Word>,
    pub outcome: Outcome,
    pub history: Vec<GuessRecord>,
}

impl GameReport {
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// Play one full game against a known secret, computing feedback
/// internally.
///
/// The secret should be a member of the answer set; a secret outside it
/// eventually empties the pool and surfaces as [`WordleError::EmptyPool`].
pub fn run_game(
    dictionary: &Dictionary,
    secret: Word,
    config: GameConfig,
) -> Result<GameReport, WordleError> {
    let mut game = Game::new(dictionary, config);

    while game.state() == GameState::Active {
        let Some(guess) = game.next_guess() else {
            break;
        };
        let pattern = FeedbackPattern::calculate(guess, secret);
        game.apply_feedback(guess, pattern)?;
    }

    Ok(GameReport {
        secret,
        opening: config.opening,
        outcome: match game.state() {
            GameState::Solved => Outcome::Solved,
            _ => Outcome::Failed,
        },
        history: game.history,
    })
}
