//! Guess outcomes.
//!
//! Every call to `guess` is classified as exactly one `Outcome`.
//! Rejections are ordinary values: they describe a no-op, not a failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a guess was ignored. The round is never changed by a rejected guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    /// The letter was already submitted this round.
    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),

    /// The round is already won or lost.
    #[error("the round is already over")]
    GameAlreadyOver,

    /// Not a single letter a-z.
    #[error("guess must be a single letter a-z")]
    InvalidInput,
}

/// Classification of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The letter occurs in the word.
    Correct {
        letter: char,
        /// Number of positions revealed by this guess.
        revealed: usize,
        /// True if this guess completed the word.
        win: bool,
    },

    /// The letter does not occur in the word.
    Incorrect {
        letter: char,
        /// Wrong guesses left before the round is lost.
        remaining: u32,
        /// True if this guess used up the last wrong guess.
        lose: bool,
    },

    /// The guess was ignored.
    Rejected(Rejection),
}

impl Outcome {
    /// The normalized letter this outcome is about, if the guess was accepted.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        match self {
            Outcome::Correct { letter, .. } | Outcome::Incorrect { letter, .. } => Some(*letter),
            Outcome::Rejected(_) => None,
        }
    }

    /// Check if the guess was ignored.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Check if the guess ended the round (win or loss).
    #[must_use]
    pub fn ends_round(&self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// Positions revealed by a correct guess.
    #[must_use]
    pub fn revealed(&self) -> Option<usize> {
        match self {
            Outcome::Correct { revealed, .. } => Some(*revealed),
            _ => None,
        }
    }

    /// Wrong guesses left after an incorrect guess.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Outcome::Incorrect { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }

    /// Check if the guess completed the word.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Correct { win: true, .. })
    }

    /// Check if the guess used up the last wrong guess.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Incorrect { lose: true, .. })
    }

    /// Get the rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
