//! Error types for configuration and round snapshots.
//!
//! Guess-level problems are not errors: they come back as
//! [`Rejection`](crate::round::Rejection) values and never touch state.

use thiserror::Error;

use super::config::Difficulty;
use crate::round::RoundStatus;

/// Configuration problems. Fatal at startup: no round can be dealt
/// from a configuration that produced one of these.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("difficulty {0} is configured more than once")]
    DuplicateTier(Difficulty),

    #[error("no word pool configured for difficulty {0}")]
    MissingTier(Difficulty),

    #[error("word pool for difficulty {0} is empty")]
    EmptyPool(Difficulty),

    #[error("invalid word '{word}': {reason}")]
    InvalidWord { word: String, reason: &'static str },

    #[error("wrong-guess limit for difficulty {0} must be at least 1")]
    ZeroWrongLimit(Difficulty),

    #[error("wrong-guess limit must be at least 1")]
    ZeroLimit,

    #[error("failed to parse word pool file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems encoding or restoring a round snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode round: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode round: {0}")]
    Decode(bincode::Error),

    #[error("snapshot violates round invariants: {0}")]
    Corrupt(#[from] InvariantError),
}

/// A round whose fields contradict each other.
///
/// Reported by [`Round::check_invariants`](crate::round::Round::check_invariants)
/// and by every deserialization of a `Round`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("secret word is invalid: {0}")]
    Secret(&'static str),

    #[error("mask has {mask} positions but the word has {word}")]
    MaskLength { mask: usize, word: usize },

    #[error("wrong-guess limit is zero")]
    ZeroLimit,

    #[error("wrong count {count} exceeds limit {limit}")]
    CountOverLimit { count: u32, limit: u32 },

    #[error("guessed letter {0:?} is not a-z")]
    BadGuess(char),

    #[error("position {position} shows '{shown}' but the word has '{actual}'")]
    WrongLetter { position: usize, shown: char, actual: char },

    #[error("position {position} is masked but '{letter}' was guessed")]
    MaskedGuess { position: usize, letter: char },

    #[error("'{0}' is revealed but was never guessed")]
    UnguessedReveal(char),

    #[error("wrong count {count} does not match {misses} missed letters")]
    MissCount { count: u32, misses: usize },

    #[error("word is complete and wrong guesses are exhausted")]
    CompleteAndExhausted,

    #[error("status is {actual} but should be {expected}")]
    Status { actual: RoundStatus, expected: RoundStatus },
}
