//! # hangman-engine
//!
//! A deterministic round engine for the hangman word-guessing game.
//!
//! ## Design Principles
//!
//! 1. **One owned round**: All state for a game lives in a single `Round`
//!    value that is passed to and returned from the engine. No globals.
//!
//! 2. **Engine is the only writer**: `RoundEngine` deals rounds and
//!    resolves guesses. Rendering, audio and input code only observe
//!    the `Outcome`s and `RoundEvent`s it produces.
//!
//! 3. **Injected randomness**: Word selection uses a seeded `GameRng`,
//!    so the same seed always deals the same words.
//!
//! ## Modules
//!
//! - `core`: Difficulty tiers, word pools, RNG, errors
//! - `round`: The `Round` aggregate and guess `Outcome`s
//! - `rules`: `RoundEngine`
//! - `events`: Observer interface for UI layers
//! - `view`: Text rendering of a round
//!
//! ## Example
//!
//! ```
//! use hangman_engine::{Outcome, Round, RoundEngine, RoundStatus};
//! use hangman_engine::core::EngineConfig;
//!
//! let mut engine = RoundEngine::new(EngineConfig::standard(), 42).unwrap();
//! let round = Round::new("cat", 8).unwrap();
//!
//! let (round, _) = engine.guess(&round, 'c');
//! let (round, _) = engine.guess(&round, 'a');
//! let (round, outcome) = engine.guess(&round, 't');
//!
//! assert_eq!(outcome, Outcome::Correct { letter: 't', revealed: 1, win: true });
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

pub mod core;
pub mod events;
pub mod round;
pub mod rules;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Difficulty, EngineConfig, GameRng, GameRngState, InvariantError, SnapshotError, TierConfig,
    WordEntry,
};

pub use crate::round::{Outcome, Rejection, Round, RoundStatus, PLACEHOLDER};

pub use crate::rules::RoundEngine;

pub use crate::events::{EventLog, ObserverId, ObserverRegistry, RoundEvent, RoundObserver};

pub use crate::view::{RoundView, StatusLine, Tone};
