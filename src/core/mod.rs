//! Core engine types: configuration, RNG, errors.
//!
//! Everything here is independent of any single round. A `RoundEngine`
//! is built from an `EngineConfig` and a `GameRng`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, EngineConfig, TierConfig, WordEntry};
pub use error::{ConfigError, InvariantError, SnapshotError};
pub use rng::{GameRng, GameRngState};
