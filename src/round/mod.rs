//! Round state and guess outcomes.
//!
//! A `Round` is a single owned value per game. It is created by
//! `RoundEngine::start_round` (or `Round::new` for a fixed word) and
//! replaced wholesale when a new game starts.

pub mod outcome;
pub mod state;

pub use outcome::{Outcome, Rejection};
pub use state::{Round, RoundStatus, PLACEHOLDER};
