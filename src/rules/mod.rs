//! Round engine.
//!
//! `RoundEngine` is the only component that changes round state:
//! - Deals rounds from the configured word pools
//! - Classifies guesses and applies the matching transition
//! - Detects wins and losses
//!
//! Everything else (rendering, audio, input) observes its output.

pub mod engine;

pub use engine::RoundEngine;
