//! Round events.
//!
//! Events describe state transitions after they happen. Rendering, audio
//! and animation code subscribe to them instead of being called by the
//! engine directly.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::round::Outcome;

/// Something that happened to a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A fresh round was dealt.
    RoundStarted {
        difficulty: Option<Difficulty>,
        word_len: usize,
        wrong_limit: u32,
        hint: Option<String>,
    },

    /// A guess was classified. Fired for rejected guesses too.
    GuessResolved { outcome: Outcome },

    /// The last masked position was revealed.
    RoundWon { secret: String, wrong_count: u32 },

    /// The wrong-guess limit was reached.
    RoundLost { secret: String },
}

impl RoundEvent {
    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RoundEvent::RoundStarted { .. } => "round_started",
            RoundEvent::GuessResolved { .. } => "guess_resolved",
            RoundEvent::RoundWon { .. } => "round_won",
            RoundEvent::RoundLost { .. } => "round_lost",
        }
    }

    /// Check if this event ends a round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundEvent::RoundWon { .. } | RoundEvent::RoundLost { .. })
    }
}
