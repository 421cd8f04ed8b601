//! Text view layer.
//!
//! A thin consumer of `Round` and `Outcome` values. Terminal and other
//! front ends build a [`RoundView`] after each engine call and render it;
//! nothing here feeds back into the engine.

pub mod render;

pub use render::{
    attempts_line, gallows_stage, keyboard, status_line, used_letters_line, word_display, KeyState,
    StatusLine, Tone,
};

use serde::{Deserialize, Serialize};

use crate::round::{Outcome, Round};

/// Everything a front end needs to draw one frame of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub word: String,
    pub used_letters: String,
    pub attempts: String,
    pub status: StatusLine,
    pub hint: Option<String>,
    pub keys: Vec<KeyState>,
    pub gallows_stage: u32,
}

impl RoundView {
    /// Build the view for a round and the outcome of the latest guess.
    #[must_use]
    pub fn new(round: &Round, last: Option<&Outcome>) -> Self {
        Self {
            word: word_display(round),
            used_letters: used_letters_line(round),
            attempts: attempts_line(round),
            status: status_line(round, last),
            hint: round.hint().map(str::to_string),
            keys: keyboard(round),
            gallows_stage: gallows_stage(round),
        }
    }
}

impl std::fmt::Display for RoundView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.word)?;
        if let Some(hint) = &self.hint {
            writeln!(f, "Hint: {hint}")?;
        }
        writeln!(f, "{}", self.attempts)?;
        writeln!(f, "{}", self.used_letters)?;
        write!(f, "{}", self.status.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_view_display() {
        let round = Round::new("cat", 8).unwrap().with_hint("Says meow");
        let view = RoundView::new(&round, None);

        assert_eq!(view.gallows_stage, 0);
        assert_eq!(view.keys.len(), 26);
        assert_eq!(
            view.to_string(),
            "_ _ _\nHint: Says meow\nAttempts: 0 / 8\nUsed letters: –\nGame started! Pick a letter."
        );
    }
}
