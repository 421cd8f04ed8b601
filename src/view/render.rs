//! Text rendering of a round.
//!
//! Pure functions from `&Round` to display strings. Letters are shown
//! uppercase; the engine itself only deals in lowercase.

use serde::{Deserialize, Serialize};

use crate::round::{Outcome, Rejection, Round, RoundStatus, PLACEHOLDER};

/// Colour class of a status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Neutral,
    Good,
    Bad,
}

/// Status text plus its tone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One key of the on-screen keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub letter: char,
    pub enabled: bool,
}

/// The word as shown to the player: `"C _ T"`.
///
/// On a loss the whole secret is shown instead of the mask.
#[must_use]
pub fn word_display(round: &Round) -> String {
    if round.status() == RoundStatus::Lost {
        if let Some(secret) = round.revealed_secret() {
            return spaced(secret.chars().map(|c| c.to_ascii_uppercase()));
        }
    }
    spaced(
        round
            .slots()
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, |c| c.to_ascii_uppercase())),
    )
}

/// `"Used letters: A C T"`, or a dash when nothing has been guessed.
#[must_use]
pub fn used_letters_line(round: &Round) -> String {
    if round.guessed_count() == 0 {
        return "Used letters: –".to_string();
    }
    format!(
        "Used letters: {}",
        spaced(round.guessed_letters().map(|c| c.to_ascii_uppercase()))
    )
}

/// `"Attempts: 2 / 6"`.
#[must_use]
pub fn attempts_line(round: &Round) -> String {
    format!("Attempts: {} / {}", round.wrong_count(), round.wrong_limit())
}

/// Status message for the round, given the most recent outcome.
#[must_use]
pub fn status_line(round: &Round, last: Option<&Outcome>) -> StatusLine {
    let secret = round
        .revealed_secret()
        .unwrap_or_default()
        .to_ascii_uppercase();

    match round.status() {
        RoundStatus::Won => {
            return StatusLine::new(
                format!("You win! The word was \"{secret}\". Press Enter or \"New Game\" to play again."),
                Tone::Good,
            );
        }
        RoundStatus::Lost => {
            return StatusLine::new(
                format!("Game over! The word was \"{secret}\". Press Enter or \"New Game\" to try again."),
                Tone::Bad,
            );
        }
        RoundStatus::InProgress => {}
    }

    match last {
        None => StatusLine::new("Game started! Pick a letter.", Tone::Neutral),
        Some(Outcome::Correct { letter, .. }) => StatusLine::new(
            format!("Nice! \"{}\" is in the word.", letter.to_ascii_uppercase()),
            Tone::Good,
        ),
        Some(Outcome::Incorrect { letter, remaining, .. }) => StatusLine::new(
            format!(
                "Nope! \"{}\" is not in the word. {} wrong guess{} left.",
                letter.to_ascii_uppercase(),
                remaining,
                if *remaining == 1 { "" } else { "es" }
            ),
            Tone::Bad,
        ),
        Some(Outcome::Rejected(Rejection::AlreadyGuessed(letter))) => StatusLine::new(
            format!(
                "\"{}\" was already guessed. Pick another letter.",
                letter.to_ascii_uppercase()
            ),
            Tone::Neutral,
        ),
        Some(Outcome::Rejected(Rejection::InvalidInput)) => {
            StatusLine::new("Pick a single letter from A to Z.", Tone::Neutral)
        }
        Some(Outcome::Rejected(Rejection::GameAlreadyOver)) => {
            StatusLine::new("This round is over. Start a new game.", Tone::Neutral)
        }
    }
}

/// The 26 letter keys. Guessed letters are disabled, as is every key
/// once the round is over.
#[must_use]
pub fn keyboard(round: &Round) -> Vec<KeyState> {
    ('a'..='z')
        .map(|letter| KeyState {
            letter,
            enabled: !round.is_over() && !round.has_guessed(letter),
        })
        .collect()
}

/// Number of gallows body parts to draw.
#[must_use]
pub fn gallows_stage(round: &Round) -> u32 {
    round.wrong_count()
}

fn spaced(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_after(word: &str, limit: u32, letters: &str) -> (Round, Option<Outcome>) {
        let mut round = Round::new(word, limit).unwrap();
        let mut last = None;
        for c in letters.chars() {
            last = Some(round.apply_guess(c));
        }
        (round, last)
    }

    #[test]
    fn test_word_display() {
        let (round, _) = round_after("cat", 8, "");
        assert_eq!(word_display(&round), "_ _ _");

        let (round, _) = round_after("cat", 8, "t");
        assert_eq!(word_display(&round), "_ _ T");
    }

    #[test]
    fn test_word_display_reveals_secret_on_loss() {
        let (round, _) = round_after("dog", 1, "z");
        assert_eq!(round.mask(), vec!['_', '_', '_']);
        assert_eq!(word_display(&round), "D O G");
    }

    #[test]
    fn test_used_letters_line() {
        let (round, _) = round_after("cat", 8, "");
        assert_eq!(used_letters_line(&round), "Used letters: –");

        let (round, _) = round_after("cat", 8, "tZa");
        assert_eq!(used_letters_line(&round), "Used letters: A T Z");
    }

    #[test]
    fn test_attempts_line() {
        let (round, _) = round_after("cat", 6, "xy");
        assert_eq!(attempts_line(&round), "Attempts: 2 / 6");
        assert_eq!(gallows_stage(&round), 2);
    }

    #[test]
    fn test_status_messages() {
        let (round, last) = round_after("cat", 8, "");
        assert_eq!(
            status_line(&round, last.as_ref()),
            StatusLine::new("Game started! Pick a letter.", Tone::Neutral)
        );

        let (round, last) = round_after("cat", 8, "a");
        assert_eq!(
            status_line(&round, last.as_ref()),
            StatusLine::new("Nice! \"A\" is in the word.", Tone::Good)
        );

        let (round, last) = round_after("cat", 3, "x");
        assert_eq!(
            status_line(&round, last.as_ref()).text,
            "Nope! \"X\" is not in the word. 2 wrong guesses left."
        );

        let (round, last) = round_after("cat", 3, "xy");
        let line = status_line(&round, last.as_ref());
        assert_eq!(line.text, "Nope! \"Y\" is not in the word. 1 wrong guess left.");
        assert_eq!(line.tone, Tone::Bad);
    }

    #[test]
    fn test_terminal_status_messages() {
        let (round, last) = round_after("cat", 8, "cat");
        assert_eq!(
            status_line(&round, last.as_ref()),
            StatusLine::new(
                "You win! The word was \"CAT\". Press Enter or \"New Game\" to play again.",
                Tone::Good
            )
        );

        let (round, last) = round_after("dog", 1, "z");
        assert_eq!(
            status_line(&round, last.as_ref()),
            StatusLine::new(
                "Game over! The word was \"DOG\". Press Enter or \"New Game\" to try again.",
                Tone::Bad
            )
        );

        // A rejected guess after the end keeps the final message
        let rejected = Outcome::Rejected(Rejection::GameAlreadyOver);
        assert_eq!(status_line(&round, Some(&rejected)).tone, Tone::Bad);
    }

    #[test]
    fn test_rejection_messages() {
        let (round, last) = round_after("cat", 8, "aa");
        assert_eq!(
            status_line(&round, last.as_ref()).text,
            "\"A\" was already guessed. Pick another letter."
        );

        let (round, last) = round_after("cat", 8, "1");
        assert_eq!(status_line(&round, last.as_ref()).text, "Pick a single letter from A to Z.");
    }

    #[test]
    fn test_keyboard() {
        let (round, _) = round_after("cat", 8, "ax");
        let keys = keyboard(&round);
        assert_eq!(keys.len(), 26);
        assert!(!keys[0].enabled);
        assert!(keys[1].enabled);
        assert!(!keys[23].enabled);
        assert_eq!(keys[23].letter, 'x');

        let (round, _) = round_after("a", 8, "a");
        assert!(keyboard(&round).iter().all(|k| !k.enabled));
    }
}
