//! The `Round` aggregate: one play-through from word selection to Won/Lost.
//!
//! A round owns the secret word, a per-position reveal mask, the set of
//! guessed letters and the wrong-guess counter. It is cheap to clone:
//! the guess set is a persistent `im::OrdSet` and the mask is a `SmallVec`
//! that stays inline for ordinary word lengths.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::{Outcome, Rejection};
use crate::core::config::{validate_word, Difficulty, WordEntry};
use crate::core::error::{ConfigError, InvariantError, SnapshotError};

/// Marker for a position that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Round lifecycle. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Check if the round has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::InProgress => f.write_str("in progress"),
            RoundStatus::Won => f.write_str("won"),
            RoundStatus::Lost => f.write_str("lost"),
        }
    }
}

/// State of a single round.
///
/// ## Invariants
///
/// - `status == Won` iff every position is revealed
/// - `status == Lost` iff `wrong_count == wrong_limit` and the word is incomplete
/// - `wrong_count` counts exactly the guessed letters absent from the word
/// - A position is revealed iff its letter has been guessed
///
/// Deserialization checks these, so a decoded round is always consistent.
/// Use [`Round::check_invariants`] to verify a round built by other means.
///
/// ## Example
///
/// ```
/// use hangman_engine::round::{Round, RoundStatus};
///
/// let round = Round::new("cat", 8).unwrap();
/// assert_eq!(round.mask(), vec!['_', '_', '_']);
/// assert_eq!(round.status(), RoundStatus::InProgress);
/// assert_eq!(round.revealed_secret(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundData")]
pub struct Round {
    difficulty: Option<Difficulty>,
    secret: String,
    revealed: SmallVec<[Option<char>; 16]>,
    guessed: OrdSet<char>,
    wrong_count: u32,
    wrong_limit: u32,
    status: RoundStatus,
    hint: Option<String>,
}

impl Round {
    /// Create a round for a specific word.
    ///
    /// The word is trimmed and lowercased. It must be non-empty and made of
    /// letters a-z only, and `wrong_limit` must be at least 1.
    pub fn new(word: &str, wrong_limit: u32) -> Result<Self, ConfigError> {
        let entry = WordEntry::new(word);
        entry.validate()?;
        if wrong_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self::from_entry(None, &entry, wrong_limit))
    }

    /// Build a round from an already-validated pool entry.
    pub(crate) fn from_entry(difficulty: Option<Difficulty>, entry: &WordEntry, wrong_limit: u32) -> Self {
        Self {
            difficulty,
            secret: entry.word.clone(),
            revealed: SmallVec::from_elem(None, entry.word.len()),
            guessed: OrdSet::new(),
            wrong_count: 0,
            wrong_limit,
            status: RoundStatus::InProgress,
            hint: entry.hint.clone(),
        }
    }

    /// Attach a hint or question.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Record the tier this round belongs to.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    // === Accessors ===

    /// Tier the round was dealt from, if any.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Hint or question attached to the word.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Check if the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn wrong_limit(&self) -> u32 {
        self.wrong_limit
    }

    /// Wrong guesses left before the round is lost.
    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.wrong_limit.saturating_sub(self.wrong_count)
    }

    /// Number of letters in the secret word.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.revealed.len()
    }

    /// Per-position reveal state. `None` is a masked position.
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// The reveal mask with [`PLACEHOLDER`] for masked positions.
    #[must_use]
    pub fn mask(&self) -> Vec<char> {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Number of positions still masked.
    #[must_use]
    pub fn placeholders_remaining(&self) -> usize {
        self.revealed.iter().filter(|slot| slot.is_none()).count()
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Number of distinct letters guessed.
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }

    /// Check if a letter (any case) has been guessed.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_lowercase())
    }

    /// The raw secret word, available only once the round is over.
    ///
    /// On a loss this is how callers show the word. The mask itself keeps
    /// its placeholders.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.status.is_over().then_some(self.secret.as_str())
    }

    // === Transition ===

    /// Apply one guess. Rejected guesses leave the round untouched.
    pub(crate) fn apply_guess(&mut self, input: char) -> Outcome {
        if self.status.is_over() {
            return Outcome::Rejected(Rejection::GameAlreadyOver);
        }
        if !input.is_ascii_alphabetic() {
            return Outcome::Rejected(Rejection::InvalidInput);
        }

        let letter = input.to_ascii_lowercase();
        if self.guessed.contains(&letter) {
            return Outcome::Rejected(Rejection::AlreadyGuessed(letter));
        }
        self.guessed.insert(letter);

        let mut revealed = 0;
        for (slot, secret) in self.revealed.iter_mut().zip(self.secret.chars()) {
            if secret == letter {
                *slot = Some(letter);
                revealed += 1;
            }
        }

        if revealed > 0 {
            let win = self.revealed.iter().all(Option::is_some);
            if win {
                self.status = RoundStatus::Won;
            }
            Outcome::Correct { letter, revealed, win }
        } else {
            self.wrong_count += 1;
            let lose = self.wrong_count >= self.wrong_limit;
            if lose {
                self.status = RoundStatus::Lost;
            }
            Outcome::Incorrect {
                letter,
                remaining: self.remaining_guesses(),
                lose,
            }
        }
    }

    // === Validation & snapshots ===

    /// Verify every round invariant, reporting the first violation.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Err(ConfigError::InvalidWord { reason, .. }) = validate_word(&self.secret) {
            return Err(InvariantError::Secret(reason));
        }

        if self.revealed.len() != self.secret.len() {
            return Err(InvariantError::MaskLength {
                mask: self.revealed.len(),
                word: self.secret.len(),
            });
        }
        if self.wrong_limit == 0 {
            return Err(InvariantError::ZeroLimit);
        }
        if self.wrong_count > self.wrong_limit {
            return Err(InvariantError::CountOverLimit {
                count: self.wrong_count,
                limit: self.wrong_limit,
            });
        }
        if let Some(bad) = self.guessed.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(InvariantError::BadGuess(*bad));
        }

        for (position, (slot, actual)) in self.revealed.iter().zip(self.secret.chars()).enumerate() {
            match *slot {
                Some(shown) if shown != actual => {
                    return Err(InvariantError::WrongLetter { position, shown, actual });
                }
                Some(_) => {}
                None if self.guessed.contains(&actual) => {
                    return Err(InvariantError::MaskedGuess { position, letter: actual });
                }
                None => {}
            }
        }
        for c in self.revealed.iter().flatten() {
            if !self.guessed.contains(c) {
                return Err(InvariantError::UnguessedReveal(*c));
            }
        }

        let misses = self
            .guessed
            .iter()
            .filter(|c| !self.secret.contains(**c))
            .count();
        if misses != self.wrong_count as usize {
            return Err(InvariantError::MissCount {
                count: self.wrong_count,
                misses,
            });
        }

        let complete = self.placeholders_remaining() == 0;
        let exhausted = self.wrong_count == self.wrong_limit;
        let expected = match (complete, exhausted) {
            (true, false) => RoundStatus::Won,
            (false, true) => RoundStatus::Lost,
            (false, false) => RoundStatus::InProgress,
            (true, true) => return Err(InvariantError::CompleteAndExhausted),
        };
        if self.status != expected {
            return Err(InvariantError::Status {
                actual: self.status,
                expected,
            });
        }

        Ok(())
    }

    /// Encode the round as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Restore a round from a snapshot. Invariants are checked.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let data: RoundData = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        Ok(Round::try_from(data)?)
    }
}

/// Unchecked wire form of a [`Round`].
#[derive(Deserialize)]
struct RoundData {
    difficulty: Option<Difficulty>,
    secret: String,
    revealed: SmallVec<[Option<char>; 16]>,
    guessed: OrdSet<char>,
    wrong_count: u32,
    wrong_limit: u32,
    status: RoundStatus,
    hint: Option<String>,
}

impl TryFrom<RoundData> for Round {
    type Error = InvariantError;

    fn try_from(data: RoundData) -> Result<Self, Self::Error> {
        let round = Round {
            difficulty: data.difficulty,
            secret: data.secret,
            revealed: data.revealed,
            guessed: data.guessed,
            wrong_count: data.wrong_count,
            wrong_limit: data.wrong_limit,
            status: data.status,
            hint: data.hint,
        };
        round.check_invariants()?;
        Ok(round)
    }
}
