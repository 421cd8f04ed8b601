//! Engine configuration types.
//!
//! The engine is configured at startup by providing:
//! - `Difficulty`: The named tiers a player can pick from
//! - `TierConfig`: The word pool and wrong-guess limit for one tier
//! - `EngineConfig`: All tiers together
//!
//! Configuration is read-only once a `RoundEngine` has been built from it.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Difficulty tier. Selects a word pool and a wrong-guess limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Parse a tier name. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// A word in a pool, optionally paired with a hint or question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Secret word, lowercased.
    pub word: String,

    /// Informational text shown alongside the round.
    pub hint: Option<String>,
}

impl WordEntry {
    /// Create an entry. The word is trimmed and lowercased.
    pub fn new(word: impl AsRef<str>) -> Self {
        Self {
            word: word.as_ref().trim().to_lowercase(),
            hint: None,
        }
    }

    /// Attach a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check that the word can be played: non-empty, ASCII letters only.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_word(&self.word)
    }
}

pub(crate) fn validate_word(word: &str) -> Result<(), ConfigError> {
    if word.is_empty() {
        return Err(ConfigError::InvalidWord {
            word: word.to_string(),
            reason: "word is empty",
        });
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(ConfigError::InvalidWord {
            word: word.to_string(),
            reason: "word must contain only letters a-z",
        });
    }
    Ok(())
}

/// Word pool and wrong-guess limit for one difficulty tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Wrong guesses allowed before the round is lost.
    pub wrong_limit: u32,

    /// Candidate words. One is picked uniformly per round.
    pub words: Vec<WordEntry>,
}

impl TierConfig {
    /// Create a tier with an empty pool.
    pub fn new(wrong_limit: u32) -> Self {
        Self {
            wrong_limit,
            words: Vec::new(),
        }
    }

    /// Add a word without a hint.
    #[must_use]
    pub fn with_word(mut self, word: impl AsRef<str>) -> Self {
        self.words.push(WordEntry::new(word));
        self
    }

    /// Add a full entry.
    #[must_use]
    pub fn with_entry(mut self, entry: WordEntry) -> Self {
        self.words.push(entry);
        self
    }

    /// Add several words without hints.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(words.into_iter().map(WordEntry::new));
        self
    }
}

/// Complete engine configuration: one `TierConfig` per difficulty.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    tiers: FxHashMap<Difficulty, TierConfig>,
}

impl EngineConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in word pools.
    ///
    /// | Tier | Words | Wrong limit |
    /// |---|---|---|
    /// | easy | 10 | 8 |
    /// | medium | 13 | 6 |
    /// | hard | 12 | 5 |
    pub fn standard() -> Self {
        Self::new()
            .with_tier(
                Difficulty::Easy,
                TierConfig::new(8).with_words([
                    "cat", "dog", "tree", "bird", "moon", "sun", "house", "water", "pizza", "game",
                ]),
            )
            .with_tier(
                Difficulty::Medium,
                TierConfig::new(6).with_words([
                    "planet", "rocket", "winter", "summer", "garden", "jungle", "window", "dragon",
                    "castle", "pirate", "switch", "decimal", "sample",
                ]),
            )
            .with_tier(
                Difficulty::Hard,
                TierConfig::new(5).with_words([
                    "mystery", "rhythm", "oxygen", "galaxy", "phantom", "complex", "zealous",
                    "jukebox", "vortex", "pixelate", "hardware", "software",
                ]),
            )
    }

    /// Set the configuration for a tier, replacing any previous one.
    #[must_use]
    pub fn with_tier(mut self, difficulty: Difficulty, tier: TierConfig) -> Self {
        self.tiers.insert(difficulty, tier);
        self
    }

    /// Get a tier's configuration.
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> Option<&TierConfig> {
        self.tiers.get(&difficulty)
    }

    /// Configured tiers, easiest first.
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        Difficulty::ALL
            .into_iter()
            .filter(|d| self.tiers.contains_key(d))
    }

    /// Validate every configured tier.
    ///
    /// Tiers are checked easiest first so the reported error is stable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in self.difficulties() {
            let Some(tier) = self.tiers.get(&difficulty) else {
                continue;
            };
            if tier.wrong_limit == 0 {
                return Err(ConfigError::ZeroWrongLimit(difficulty));
            }
            if tier.words.is_empty() {
                return Err(ConfigError::EmptyPool(difficulty));
            }
            for entry in &tier.words {
                entry.validate()?;
            }
        }
        Ok(())
    }

    /// Parse a word pool file.
    ///
    /// ```
    /// use hangman_engine::core::{Difficulty, EngineConfig};
    ///
    /// let config = EngineConfig::from_toml_str(r#"
    ///     [tiers.easy]
    ///     wrong_limit = 8
    ///     words = ["cat", { word = "moon", hint = "Orbits the earth" }]
    /// "#).unwrap();
    ///
    /// let easy = config.tier(Difficulty::Easy).unwrap();
    /// assert_eq!(easy.words.len(), 2);
    /// assert_eq!(easy.words[1].hint.as_deref(), Some("Orbits the earth"));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: PoolFile = toml::from_str(source)?;

        let mut config = Self::new();
        for (name, tier) in file.tiers {
            let difficulty: Difficulty = name.parse()?;
            if config.tiers.contains_key(&difficulty) {
                return Err(ConfigError::DuplicateTier(difficulty));
            }
            let words = tier.words.into_iter().map(WordEntry::from).collect();
            config = config.with_tier(
                difficulty,
                TierConfig {
                    wrong_limit: tier.wrong_limit,
                    words,
                },
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a word pool file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

// === Pool file format ===

#[derive(Deserialize)]
struct PoolFile {
    #[serde(default)]
    tiers: BTreeMap<String, TierFile>,
}

#[derive(Deserialize)]
struct TierFile {
    wrong_limit: u32,
    #[serde(default)]
    words: Vec<WordSpec>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordSpec {
    Plain(String),
    Detailed {
        word: String,
        #[serde(default)]
        hint: Option<String>,
    },
}

impl From<WordSpec> for WordEntry {
    fn from(spec: WordSpec) -> Self {
        match spec {
            WordSpec::Plain(word) => WordEntry::new(word),
            WordSpec::Detailed { word, hint } => WordEntry {
                hint,
                ..WordEntry::new(word)
            },
        }
    }
}
