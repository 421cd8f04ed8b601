//! The round engine.
//!
//! `RoundEngine` deals rounds from the configured pools and resolves
//! guesses against them:
//! - `start_round`: pick a word uniformly from a tier, build a fresh round
//! - `guess`: classify one letter and apply the matching transition
//!
//! Both operations are synchronous and run to completion. Observers are
//! notified inline, after the round has been updated.

use tracing::{debug, info, warn};

use crate::core::{ConfigError, Difficulty, EngineConfig, GameRng, GameRngState, TierConfig};
use crate::events::{ObserverId, ObserverRegistry, RoundEvent, RoundObserver};
use crate::round::{Outcome, Rejection, Round};

/// Deterministic state transition engine for hangman rounds.
///
/// ## Example
///
/// ```
/// use hangman_engine::core::EngineConfig;
/// use hangman_engine::round::RoundStatus;
/// use hangman_engine::rules::RoundEngine;
///
/// let mut engine = RoundEngine::new(EngineConfig::standard(), 7).unwrap();
/// let round = engine.start_round("medium").unwrap();
/// assert_eq!(round.wrong_limit(), 6);
///
/// let (round, outcome) = engine.guess(&round, 'Q');
/// assert!(!outcome.is_rejected());
/// assert!(round.has_guessed('q'));
/// assert_eq!(round.status(), RoundStatus::InProgress);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    config: EngineConfig,
    rng: GameRng,
    observers: ObserverRegistry,
}

impl RoundEngine {
    /// Create an engine with a seeded RNG.
    ///
    /// Fails if any configured tier is invalid.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine with an existing RNG.
    pub fn with_rng(config: EngineConfig, rng: GameRng) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejecting engine configuration");
            return Err(err);
        }

        debug!(
            seed = rng.seed(),
            tiers = config.difficulties().count(),
            "round engine ready"
        );

        Ok(Self {
            config,
            rng,
            observers: ObserverRegistry::new(),
        })
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Capture the RNG position so word selection can be resumed later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Register an observer for round events.
    pub fn subscribe(&mut self, observer: Box<dyn RoundObserver>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // === Starting rounds ===

    /// Start a round for a tier given by name (`"easy"`, `"medium"`, `"hard"`).
    pub fn start_round(&mut self, difficulty: &str) -> Result<Round, ConfigError> {
        let parsed: Difficulty = difficulty.parse().map_err(|err| {
            warn!(requested = difficulty, "unknown difficulty");
            err
        })?;
        self.start_round_for(parsed)
    }

    /// Start a round for a tier.
    pub fn start_round_for(&mut self, difficulty: Difficulty) -> Result<Round, ConfigError> {
        let tier = self
            .config
            .tier(difficulty)
            .ok_or(ConfigError::MissingTier(difficulty))?;
        let round = Self::deal(difficulty, tier, &mut self.rng)?;

        info!(
            %difficulty,
            word_len = round.word_len(),
            wrong_limit = round.wrong_limit(),
            "round started"
        );
        self.observers.notify(&RoundEvent::RoundStarted {
            difficulty: round.difficulty(),
            word_len: round.word_len(),
            wrong_limit: round.wrong_limit(),
            hint: round.hint().map(str::to_string),
        });

        Ok(round)
    }

    /// Pick a word uniformly from a pool and build a fresh round.
    ///
    /// Does not notify observers; use [`RoundEngine::start_round`] for that.
    pub fn deal(difficulty: Difficulty, tier: &TierConfig, rng: &mut GameRng) -> Result<Round, ConfigError> {
        if tier.wrong_limit == 0 {
            return Err(ConfigError::ZeroWrongLimit(difficulty));
        }
        let entry = rng
            .choose(&tier.words)
            .ok_or(ConfigError::EmptyPool(difficulty))?;
        entry.validate()?;

        Ok(Round::from_entry(Some(difficulty), entry, tier.wrong_limit))
    }

    // === Guessing ===

    /// Resolve a guess, returning the next round and the outcome.
    ///
    /// The input round is left untouched. Rejected guesses return an
    /// identical copy.
    pub fn guess(&mut self, round: &Round, letter: char) -> (Round, Outcome) {
        let mut next = round.clone();
        let outcome = self.guess_in_place(&mut next, letter);
        (next, outcome)
    }

    /// Resolve a guess by mutating the round directly.
    pub fn guess_in_place(&mut self, round: &mut Round, letter: char) -> Outcome {
        let outcome = round.apply_guess(letter);
        self.announce(round, outcome);
        outcome
    }

    /// Resolve a guess typed by a user.
    ///
    /// Exactly one character (surrounding whitespace ignored) is guessed.
    /// Anything else is rejected as invalid input.
    pub fn guess_str(&mut self, round: &Round, input: &str) -> (Round, Outcome) {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.guess(round, letter),
            _ => {
                let rejection = if round.is_over() {
                    Rejection::GameAlreadyOver
                } else {
                    Rejection::InvalidInput
                };
                let outcome = Outcome::Rejected(rejection);
                self.announce(round, outcome);
                (round.clone(), outcome)
            }
        }
    }

    fn announce(&mut self, round: &Round, outcome: Outcome) {
        debug!(
            ?outcome,
            wrong_count = round.wrong_count(),
            remaining_masked = round.placeholders_remaining(),
            "guess resolved"
        );
        self.observers.notify(&RoundEvent::GuessResolved { outcome });

        let secret = round.revealed_secret().unwrap_or_default().to_string();
        match outcome {
            Outcome::Correct { win: true, .. } => {
                info!(wrong_count = round.wrong_count(), "round won");
                self.observers.notify(&RoundEvent::RoundWon {
                    secret,
                    wrong_count: round.wrong_count(),
                });
            }
            Outcome::Incorrect { lose: true, .. } => {
                info!(%secret, "round lost");
                self.observers.notify(&RoundEvent::RoundLost { secret });
            }
            _ => {}
        }
    }
}
