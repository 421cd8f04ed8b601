//! Event and observer system.
//!
//! The engine never reaches into rendering code. Instead it fires
//! [`RoundEvent`]s into an [`ObserverRegistry`], and UI layers (keyboard,
//! audio, animation) subscribe as [`RoundObserver`]s.
//!
//! ## Example Usage
//!
//! ```
//! use hangman_engine::core::EngineConfig;
//! use hangman_engine::events::{EventLog, RoundEvent};
//! use hangman_engine::rules::RoundEngine;
//!
//! let mut engine = RoundEngine::new(EngineConfig::standard(), 42).unwrap();
//! let log = EventLog::shared();
//! engine.subscribe(Box::new(log.clone()));
//!
//! let round = engine.start_round("easy").unwrap();
//! let (_round, _outcome) = engine.guess(&round, 'e');
//!
//! let events = log.borrow();
//! assert!(matches!(events.events()[0], RoundEvent::RoundStarted { .. }));
//! assert!(matches!(events.events()[1], RoundEvent::GuessResolved { .. }));
//! ```

pub mod event;
pub mod registry;

pub use event::RoundEvent;
pub use registry::{EventLog, ObserverId, ObserverRegistry, RoundObserver};
