//! Observer integration tests.
//!
//! UI layers subscribe to the engine and must see every transition, in
//! order, without the engine knowing anything about them.

use std::cell::RefCell;
use std::rc::Rc;

use hangman_engine::core::{Difficulty, EngineConfig, TierConfig};
use hangman_engine::{EventLog, Outcome, Rejection, RoundEngine, RoundEvent};

fn engine_for(word: &str, limit: u32) -> RoundEngine {
    let config = EngineConfig::new().with_tier(Difficulty::Easy, TierConfig::new(limit).with_word(word));
    RoundEngine::new(config, 0).unwrap()
}

#[test]
fn test_events_for_winning_round() {
    let mut engine = engine_for("cat", 8);
    let log = EventLog::shared();
    engine.subscribe(Box::new(log.clone()));

    let round = engine.start_round("easy").unwrap();
    let (round, _) = engine.guess(&round, 'c');
    let (round, _) = engine.guess(&round, 'a');
    let (_, _) = engine.guess(&round, 't');

    let events = log.borrow().events().to_vec();
    assert_eq!(
        events,
        vec![
            RoundEvent::RoundStarted {
                difficulty: Some(Difficulty::Easy),
                word_len: 3,
                wrong_limit: 8,
                hint: None,
            },
            RoundEvent::GuessResolved {
                outcome: Outcome::Correct { letter: 'c', revealed: 1, win: false },
            },
            RoundEvent::GuessResolved {
                outcome: Outcome::Correct { letter: 'a', revealed: 1, win: false },
            },
            RoundEvent::GuessResolved {
                outcome: Outcome::Correct { letter: 't', revealed: 1, win: true },
            },
            RoundEvent::RoundWon {
                secret: "cat".to_string(),
                wrong_count: 0,
            },
        ]
    );
}

#[test]
fn test_events_for_losing_round() {
    let mut engine = engine_for("dog", 1);
    let log = EventLog::shared();
    engine.subscribe(Box::new(log.clone()));

    let round = engine.start_round("easy").unwrap();
    let (round, _) = engine.guess(&round, 'z');
    let (_, _) = engine.guess(&round, 'd');

    let events = log.borrow().events().to_vec();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[1],
        RoundEvent::GuessResolved {
            outcome: Outcome::Incorrect { letter: 'z', remaining: 0, lose: true },
        }
    );
    assert_eq!(events[2], RoundEvent::RoundLost { secret: "dog".to_string() });
    assert_eq!(
        events[3],
        RoundEvent::GuessResolved {
            outcome: Outcome::Rejected(Rejection::GameAlreadyOver),
        }
    );
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut engine = engine_for("cat", 8);
    let seen = Rc::new(RefCell::new(0usize));

    let counter = seen.clone();
    let id = engine.subscribe(Box::new(move |_: &RoundEvent| *counter.borrow_mut() += 1));

    let round = engine.start_round("easy").unwrap();
    assert_eq!(*seen.borrow(), 1);

    assert!(engine.unsubscribe(id));
    engine.guess(&round, 'c');
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn test_sound_cues_from_outcomes() {
    // Cosmetic feedback keyed off outcomes, the way an audio layer would use it
    let mut engine = engine_for("moon", 2);
    let cues = Rc::new(RefCell::new(Vec::new()));

    let sink = cues.clone();
    engine.subscribe(Box::new(move |event: &RoundEvent| {
        let cue = match event {
            RoundEvent::GuessResolved { outcome: Outcome::Correct { .. } } => Some("correct"),
            RoundEvent::GuessResolved { outcome: Outcome::Incorrect { .. } } => Some("wrong"),
            RoundEvent::RoundWon { .. } => Some("win"),
            RoundEvent::RoundLost { .. } => Some("lose"),
            _ => None,
        };
        if let Some(cue) = cue {
            sink.borrow_mut().push(cue);
        }
    }));

    let mut round = engine.start_round("easy").unwrap();
    for letter in ['o', 'x', 'o', 'm', 'n'] {
        engine.guess_in_place(&mut round, letter);
    }

    assert_eq!(*cues.borrow(), vec!["correct", "wrong", "correct", "correct", "win"]);
}
