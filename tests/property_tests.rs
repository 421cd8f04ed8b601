//! Property tests for round invariants.
//!
//! Random words, limits and guess sequences (including junk input and
//! repeats) are played through the engine; every intermediate round must
//! satisfy the invariants.

use proptest::prelude::*;

use hangman_engine::core::EngineConfig;
use hangman_engine::{Outcome, Rejection, Round, RoundEngine, RoundStatus, PLACEHOLDER};

fn engine() -> RoundEngine {
    RoundEngine::new(EngineConfig::standard(), 0).unwrap()
}

fn guess_input() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => prop::char::range('a', 'z'),
        2 => prop::char::range('A', 'Z'),
        1 => prop::sample::select(vec!['1', ' ', '_', '!', 'é', 'ß']),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        word in "[a-z]{1,12}",
        limit in 1u32..10,
        inputs in prop::collection::vec(guess_input(), 0..40),
    ) {
        let mut engine = engine();
        let mut round = Round::new(&word, limit).unwrap();

        for input in inputs {
            let before = round.clone();
            let (next, outcome) = engine.guess(&round, input);

            prop_assert!(next.check_invariants().is_ok(), "{:?}", next.check_invariants());

            // Counters are monotonic and bounded
            prop_assert!(next.wrong_count() >= before.wrong_count());
            prop_assert!(next.wrong_count() <= next.wrong_limit());
            prop_assert!(next.guessed_count() >= before.guessed_count());

            // Status implications
            match next.status() {
                RoundStatus::Won => {
                    prop_assert!(!next.mask().contains(&PLACEHOLDER));
                }
                RoundStatus::Lost => {
                    prop_assert_eq!(next.wrong_count(), next.wrong_limit());
                }
                RoundStatus::InProgress => {}
            }

            match outcome {
                Outcome::Rejected(_) => {
                    prop_assert_eq!(&next, &before);
                }
                Outcome::Correct { .. } => {
                    // Only the mask changed
                    prop_assert_eq!(next.wrong_count(), before.wrong_count());
                    prop_assert_eq!(next.guessed_count(), before.guessed_count() + 1);
                    prop_assert!(next.placeholders_remaining() < before.placeholders_remaining());
                }
                Outcome::Incorrect { remaining, .. } => {
                    // Only the counter changed
                    prop_assert_eq!(next.slots(), before.slots());
                    prop_assert_eq!(next.wrong_count(), before.wrong_count() + 1);
                    prop_assert_eq!(next.guessed_count(), before.guessed_count() + 1);
                    prop_assert_eq!(remaining, next.wrong_limit() - next.wrong_count());
                }
            }

            round = next;
        }
    }

    #[test]
    fn prop_repeat_guess_is_idempotent(
        word in "[a-z]{1,10}",
        letter in prop::char::range('a', 'z'),
        repeats in 1usize..10,
    ) {
        let mut engine = engine();
        let round = Round::new(&word, 26).unwrap();
        let (round, first) = engine.guess(&round, letter);
        prop_assert!(!first.is_rejected());

        for _ in 0..repeats {
            let (next, outcome) = engine.guess(&round, letter);
            if round.is_over() {
                prop_assert_eq!(outcome, Outcome::Rejected(Rejection::GameAlreadyOver));
            } else {
                prop_assert_eq!(outcome, Outcome::Rejected(Rejection::AlreadyGuessed(letter)));
            }
            prop_assert_eq!(&next, &round);
        }
    }

    #[test]
    fn prop_terminal_rounds_are_stable(
        word in "[a-z]{1,8}",
        limit in 1u32..4,
        inputs in prop::collection::vec(guess_input(), 1..20),
    ) {
        let mut engine = engine();
        let mut round = Round::new(&word, limit).unwrap();

        // Drive to a terminal state with the whole alphabet
        for letter in 'a'..='z' {
            if round.is_over() {
                break;
            }
            engine.guess_in_place(&mut round, letter);
        }
        prop_assert!(round.is_over());
        prop_assert_eq!(round.revealed_secret(), Some(word.as_str()));

        let frozen = round.clone();
        for input in inputs {
            let outcome = engine.guess_in_place(&mut round, input);
            prop_assert_eq!(outcome, Outcome::Rejected(Rejection::GameAlreadyOver));
        }
        prop_assert_eq!(round, frozen);
    }

    #[test]
    fn prop_snapshot_restores_round(
        word in "[a-z]{1,12}",
        limit in 1u32..10,
        inputs in prop::collection::vec(prop::char::range('a', 'z'), 0..20),
    ) {
        let mut engine = engine();
        let mut round = Round::new(&word, limit).unwrap();
        for input in inputs {
            engine.guess_in_place(&mut round, input);
        }

        let restored = Round::from_bytes(&round.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(restored, round);
    }
}
