/// Property-based tests over whole rounds played with random legal moves
use std::collections::HashSet;

use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::state::{GameStatus, Room, RoomSettings};
use crate::domain::tricks::{apply_turn, start_round, PlayerAction};
use crate::domain::{generate_legal_moves, test_prelude};

/// Play one round to completion, checking invariants after every action.
fn play_out(room_seed: u64, move_seed: u64) -> Result<Room, TestCaseError> {
    let mut room = Room::new("0001", "0001", "host", room_seed, RoomSettings::default());
    start_round(&mut room);
    let mut rng = ChaCha20Rng::seed_from_u64(move_seed);
    let mut discarded = 0usize;

    for _ in 0..(DECK_SIZE * 8) {
        if room.status != GameStatus::Playing {
            break;
        }
        let seat = room.turn_index;
        let hand = room.player(seat).hand.clone();
        let moves = generate_legal_moves(&hand, room.last_hand.as_ref());
        // Pass a third of the time when allowed.
        let action = match moves.choose(&mut rng) {
            Some(mv) if room.last_hand.is_none() || rand::Rng::random_ratio(&mut rng, 2, 3) => {
                discarded += mv.len();
                PlayerAction::from_cards(mv)
            }
            _ => PlayerAction::Pass,
        };
        let before = room.player(seat).hand.len();
        apply_turn(&mut room, seat as usize, &action)
            .map_err(|e| TestCaseError::fail(format!("legal action rejected: {e}")))?;

        prop_assert!(room.player(seat).hand.len() <= before);
        prop_assert_eq!(room.cards_in_hands() + discarded, DECK_SIZE);
        if room.status == GameStatus::Playing {
            prop_assert!(!room.current_player().finished);
        }
    }
    Ok(room)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: rounds end, conserve cards and record each finisher once
    #[test]
    fn prop_random_rounds_conclude(room_seed in any::<u64>(), move_seed in any::<u64>()) {
        let room = play_out(room_seed, move_seed)?;
        prop_assert_eq!(room.status, GameStatus::RoundOver);
        prop_assert!(room.outcome.is_some());
        let unique: HashSet<_> = room.winners.iter().collect();
        prop_assert_eq!(unique.len(), room.winners.len());
        for &seat in &room.winners {
            prop_assert!(room.player(seat).finished);
            prop_assert!(room.player(seat).hand.is_empty());
        }
    }
}
