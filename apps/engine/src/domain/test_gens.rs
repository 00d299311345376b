// Proptest generators for domain types.
// Cards are drawn from a real deck so ids stay unique within a generated set.

use proptest::prelude::*;

use crate::domain::cards_logic::{analyze, PlayedHand};
use crate::domain::cards_types::Card;
use crate::domain::dealing::full_deck;
use crate::domain::rules::{Seat, DECK_SIZE, MAX_COMBO_SIZE};

/// Generate a vector of N unique cards from the 54-card deck
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck = full_deck();
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// Generate 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand of 1-9 unique cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(9)
}

/// Generate a seat (0-5)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=5u8
}

/// A hand plus a valid trick on the table that shares no card with it.
pub fn hand_and_trick() -> impl Strategy<Value = (Vec<Card>, PlayedHand)> {
    (1..=MAX_COMBO_SIZE, 1usize..=9, seat(), 0usize..40).prop_flat_map(
        |(trick_size, hand_size, owner, offset)| {
            unique_cards(DECK_SIZE).prop_filter_map("trick must form a combo", move |deck| {
                // Scan same-value runs from a random offset for a combo.
                let mut by_value = deck.clone();
                by_value.sort_by_key(Card::value);
                let trick: Vec<Card> = by_value
                    .windows(trick_size)
                    .skip(offset)
                    .find(|w| analyze(w).is_some())?
                    .to_vec();
                let combo = analyze(&trick)?;
                let hand: Vec<Card> = deck
                    .into_iter()
                    .filter(|c| !trick.contains(c))
                    .take(hand_size)
                    .collect();
                Some((hand, PlayedHand::new(owner, trick, combo)))
            })
        },
    )
}

/// A permutation of the given cards.
pub fn shuffled(cards: Vec<Card>) -> impl Strategy<Value = Vec<Card>> {
    Just(cards).prop_shuffle()
}
