//! Deterministic deck construction and dealing.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::cards_types::{sort_for_display, Card, Rank, Suit};
use super::rules::{Seat, DECK_SIZE, HAND_SIZE, SEATS};

static DECK: Lazy<Vec<Card>> = Lazy::new(build_deck);

/// Full 54-card deck in construction order (`c0`..`c53`).
pub fn full_deck() -> Vec<Card> {
    DECK.clone()
}

fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::SUITED {
            deck.push(Card::canonical(Some(suit), rank));
        }
    }
    deck.push(Card::canonical(None, Rank::SmallJoker));
    deck.push(Card::canonical(None, Rank::BigJoker));
    deck
}

/// Deck shuffled by a ChaCha20 stream seeded with `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal the whole deck, nine cards per seat, each hand sorted strongest first.
pub fn deal_hands(seed: u64) -> [Vec<Card>; SEATS] {
    let deck = shuffled_deck(seed);
    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for (hand, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        let mut dealt = chunk.to_vec();
        sort_for_display(&mut dealt);
        *hand = dealt;
    }
    hands
}

/// Seat holding the heart 4; seat 0 if nobody does.
pub fn opening_leader(hands: &[Vec<Card>]) -> Seat {
    hands
        .iter()
        .position(|hand| {
            hand.iter()
                .any(|c| c.suit == Some(Suit::Hearts) && c.rank == Rank::Four)
        })
        .map_or(0, |seat| seat as Seat)
}
