//! Legal move enumeration and the minimal fallback move.

use std::collections::HashSet;

use super::cards_logic::{can_beat, group_by_value, PlayedHand};
use super::cards_types::{Card, CardId};
use super::rules::MAX_COMBO_SIZE;

/// Every subset of `hand` that may be played against `last`.
///
/// Leading tries sizes 1 through 4; responding only the size of the trick.
/// Subsets are produced in lexicographic index order per size, so callers
/// that break ties by first occurrence are deterministic.
pub fn generate_legal_moves(hand: &[Card], last: Option<&PlayedHand>) -> Vec<Vec<Card>> {
    let sizes = match last {
        Some(last) => last.cards.len()..=last.cards.len(),
        None => 1..=MAX_COMBO_SIZE,
    };

    let mut legal = Vec::new();
    let mut seen: HashSet<Vec<CardId>> = HashSet::new();
    for size in sizes {
        if size == 0 || size > hand.len() {
            continue;
        }
        for_each_combination(hand.len(), size, |indices| {
            let cards: Vec<Card> = indices.iter().map(|&i| hand[i].clone()).collect();
            if !can_beat(&cards, last) {
                return;
            }
            let mut key: Vec<CardId> = cards.iter().map(|c| c.id.clone()).collect();
            key.sort();
            if seen.insert(key) {
                legal.push(cards);
            }
        });
    }
    legal
}

/// Visit every k-subset of `0..n` in lexicographic order.
fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        visit(&indices);
        // Rightmost position that can still move forward.
        let Some(pos) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return;
        };
        indices[pos] += 1;
        for j in pos + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// The smallest move that keeps the game going.
///
/// Leading: the weakest natural single, or the weakest card when the hand is
/// all wildcards. Responding: the first `n` cards of the weakest same-value
/// group that beats the trick, or `None` (pass).
pub fn fallback_move(hand: &[Card], last: Option<&PlayedHand>) -> Option<Vec<Card>> {
    let mut ordered: Vec<&Card> = hand.iter().collect();
    ordered.sort_by_key(|c| c.value());

    let Some(last) = last else {
        let pick = ordered
            .iter()
            .find(|c| !c.is_wild())
            .or_else(|| ordered.first())?;
        return Some(vec![(*pick).clone()]);
    };

    let required = last.cards.len();
    group_by_value(ordered)
        .into_iter()
        .filter(|(value, group)| *value > last.rank && group.len() >= required)
        .map(|(_, group)| group.into_iter().take(required).cloned().collect::<Vec<_>>())
        .find(|candidate| can_beat(candidate, Some(last)))
}
