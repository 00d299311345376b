/// Property-based tests for combo analysis and legal move generation
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::{analyze, can_beat};
use crate::domain::legal_moves::{fallback_move, generate_legal_moves};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: analysis does not depend on card order
    #[test]
    fn prop_analyze_is_order_invariant(
        (cards, permuted) in test_gens::unique_cards_up_to(5)
            .prop_flat_map(|c| (Just(c.clone()), test_gens::shuffled(c)))
    ) {
        prop_assert_eq!(analyze(&cards), analyze(&permuted));
    }

    /// Property: any valid combo may lead
    #[test]
    fn prop_valid_combo_can_lead(cards in test_gens::unique_cards_up_to(4)) {
        prop_assert_eq!(can_beat(&cards, None), analyze(&cards).is_some());
    }

    /// Property: every generated lead is a valid combo of at most four distinct hand cards
    #[test]
    fn prop_leads_are_valid(hand in test_gens::hand()) {
        let moves = generate_legal_moves(&hand, None);
        // Every single is always a legal lead.
        prop_assert!(moves.iter().filter(|m| m.len() == 1).count() == hand.len());
        let mut keys = HashSet::new();
        for mv in &moves {
            prop_assert!(can_beat(mv, None));
            prop_assert!(mv.iter().all(|c| hand.contains(c)));
            let mut key: Vec<_> = mv.iter().map(|c| c.id.clone()).collect();
            key.sort();
            prop_assert!(keys.insert(key), "duplicate move {:?}", mv);
        }
    }

    /// Property: generated responses always beat the trick and match its size
    #[test]
    fn prop_responses_beat_the_trick((hand, last) in test_gens::hand_and_trick()) {
        let moves = generate_legal_moves(&hand, Some(&last));
        for mv in &moves {
            prop_assert_eq!(mv.len(), last.cards.len());
            prop_assert!(can_beat(mv, Some(&last)));
        }
        if let Some(fallback) = fallback_move(&hand, Some(&last)) {
            prop_assert!(can_beat(&fallback, Some(&last)));
            prop_assert!(!moves.is_empty());
        }
    }
}
