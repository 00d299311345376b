//! Heuristic: the default deterministic bot for six-seat team play.
//!
//! Every legal move is scored and the best one wins; ties go to the move
//! enumerated first.
//!
//! Leading:
//! - Favour strong, large combos and shedding high-impact cards.
//! - Pay for what the move leaves behind (card values, loose wildcards,
//!   number of distinct ranks).
//! - Reward moves that still leave a bigger combo of the same shape in hand.
//! - Keep trump back unless the hand is trump-heavy.
//!
//! Responding:
//! - Beating the trick is worth a lot; beating it cheaply is worth more.
//! - Fight harder when an opponent is close to finishing, or when the trick
//!   owner keeps winning.
//! - Prefer moves a teammate could still top.
//!
//! Team play:
//! - Support a teammate who is nearly out; do not trump over them.
//! - Stand aside when a teammate leads trump and either they are nearly out
//!   or no opponent is about to finish.
//!
//! Determinism:
//! - No randomness used.

use tracing::debug;

use crate::ai::config::{AiConfig, HeuristicWeights};
use crate::ai::{AiError, AiPlayer};
use crate::domain::cards_logic::{
    analyze, can_beat, contains_trump, group_by_value, is_high_impact, is_trump_move, Combo,
    ComboKind, PlayedHand,
};
use crate::domain::player_view::CurrentTrickInfo;
use crate::domain::Card;

#[derive(Debug, Clone)]
pub struct Heuristic {
    weights: HeuristicWeights,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(config: &AiConfig) -> Self {
        Self {
            weights: config.weights.clone(),
        }
    }

    pub fn with_weights(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    /// Best legal move and its score; `None` when nothing is legal or the
    /// bot stands aside for a teammate.
    pub fn best_move(&self, state: &CurrentTrickInfo) -> Option<(Vec<Card>, f64)> {
        let legal = state.legal_moves();
        if legal.is_empty() || self.stands_aside(state) {
            return None;
        }

        let mut best: Option<(Vec<Card>, f64)> = None;
        for mv in legal {
            let score = self.score(state, &mv);
            if best.as_ref().map_or(true, |(_, top)| score > *top) {
                best = Some((mv, score));
            }
        }
        best
    }

    /// Full score of one candidate, including team adjustments.
    pub fn score(&self, state: &CurrentTrickInfo, mv: &[Card]) -> f64 {
        let w = &self.weights;
        let mut score = match &state.last_hand {
            None => self.evaluate_lead(state, mv),
            Some(last) => {
                let mut s = self.evaluate_response(state, mv, last);
                if teammate_can_cover(state, mv) {
                    s += w.teammate_cover_bonus;
                }
                s
            }
        };

        if let Some(mate_cards) = state.teammate_min_cards() {
            if mate_cards <= w.support_threshold {
                score += w.support_bonus;
                if mv.len() > 1 {
                    score += w.support_multi_bonus;
                }
                if let Some(last) = &state.last_hand {
                    let owner = state.seat_info(last.seat);
                    if last.seat != state.seat && owner.team == state.team() && contains_trump(mv)
                    {
                        score -= w.support_trump_penalty;
                    }
                }
            }
        }
        score
    }

    fn evaluate_lead(&self, state: &CurrentTrickInfo, mv: &[Card]) -> f64 {
        let w = &self.weights;
        let hand = &state.hand;
        let mut score = self.strength(mv) * w.lead_strength_weight;
        score -= self.remaining_hand_cost(mv, hand) * w.hand_cost_weight;
        if is_high_impact(mv) {
            score += w.high_impact_bonus;
        }

        let ratio = trump_ratio(hand);
        if contains_trump(mv) {
            score -= if ratio < w.trump_ratio_low {
                w.lead_trump_penalty
            } else {
                w.lead_trump_penalty_heavy
            };
        }
        if ratio >= w.trump_heavy_ratio && is_trump_move(mv) {
            score += w.trump_heavy_bonus;
        }

        score += control_followups(mv, hand) as f64 * w.lead_followup_weight;

        if matches!(
            analyze(mv),
            Some(Combo {
                kind: ComboKind::Triple | ComboKind::Quad,
                ..
            })
        ) {
            score += w.big_combo_bonus;
        }
        if state
            .turn_history
            .iter()
            .any(|t| t.passes >= w.pass_streak)
        {
            score += w.pass_streak_bonus;
        }
        score
    }

    fn evaluate_response(&self, state: &CurrentTrickInfo, mv: &[Card], last: &PlayedHand) -> f64 {
        let w = &self.weights;
        let hand = &state.hand;
        let mut score = 0.0;
        if can_beat(mv, Some(last)) {
            score += w.response_beat_bonus;
        }
        score -= self.remaining_hand_cost(mv, hand) * w.hand_cost_weight;
        score -= self.strength(mv) * w.response_strength_penalty;

        let followups = control_followups(mv, hand);
        score += followups as f64 * w.response_followup_weight;
        if followups == 0 {
            score -= w.no_followup_penalty;
        }

        if contains_trump(mv) {
            score -= if trump_ratio(hand) < w.trump_ratio_low {
                w.response_trump_penalty
            } else {
                w.response_trump_penalty_heavy
            };
        }

        let opponent_min = state.opponent_cards_left().into_iter().min();
        if opponent_min.is_some_and(|n| n <= w.pressure_threshold) {
            score += w.pressure_bonus;
            if mv.len() > 1 {
                score += w.pressure_multi_bonus;
            }
        }

        if state.turn_history[last.seat as usize].plays >= w.repeat_owner_plays {
            score += w.repeat_owner_bonus;
        }
        score
    }

    /// Do not contest a teammate's trump lead when they are nearly out, or
    /// when no opponent is close to finishing.
    fn stands_aside(&self, state: &CurrentTrickInfo) -> bool {
        let Some(last) = &state.last_hand else {
            return false;
        };
        let owner = state.seat_info(last.seat);
        let teammate_led = owner.team == state.team() && last.seat != state.seat;
        if !teammate_led || !last.is_trump() {
            return false;
        }
        let teammate_critical = owner.cards_left <= self.weights.decline_teammate_cards;
        let opponents_comfortable = state
            .opponent_cards_left()
            .into_iter()
            .min()
            .is_some_and(|n| n > self.weights.decline_opponent_cards);
        teammate_critical || opponents_comfortable
    }

    fn strength(&self, mv: &[Card]) -> f64 {
        let rank = analyze(mv).map_or(-1.0, |c| f64::from(c.rank));
        rank + mv.len() as f64 * self.weights.strength_size_weight
    }

    /// What the hand still has to get rid of after `mv`.
    fn remaining_hand_cost(&self, mv: &[Card], hand: &[Card]) -> f64 {
        let w = &self.weights;
        let remaining = remaining_after(mv, hand);
        if remaining.is_empty() {
            return w.empty_hand_cost;
        }
        let value_cost: f64 = remaining
            .iter()
            .map(|c| f64::from(c.value() + 1) / w.cost_value_divisor)
            .sum();
        let wilds = remaining.iter().filter(|c| c.is_wild()).count() as f64;
        let distinct = group_by_value(remaining.iter().copied()).len() as f64;
        value_cost + wilds * w.wild_cost + distinct * w.scatter_cost
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::with_weights(HeuristicWeights::default())
    }
}

impl AiPlayer for Heuristic {
    fn choose_move(&self, state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError> {
        match self.best_move(state) {
            Some((mv, score)) => {
                debug!(
                    seat = state.seat,
                    cards = ?mv.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
                    score,
                    "heuristic chose move"
                );
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }
}

fn remaining_after<'a>(mv: &[Card], hand: &'a [Card]) -> Vec<&'a Card> {
    hand.iter()
        .filter(|c| !mv.iter().any(|m| m.id == c.id))
        .collect()
}

fn trump_ratio(hand: &[Card]) -> f64 {
    if hand.is_empty() {
        return 0.0;
    }
    hand.iter().filter(|c| c.is_trump()).count() as f64 / hand.len() as f64
}

/// Same-value groups of `cards` that could top `combo` with `size` cards.
fn groups_topping(cards: &[&Card], combo: Combo, size: usize) -> usize {
    group_by_value(cards.iter().copied())
        .into_iter()
        .filter(|(value, group)| *value > combo.rank && group.len() >= size)
        .filter(|(_, group)| {
            let cand: Vec<Card> = group.iter().take(size).map(|c| (*c).clone()).collect();
            analyze(&cand).is_some_and(|c| c.kind == combo.kind)
        })
        .count()
}

/// How many combos of the same shape, stronger than `mv`, stay in hand.
fn control_followups(mv: &[Card], hand: &[Card]) -> usize {
    let remaining = remaining_after(mv, hand);
    match analyze(mv) {
        Some(combo) if !remaining.is_empty() => groups_topping(&remaining, combo, mv.len()),
        _ => 0,
    }
}

/// Whether an unfinished teammate holds a same-shape combo that tops `mv`.
fn teammate_can_cover(state: &CurrentTrickInfo, mv: &[Card]) -> bool {
    let Some(combo) = analyze(mv) else {
        return false;
    };
    state.teammate_hands.iter().any(|mate| {
        let cards: Vec<&Card> = mate.hand.iter().collect();
        groups_topping(&cards, combo, mv.len()) > 0
    })
}
