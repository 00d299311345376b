//! AI configuration handling.
//!
//! Every field is typed; keys no bot reads are ignored when parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Scoring constants for the heuristic bot.
///
/// Every field has a default, so a JSON config may override any subset:
/// ```json
/// {"weights": {"response_beat_bonus": 6.5, "pressure_threshold": 3}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    // Combo strength: rank + size_weight * card count
    pub strength_size_weight: f64,

    // Remaining-hand cost
    pub hand_cost_weight: f64,
    /// Cost per remaining card is (value + 1) / this.
    pub cost_value_divisor: f64,
    pub wild_cost: f64,
    pub scatter_cost: f64,
    /// Cost reported when a move empties the hand.
    pub empty_hand_cost: f64,

    // Trump conservation
    /// Hands with a smaller trump share pay the full trump penalty.
    pub trump_ratio_low: f64,
    pub trump_heavy_ratio: f64,
    pub trump_heavy_bonus: f64,

    // Leading
    pub lead_strength_weight: f64,
    pub high_impact_bonus: f64,
    pub lead_trump_penalty: f64,
    pub lead_trump_penalty_heavy: f64,
    pub lead_followup_weight: f64,
    pub big_combo_bonus: f64,
    pub pass_streak: u32,
    pub pass_streak_bonus: f64,

    // Responding
    pub response_beat_bonus: f64,
    pub response_strength_penalty: f64,
    pub response_followup_weight: f64,
    pub no_followup_penalty: f64,
    pub response_trump_penalty: f64,
    pub response_trump_penalty_heavy: f64,
    pub pressure_threshold: usize,
    pub pressure_bonus: f64,
    pub pressure_multi_bonus: f64,
    pub repeat_owner_plays: u32,
    pub repeat_owner_bonus: f64,
    pub teammate_cover_bonus: f64,

    // Team support
    pub support_threshold: usize,
    pub support_bonus: f64,
    pub support_multi_bonus: f64,
    pub support_trump_penalty: f64,

    // Standing aside for a teammate's trump lead
    pub decline_teammate_cards: usize,
    pub decline_opponent_cards: usize,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            strength_size_weight: 0.4,
            hand_cost_weight: 0.45,
            cost_value_divisor: 4.0,
            wild_cost: 2.0,
            scatter_cost: 0.8,
            empty_hand_cost: -4.0,
            trump_ratio_low: 0.45,
            trump_heavy_ratio: 0.6,
            trump_heavy_bonus: 2.0,
            lead_strength_weight: 1.6,
            high_impact_bonus: 2.4,
            lead_trump_penalty: 3.0,
            lead_trump_penalty_heavy: 0.8,
            lead_followup_weight: 1.35,
            big_combo_bonus: 0.8,
            pass_streak: 2,
            pass_streak_bonus: 0.5,
            response_beat_bonus: 5.0,
            response_strength_penalty: 0.2,
            response_followup_weight: 1.2,
            no_followup_penalty: 0.8,
            response_trump_penalty: 2.0,
            response_trump_penalty_heavy: 0.6,
            pressure_threshold: 2,
            pressure_bonus: 2.2,
            pressure_multi_bonus: 0.6,
            repeat_owner_plays: 3,
            repeat_owner_bonus: 0.6,
            teammate_cover_bonus: 1.8,
            support_threshold: 2,
            support_bonus: 1.8,
            support_multi_bonus: 0.4,
            support_trump_penalty: 2.0,
            decline_teammate_cards: 2,
            decline_opponent_cards: 1,
        }
    }
}

/// Standard configuration for bot players.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "weights": {"high_impact_bonus": 3.0}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Heuristic scoring constants.
    #[serde(default)]
    pub weights: HeuristicWeights,
}

impl AiConfig {
    /// Parse a JSON config, falling back to defaults when it does not fit.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Create an empty configuration (no seed, default weights).
    pub fn empty() -> Self {
        Self {
            seed: None,
            weights: HeuristicWeights::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}
