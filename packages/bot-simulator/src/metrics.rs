//! Per-game metrics written by the simulator.

use serde::Serialize;
use sixhand_engine::domain::rules::SEATS;
use sixhand_engine::domain::{RoundOutcome, Seat, Team};

use crate::simulator::RoundResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; SEATS],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub outcome: RoundOutcome,
    pub finish_order: Vec<Seat>,
    pub trick_resets: u32,
    pub moves: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: Seat,
    pub team: Team,
    pub ai_type: String,
    /// 1-based position in the finish order, if the seat finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_position: Option<usize>,
    pub plays: u32,
    pub passes: u32,
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: [String; SEATS],
    total_games: u32,
    result: &RoundResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = (0..SEATS)
        .map(|seat| {
            let seat = seat as Seat;
            let tally = result.tallies[seat as usize];
            PlayerMetrics {
                seat,
                team: Team::for_seat(seat),
                ai_type: ai_types[seat as usize].clone(),
                finish_position: result
                    .finish_order
                    .iter()
                    .position(|&s| s == seat)
                    .map(|p| p + 1),
                plays: tally.plays,
                passes: tally.passes,
            }
        })
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            outcome: result.outcome,
            finish_order: result.finish_order.clone(),
            trick_resets: result.trick_resets,
            moves: result.moves,
            duration_ms,
        },
        player_metrics,
    }
}

/// Short label for an outcome: `A`, `B`, `draw` or `abandoned`.
pub fn outcome_label(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::TeamWin(team) => team.as_str(),
        RoundOutcome::Draw => "draw",
        RoundOutcome::Abandoned => "abandoned",
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub outcome: &'static str,
    /// Seats joined with `-`, e.g. `0-3-2-4`.
    pub finish_order: String,
    pub trick_resets: u32,
    pub moves: usize,
    pub duration_ms: f64,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
    pub seat4_ai: String,
    pub seat5_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let ai = &metrics.config.ai_types;
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            outcome: outcome_label(metrics.result.outcome),
            finish_order: metrics
                .result
                .finish_order
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join("-"),
            trick_resets: metrics.result.trick_resets,
            moves: metrics.result.moves,
            duration_ms: metrics.result.duration_ms,
            seat0_ai: ai[0].clone(),
            seat1_ai: ai[1].clone(),
            seat2_ai: ai[2].clone(),
            seat3_ai: ai[3].clone(),
            seat4_ai: ai[4].clone(),
            seat5_ai: ai[5].clone(),
        }
    }
}
