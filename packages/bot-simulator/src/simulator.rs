//! In-memory round simulator for evaluating bots.
//!
//! Every seat is a bot. The room is driven through the engine's own domain
//! transitions, but unlike the room flow service nothing is papered over: a
//! bot error or an illegal move aborts the round.

use std::fmt;

use sixhand_engine::ai::{AiError, AiPlayer};
use sixhand_engine::domain::rules::{DECK_SIZE, SEATS};
use sixhand_engine::domain::tricks::{apply_turn, start_round};
use sixhand_engine::domain::{
    CurrentTrickInfo, Player, PlayerAction, Room, RoomSettings, RoundOutcome, Seat, SeatTally,
};
use sixhand_engine::DomainError;

const MAX_STEPS: usize = DECK_SIZE * (SEATS + 1);

/// Result of one simulated round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    /// Seats in the order their hands emptied.
    pub finish_order: Vec<Seat>,
    pub tallies: [SeatTally; SEATS],
    pub trick_resets: u32,
    pub moves: usize,
}

pub struct Simulator {
    seed: u64,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deal one round from the seed and let `ais[seat]` play each seat.
    pub fn simulate_round(
        &self,
        ais: &[Box<dyn AiPlayer>; SEATS],
    ) -> Result<RoundResult, SimulatorError> {
        let mut room = Room::new("sim", "", "sim", self.seed, RoomSettings::default());
        room.players = std::array::from_fn(|seat| Player::bot(seat as Seat));
        start_round(&mut room);

        let mut trick_resets = 0;
        for step in 1..=MAX_STEPS {
            let seat = room.turn_index;
            let view = CurrentTrickInfo::for_seat(&room, seat);
            let action = match ais[seat as usize].choose_move(&view) {
                Ok(Some(cards)) => PlayerAction::from_cards(&cards),
                Ok(None) if view.is_leading() => {
                    return Err(SimulatorError::Ai(
                        seat,
                        AiError::InvalidMove("passed while leading".into()),
                    ));
                }
                Ok(None) => PlayerAction::Pass,
                Err(err) => return Err(SimulatorError::Ai(seat, err)),
            };

            let report = apply_turn(&mut room, seat as usize, &action)
                .map_err(|err| SimulatorError::Domain(seat, err))?;
            if report.trick_reset {
                trick_resets += 1;
            }
            if let Some(outcome) = report.outcome {
                return Ok(RoundResult {
                    outcome,
                    finish_order: room.winners,
                    tallies: room.turn_history,
                    trick_resets,
                    moves: step,
                });
            }
        }

        Err(SimulatorError::StepLimit(MAX_STEPS))
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    /// Bot returned an error or an impossible choice
    Ai(Seat, AiError),
    /// The room rejected a bot's move
    Domain(Seat, DomainError),
    /// The round did not finish
    StepLimit(usize),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Ai(seat, err) => write!(f, "AI error (seat {seat}): {err}"),
            SimulatorError::Domain(seat, err) => write!(f, "move rejected (seat {seat}): {err}"),
            SimulatorError::StepLimit(steps) => write!(f, "round unfinished after {steps} moves"),
        }
    }
}

impl std::error::Error for SimulatorError {}
