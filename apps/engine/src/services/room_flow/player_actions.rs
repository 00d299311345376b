use tracing::info;

use super::ai_coordinator::log_round_end;
use super::{BotRun, RoomFlowService};
use crate::domain::tricks::{apply_turn, PlayerAction, TurnReport};
use crate::domain::Room;
use crate::errors::domain::DomainError;

/// An accepted human action and the bot moves it triggered.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ActionReport {
    pub turn: TurnReport,
    pub bots: BotRun,
}

impl RoomFlowService {
    /// Apply one action for `seat`, then let bots act.
    ///
    /// A rejected action leaves the room untouched and triggers no bots.
    pub fn apply_action(
        &self,
        room: &mut Room,
        seat: usize,
        action: &PlayerAction,
    ) -> Result<ActionReport, DomainError> {
        let turn = apply_turn(room, seat, action)?;
        if let Some(finished) = turn.finished_seat {
            info!(room_id = %room.room_id, seat = finished, "seat finished");
        }
        if let Some(outcome) = turn.outcome {
            log_round_end(room, outcome);
            return Ok(ActionReport {
                turn,
                bots: BotRun::default(),
            });
        }
        let bots = self.drive_bots(room);
        Ok(ActionReport { turn, bots })
    }

    /// `apply_action` from the boundary's raw `(action, card_ids)` pair.
    pub fn apply_action_parts(
        &self,
        room: &mut Room,
        seat: usize,
        action: &str,
        card_ids: &[String],
    ) -> Result<ActionReport, DomainError> {
        let action = PlayerAction::from_parts(action, card_ids)?;
        self.apply_action(room, seat, &action)
    }
}
