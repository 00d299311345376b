use tracing::info;

use super::{BotRun, RoomFlowService};
use crate::domain::seating::{self, JoinOutcome, LeaveOutcome};
use crate::domain::Room;
use crate::errors::domain::DomainError;

impl RoomFlowService {
    /// Take the first bot seat, or spectate once the round is underway.
    pub fn join_room(&self, room: &mut Room, name: &str) -> Result<JoinOutcome, DomainError> {
        let joined = seating::join(room, name)?;
        info!(
            room_id = %room.room_id,
            name,
            seat = joined.seat,
            spectator = joined.spectator,
            "joined room"
        );
        Ok(joined)
    }

    /// Return a human seat to bot control.
    ///
    /// When the new bot holds the turn, bots play on immediately.
    pub fn leave_room(
        &self,
        room: &mut Room,
        seat: usize,
    ) -> Result<(LeaveOutcome, BotRun), DomainError> {
        let left = seating::leave(room, seat)?;
        info!(
            room_id = %room.room_id,
            seat,
            abandoned = left.round_abandoned,
            "left room"
        );
        let run = if left.bot_must_act {
            self.drive_bots(room)
        } else {
            BotRun::default()
        };
        Ok((left, run))
    }

    pub fn swap_seat(
        &self,
        room: &mut Room,
        seat: usize,
        target: usize,
    ) -> Result<(), DomainError> {
        seating::swap(room, seat, target)?;
        info!(room_id = %room.room_id, seat, target, "swapped seats");
        Ok(())
    }

    pub fn set_ready(
        &self,
        room: &mut Room,
        seat: usize,
        ready: bool,
    ) -> Result<(), DomainError> {
        seating::set_ready(room, seat, ready)
    }
}
