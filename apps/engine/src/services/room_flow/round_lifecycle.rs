use rand::Rng;
use tracing::info;

use super::{BotRun, RoomFlowService};
use crate::domain::snapshot::{serialize, RoomSnapshot};
use crate::domain::tricks::start_round;
use crate::domain::{Room, Seat};
use crate::utils::room_code::generate_room_code;

impl RoomFlowService {
    /// New waiting room with `creator` at seat 0 and bots in the other seats.
    ///
    /// Id, password and the room's dealing seed all come from `rng`.
    pub fn create_room<R: Rng + ?Sized>(&self, rng: &mut R, creator: &str) -> Room {
        let room_id = generate_room_code(rng);
        let password = generate_room_code(rng);
        let seed: u64 = rng.random();
        let room = Room::new(room_id, password, creator, seed, self.config.settings());
        info!(room_id = %room.room_id, creator, "room created");
        room
    }

    /// Deal a new round and let bots play until a human must act.
    ///
    /// Readiness is checked by the registry, not here; calling this on a room
    /// mid-round simply redeals.
    pub fn start_game(&self, room: &mut Room) -> BotRun {
        start_round(room);
        info!(
            room_id = %room.room_id,
            round = room.round_no,
            leader = room.turn_index,
            "round started"
        );
        self.drive_bots(room)
    }

    pub fn view(&self, room: &Room, viewer: Option<Seat>) -> RoomSnapshot {
        serialize(room, viewer)
    }
}
