use tracing::debug;

use super::RoomFlowService;
use crate::domain::seating;
use crate::domain::Room;
use crate::errors::domain::DomainError;

impl RoomFlowService {
    /// Send an emote from a human seat; `target` of `None` broadcasts.
    pub fn add_emote(
        &self,
        room: &mut Room,
        sender: usize,
        target: Option<usize>,
        content: &str,
    ) -> Result<(), DomainError> {
        seating::add_emote(room, sender, target, content)?;
        debug!(room_id = %room.room_id, sender, target = ?target, "emote sent");
        Ok(())
    }
}
