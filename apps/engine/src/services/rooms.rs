//! In-process room registry.
//!
//! Each room sits behind its own mutex, so operations on one room are
//! serialised while different rooms proceed in parallel. Code holding a
//! room lock never touches the map, so `dissolve` may lock a room from
//! inside the shard lock.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use super::room_flow::{ActionReport, BotRun, RoomFlowService};
use crate::domain::seating::{JoinOutcome, LeaveOutcome};
use crate::domain::snapshot::RoomSnapshot;
use crate::domain::state::checked_seat;
use crate::domain::{Room, Seat};
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::utils::room_code::CODE_SPACE;

/// Id draws attempted before `create` gives up.
const MAX_ID_DRAWS: usize = 64;

/// Credentials handed to the creator of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRoom {
    pub room_id: String,
    pub password: String,
    pub seat: Seat,
}

pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Mutex<Room>>>,
    flow: RoomFlowService,
    rng: Mutex<StdRng>,
}

impl RoomRegistry {
    pub fn new(flow: RoomFlowService) -> Self {
        Self::with_rng(flow, StdRng::from_os_rng())
    }

    /// Registry whose room ids, passwords and deals are reproducible.
    pub fn with_seed(flow: RoomFlowService, seed: u64) -> Self {
        Self::with_rng(flow, StdRng::seed_from_u64(seed))
    }

    fn with_rng(flow: RoomFlowService, rng: StdRng) -> Self {
        Self {
            rooms: DashMap::new(),
            flow,
            rng: Mutex::new(rng),
        }
    }

    pub fn flow(&self) -> &RoomFlowService {
        &self.flow
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn create(&self, creator: &str) -> Result<CreatedRoom, DomainError> {
        if self.rooms.len() < CODE_SPACE {
            for _ in 0..MAX_ID_DRAWS {
                let room = {
                    let mut rng = self.rng.lock();
                    self.flow.create_room(&mut *rng, creator)
                };
                if let Entry::Vacant(slot) = self.rooms.entry(room.room_id.clone()) {
                    let created = CreatedRoom {
                        room_id: room.room_id.clone(),
                        password: room.password.clone(),
                        seat: room.host_seat,
                    };
                    slot.insert(Arc::new(Mutex::new(room)));
                    return Ok(created);
                }
            }
        }
        Err(DomainError::state(
            ErrorCode::NoFreeRoomId,
            "no unused room id is available",
        ))
    }

    /// Run `f` with exclusive access to the room.
    pub fn with_room<T>(
        &self,
        room_id: &str,
        f: impl FnOnce(&mut Room) -> T,
    ) -> Result<T, DomainError> {
        let room = self
            .rooms
            .get(room_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| room_not_found(room_id))?;
        let mut guard = room.lock();
        Ok(f(&mut *guard))
    }

    pub fn join(
        &self,
        room_id: &str,
        password: &str,
        name: &str,
    ) -> Result<JoinOutcome, DomainError> {
        self.with_room(room_id, |room| {
            if room.password != password {
                return Err(DomainError::forbidden(
                    ErrorCode::WrongPassword,
                    "wrong room password",
                ));
            }
            self.flow.join_room(room, name)
        })?
    }

    /// Start a round once every human seat is ready.
    pub fn start(&self, room_id: &str) -> Result<BotRun, DomainError> {
        self.with_room(room_id, |room| {
            if !room.all_humans_ready() {
                return Err(DomainError::state(
                    ErrorCode::PlayersNotReady,
                    "every player must be ready",
                ));
            }
            Ok(self.flow.start_game(room))
        })?
    }

    pub fn leave(
        &self,
        room_id: &str,
        seat: usize,
    ) -> Result<(LeaveOutcome, BotRun), DomainError> {
        self.with_room(room_id, |room| self.flow.leave_room(room, seat))?
    }

    pub fn ready(&self, room_id: &str, seat: usize, ready: bool) -> Result<(), DomainError> {
        self.with_room(room_id, |room| self.flow.set_ready(room, seat, ready))?
    }

    pub fn swap(&self, room_id: &str, seat: usize, target: usize) -> Result<(), DomainError> {
        self.with_room(room_id, |room| self.flow.swap_seat(room, seat, target))?
    }

    pub fn action(
        &self,
        room_id: &str,
        seat: usize,
        action: &str,
        card_ids: &[String],
    ) -> Result<ActionReport, DomainError> {
        self.with_room(room_id, |room| {
            self.flow.apply_action_parts(room, seat, action, card_ids)
        })?
    }

    pub fn emote(
        &self,
        room_id: &str,
        sender: usize,
        target: Option<usize>,
        content: &str,
    ) -> Result<(), DomainError> {
        self.with_room(room_id, |room| {
            self.flow.add_emote(room, sender, target, content)
        })?
    }

    /// Projection of the room as seen from `viewer`.
    pub fn state(
        &self,
        room_id: &str,
        viewer: Option<Seat>,
    ) -> Result<RoomSnapshot, DomainError> {
        self.with_room(room_id, |room| self.flow.view(room, viewer))
    }

    /// Remove the room. Only the host may dissolve it.
    ///
    /// The host check and the removal happen under one room lock.
    pub fn dissolve(&self, room_id: &str, seat: usize) -> Result<(), DomainError> {
        let seat = checked_seat(seat)?;
        let mut refused = false;
        let removed = self.rooms.remove_if(room_id, |_, slot| {
            let room = slot.lock();
            refused = room.host_seat != seat || room.player(seat).is_bot;
            !refused
        });
        if removed.is_some() {
            info!(room_id, "room dissolved");
            return Ok(());
        }
        if refused {
            Err(DomainError::forbidden(
                ErrorCode::NotHost,
                "only the host can dissolve the room",
            ))
        } else {
            Err(room_not_found(room_id))
        }
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(RoomFlowService::default())
    }
}

fn room_not_found(room_id: &str) -> DomainError {
    DomainError::not_found(
        ErrorCode::RoomNotFound,
        format!("room {room_id} does not exist"),
    )
}
