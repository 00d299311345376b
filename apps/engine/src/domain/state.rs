//! The `Room` aggregate and its per-seat records.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::cards_logic::PlayedHand;
use crate::domain::cards_types::Card;
use crate::domain::rules::{
    all_seats, seat_in_range, Seat, Team, DEFAULT_EMOTE_LIMIT, DEFAULT_HAND_HISTORY_LIMIT,
    DEFAULT_LOG_LIMIT, SEATS,
};
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Round lifecycle status.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    Playing,
    RoundOver,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "result", content = "team", rename_all = "snake_case")]
pub enum RoundOutcome {
    TeamWin(Team),
    Draw,
    /// The host left mid-round.
    Abandoned,
}

/// Plays and passes made by one seat during the current round.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatTally {
    pub plays: u32,
    pub passes: u32,
}

/// Occupant of one seat.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub ready: bool,
    pub is_bot: bool,
    pub finished: bool,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            ready: false,
            is_bot: false,
            finished: false,
        }
    }

    pub fn bot(seat: Seat) -> Self {
        Self {
            name: format!("Empty seat {}", seat + 1),
            hand: Vec::new(),
            ready: false,
            is_bot: true,
            finished: false,
        }
    }

    /// Bots never hold up the start of a round.
    pub fn is_ready(&self) -> bool {
        self.is_bot || self.ready
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Emote {
    pub sender: Seat,
    /// `None` broadcasts to the whole table.
    pub target: Option<Seat>,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

/// Per-room buffer bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoomSettings {
    pub hand_history_limit: usize,
    pub emote_limit: usize,
    pub log_limit: usize,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            hand_history_limit: DEFAULT_HAND_HISTORY_LIMIT,
            emote_limit: DEFAULT_EMOTE_LIMIT,
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

/// Authoritative state of one table.
///
/// Seats are the indices of `players`; a player's team is always derived
/// from its index, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_id: String,
    pub password: String,
    pub host_seat: Seat,
    pub players: [Player; SEATS],
    pub status: GameStatus,
    pub turn_index: Seat,
    pub last_hand: Option<PlayedHand>,
    pub pass_count: u32,
    /// Seats in the order their hands emptied.
    pub winners: Vec<Seat>,
    pub hand_history: Vec<PlayedHand>,
    pub spectator_names: Vec<String>,
    pub logs: Vec<String>,
    pub emotes: Vec<Emote>,
    pub turn_history: [SeatTally; SEATS],
    pub updated_at: OffsetDateTime,
    pub outcome: Option<RoundOutcome>,
    pub round_no: u32,
    pub seed: u64,
    pub settings: RoomSettings,
}

impl Room {
    /// New waiting room with `creator` at seat 0 and bots everywhere else.
    pub fn new(
        room_id: impl Into<String>,
        password: impl Into<String>,
        creator: &str,
        seed: u64,
        settings: RoomSettings,
    ) -> Self {
        let players = std::array::from_fn(|seat| {
            if seat == 0 {
                Player::human(creator)
            } else {
                Player::bot(seat as Seat)
            }
        });
        let mut room = Self {
            room_id: room_id.into(),
            password: password.into(),
            host_seat: 0,
            players,
            status: GameStatus::Waiting,
            turn_index: 0,
            last_hand: None,
            pass_count: 0,
            winners: Vec::new(),
            hand_history: Vec::new(),
            spectator_names: Vec::new(),
            logs: Vec::new(),
            emotes: Vec::new(),
            turn_history: [SeatTally::default(); SEATS],
            updated_at: OffsetDateTime::now_utc(),
            outcome: None,
            round_no: 0,
            seed,
            settings,
        };
        room.push_log(format!("Host {creator} created the room"));
        room
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat as usize]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn_index)
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn finished_on_team(&self, team: Team) -> usize {
        all_seats()
            .filter(|&s| Team::for_seat(s) == team && self.player(s).finished)
            .count()
    }

    pub fn unfinished_count(&self) -> usize {
        self.players.iter().filter(|p| !p.finished).count()
    }

    /// Team of the first seat to empty its hand.
    pub fn head_team(&self) -> Option<Team> {
        self.winners.first().map(|&s| Team::for_seat(s))
    }

    pub fn all_humans_ready(&self) -> bool {
        self.players.iter().all(Player::is_ready)
    }

    /// Cards still held across all seats.
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum()
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
        trim_front(&mut self.logs, self.settings.log_limit);
    }

    pub fn push_history(&mut self, hand: PlayedHand) {
        self.hand_history.push(hand);
        trim_front(&mut self.hand_history, self.settings.hand_history_limit);
    }

    pub fn push_emote(&mut self, emote: Emote) {
        self.emotes.push(emote);
        trim_front(&mut self.emotes, self.settings.emote_limit);
    }

    pub fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

/// Keep only the newest `limit` entries.
fn trim_front<T>(buf: &mut Vec<T>, limit: usize) {
    if buf.len() > limit {
        let excess = buf.len() - limit;
        buf.drain(..excess);
    }
}

/// Validate a caller-supplied seat index.
pub fn checked_seat(seat: usize) -> Result<Seat, DomainError> {
    if seat_in_range(seat) {
        Ok(seat as Seat)
    } else {
        Err(DomainError::seat(
            ErrorCode::SeatOutOfRange,
            format!("seat {seat} does not exist"),
        ))
    }
}
