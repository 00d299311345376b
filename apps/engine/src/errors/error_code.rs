//! Error codes reported by the engine.
//!
//! Every rejected operation carries exactly one of these codes. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! the boundary layer forwards to clients.

use core::fmt;

use serde::Serialize;

/// Centralized error codes for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round state
    /// Action attempted while the round is not being played
    NotPlaying,
    /// Seat swap attempted outside the waiting phase
    NotWaiting,
    /// Start requested while some human seat is not ready
    PlayersNotReady,

    // Turn order
    /// Actor does not hold the turn
    NotYourTurn,

    // Actions
    /// Pass attempted by the seat that must lead
    MustLead,
    /// Play submitted without any card owned by the seat
    NoCardsSelected,
    /// Action name not recognised
    UnknownAction,

    // Combos
    /// Selected cards do not form a combo
    InvalidCombo,
    /// Selected combo does not beat the active trick
    CannotBeat,

    // Seats
    /// Seat index outside 0..=5
    SeatOutOfRange,
    /// No bot seat left to take over
    NoFreeSeat,
    /// Target seat already held by a human
    SeatOccupied,
    /// Operation not available to a bot-controlled seat
    BotSeat,

    // Registry
    /// Room id unknown to the registry
    RoomNotFound,
    /// Room password mismatch
    WrongPassword,
    /// Operation reserved for the host
    NotHost,
    /// Every four-digit room id is taken
    NoFreeRoomId,

    // Parsing
    /// Card token not understood
    ParseCard,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotPlaying => "NOT_PLAYING",
            Self::NotWaiting => "NOT_WAITING",
            Self::PlayersNotReady => "PLAYERS_NOT_READY",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::MustLead => "MUST_LEAD",
            Self::NoCardsSelected => "NO_CARDS_SELECTED",
            Self::UnknownAction => "UNKNOWN_ACTION",
            Self::InvalidCombo => "INVALID_COMBO",
            Self::CannotBeat => "CANNOT_BEAT",
            Self::SeatOutOfRange => "SEAT_OUT_OF_RANGE",
            Self::NoFreeSeat => "NO_FREE_SEAT",
            Self::SeatOccupied => "SEAT_OCCUPIED",
            Self::BotSeat => "BOT_SEAT",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::NotHost => "NOT_HOST",
            Self::NoFreeRoomId => "NO_FREE_ROOM_ID",
            Self::ParseCard => "PARSE_CARD",
        }
    }

    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 18] = [
        Self::NotPlaying,
        Self::NotWaiting,
        Self::PlayersNotReady,
        Self::NotYourTurn,
        Self::MustLead,
        Self::NoCardsSelected,
        Self::UnknownAction,
        Self::InvalidCombo,
        Self::CannotBeat,
        Self::SeatOutOfRange,
        Self::NoFreeSeat,
        Self::SeatOccupied,
        Self::BotSeat,
        Self::RoomNotFound,
        Self::WrongPassword,
        Self::NotHost,
        Self::NoFreeRoomId,
        Self::ParseCard,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
