//! Table constants and seat/team rules.

use serde::{Deserialize, Serialize};

/// Seat index, 0..SEATS.
pub type Seat = u8;

pub const SEATS: usize = 6;
pub const HAND_SIZE: usize = 9;
pub const DECK_SIZE: usize = SEATS * HAND_SIZE;
/// Finished seats a team needs to end the round.
pub const FINISHERS_TO_WIN: usize = 3;
pub const MAX_COMBO_SIZE: usize = 4;

/// Default bound on `Room::hand_history`.
pub const DEFAULT_HAND_HISTORY_LIMIT: usize = 30;
/// Default bound on `Room::emotes`.
pub const DEFAULT_EMOTE_LIMIT: usize = 50;
/// Default bound on `Room::logs`.
pub const DEFAULT_LOG_LIMIT: usize = 200;

/// The two teams. Membership is a function of seat index only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Even seats play for A, odd seats for B.
    pub const fn for_seat(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }

    pub const fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

pub fn seat_in_range(seat: usize) -> bool {
    seat < SEATS
}

/// Seats in table order.
pub fn all_seats() -> impl Iterator<Item = Seat> {
    0..SEATS as Seat
}

/// Next seat clockwise.
pub const fn next_seat(seat: Seat) -> Seat {
    ((seat as usize + 1) % SEATS) as Seat
}
