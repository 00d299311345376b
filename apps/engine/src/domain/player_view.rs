//! What a bot may see when it is asked to act.

use crate::domain::cards_logic::PlayedHand;
use crate::domain::cards_types::Card;
use crate::domain::legal_moves::generate_legal_moves;
use crate::domain::rules::{all_seats, Seat, Team, SEATS};
use crate::domain::state::{Room, SeatTally};

/// Public facts about one seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SeatInfo {
    pub seat: Seat,
    pub team: Team,
    pub cards_left: usize,
    pub finished: bool,
    pub is_bot: bool,
}

/// A teammate's hand, shared with the acting seat.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TeammateHand {
    pub seat: Seat,
    pub hand: Vec<Card>,
}

/// Everything the acting seat may use to pick a move.
///
/// Opponents appear only through card counts. Unfinished teammates' hands
/// are included so a bot can tell whether a partner could take over a trick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CurrentTrickInfo {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub last_hand: Option<PlayedHand>,
    pub seats: [SeatInfo; SEATS],
    pub turn_history: [SeatTally; SEATS],
    pub teammate_hands: Vec<TeammateHand>,
}

impl CurrentTrickInfo {
    pub fn for_seat(room: &Room, seat: Seat) -> Self {
        let team = Team::for_seat(seat);
        let seats = std::array::from_fn(|s| {
            let s = s as Seat;
            let player = room.player(s);
            SeatInfo {
                seat: s,
                team: Team::for_seat(s),
                cards_left: player.hand.len(),
                finished: player.finished,
                is_bot: player.is_bot,
            }
        });
        let teammate_hands = all_seats()
            .filter(|&s| s != seat && Team::for_seat(s) == team && !room.player(s).finished)
            .map(|s| TeammateHand {
                seat: s,
                hand: room.player(s).hand.clone(),
            })
            .collect();
        Self {
            seat,
            hand: room.player(seat).hand.clone(),
            last_hand: room.last_hand.clone(),
            seats,
            turn_history: room.turn_history,
            teammate_hands,
        }
    }

    pub fn team(&self) -> Team {
        Team::for_seat(self.seat)
    }

    pub fn is_leading(&self) -> bool {
        self.last_hand.is_none()
    }

    /// Every combo this seat may legally play right now.
    pub fn legal_moves(&self) -> Vec<Vec<Card>> {
        generate_legal_moves(&self.hand, self.last_hand.as_ref())
    }

    /// Fewest cards held by an unfinished teammate; `None` without one.
    pub fn teammate_min_cards(&self) -> Option<usize> {
        self.seats
            .iter()
            .filter(|s| s.seat != self.seat && s.team == self.team() && !s.finished)
            .map(|s| s.cards_left)
            .min()
    }

    /// Card counts of unfinished opponents.
    pub fn opponent_cards_left(&self) -> Vec<usize> {
        self.seats
            .iter()
            .filter(|s| s.team != self.team() && !s.finished)
            .map(|s| s.cards_left)
            .collect()
    }

    pub fn seat_info(&self, seat: Seat) -> &SeatInfo {
        &self.seats[seat as usize]
    }
}
