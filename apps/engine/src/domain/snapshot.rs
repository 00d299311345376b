//! Viewer-scoped projection of a room.
//!
//! The projection mirrors the room. Hands of every seat other than the viewer
//! are reduced to card ids; with no viewer every hand is reduced.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::cards_logic::{ComboKind, PlayedHand};
use crate::domain::cards_types::{Card, CardId};
use crate::domain::rules::{Seat, Team};
use crate::domain::state::{Emote, GameStatus, Room, RoundOutcome, SeatTally};

/// A fully visible card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub suit: String,
    pub rank: String,
    pub value: u8,
    pub is_wild: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            suit: card.suit.map(|s| s.symbol()).unwrap_or_default().to_string(),
            rank: card.rank.symbol().to_string(),
            value: card.value(),
            is_wild: card.is_wild(),
        }
    }
}

/// A card as one seat sees another seat's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandCard {
    Visible(CardView),
    Hidden { id: CardId },
}

impl HandCard {
    pub fn id(&self) -> &CardId {
        match self {
            HandCard::Visible(view) => &view.id,
            HandCard::Hidden { id } => id,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, HandCard::Hidden { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub seat: Seat,
    pub name: String,
    pub team: Team,
    pub hand: Vec<HandCard>,
    pub ready: bool,
    pub is_bot: bool,
    pub finished: bool,
}

/// Cards on the table are public.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayedHandSnapshot {
    pub seat: Seat,
    pub cards: Vec<CardView>,
    pub kind: ComboKind,
    pub rank: u8,
}

impl From<&PlayedHand> for PlayedHandSnapshot {
    fn from(hand: &PlayedHand) -> Self {
        Self {
            seat: hand.seat,
            cards: hand.cards.iter().map(CardView::from).collect(),
            kind: hand.kind,
            rank: hand.rank,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: String,
    pub password: String,
    pub host_seat: Seat,
    pub players: Vec<PlayerSnapshot>,
    pub status: GameStatus,
    pub turn_index: Seat,
    pub last_hand: Option<PlayedHandSnapshot>,
    pub pass_count: u32,
    pub winners: Vec<Seat>,
    pub hand_history: Vec<PlayedHandSnapshot>,
    pub spectator_names: Vec<String>,
    pub logs: Vec<String>,
    pub emotes: Vec<Emote>,
    pub turn_history: Vec<SeatTally>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub outcome: Option<RoundOutcome>,
    pub round_no: u32,
}

/// Project `room` for `viewer` (`None` hides every hand).
pub fn serialize(room: &Room, viewer: Option<Seat>) -> RoomSnapshot {
    let players = room
        .players
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let seat = seat as Seat;
            let visible = viewer == Some(seat);
            let hand = player
                .hand
                .iter()
                .map(|card| {
                    if visible {
                        HandCard::Visible(CardView::from(card))
                    } else {
                        HandCard::Hidden {
                            id: card.id.clone(),
                        }
                    }
                })
                .collect();
            PlayerSnapshot {
                seat,
                name: player.name.clone(),
                team: Team::for_seat(seat),
                hand,
                ready: player.ready,
                is_bot: player.is_bot,
                finished: player.finished,
            }
        })
        .collect();

    RoomSnapshot {
        room_id: room.room_id.clone(),
        password: room.password.clone(),
        host_seat: room.host_seat,
        players,
        status: room.status,
        turn_index: room.turn_index,
        last_hand: room.last_hand.as_ref().map(PlayedHandSnapshot::from),
        pass_count: room.pass_count,
        winners: room.winners.clone(),
        hand_history: room.hand_history.iter().map(PlayedHandSnapshot::from).collect(),
        spectator_names: room.spectator_names.clone(),
        logs: room.logs.clone(),
        emotes: room.emotes.clone(),
        turn_history: room.turn_history.to_vec(),
        updated_at: room.updated_at,
        outcome: room.outcome,
        round_no: room.round_no,
    }
}
