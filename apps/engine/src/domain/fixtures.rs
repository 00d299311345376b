use super::cards_types::Card;
use super::rules::{Seat, SEATS};
use super::state::{GameStatus, Room, RoomSettings, SeatTally};

/// Centralized helper for parsing hardcoded card tokens in fixtures and demo data.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g., ["4H", "10S", "BJ"]) into Card instances.
    ///
    /// Only for tokens known to be valid; parsed cards carry canonical deck ids.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }
}

/// A room mid-round with hand-picked hands, for scenario tests and tooling.
///
/// Every seat is a bot except seat 0. `leader` holds the turn with no trick
/// on the table.
pub fn room_with_hands(hands: [&[&str]; SEATS], leader: Seat) -> Room {
    let mut room = Room::new("0000", "0000", "host", 0, RoomSettings::default());
    for (player, tokens) in room.players.iter_mut().zip(hands) {
        player.hand = CardFixtures::parse_hardcoded(tokens);
        player.finished = false;
    }
    room.status = GameStatus::Playing;
    room.round_no = 1;
    room.turn_index = leader;
    room.turn_history = [SeatTally::default(); SEATS];
    room
}
