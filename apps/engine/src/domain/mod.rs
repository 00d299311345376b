//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod legal_moves;
pub mod player_view;
pub mod rules;
pub mod seating;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_analyzer;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_seating;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{analyze, can_beat, Combo, ComboKind, PlayedHand};
pub use cards_types::{Card, CardId, Rank, Suit};
pub use dealing::{deal_hands, full_deck};
pub use legal_moves::{fallback_move, generate_legal_moves};
pub use player_view::CurrentTrickInfo;
pub use rules::{Seat, Team, DECK_SIZE, HAND_SIZE, SEATS};
pub use seed_derivation::{derive_bot_seed, derive_dealing_seed};
pub use snapshot::{serialize, RoomSnapshot};
pub use state::{GameStatus, Player, Room, RoomSettings, RoundOutcome, SeatTally};
pub use tricks::{apply_turn, start_round, PlayerAction, TurnReport};
