//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::CurrentTrickInfo;
use crate::domain::Card;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for bot players.
///
/// Implementations receive what the acting seat may see and return the
/// cards to play, or `None` to pass. The bot is responsible for querying
/// `state.legal_moves()`; a pass while leading is treated as a refusal and
/// replaced by the engine's fallback move.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError>;
}
