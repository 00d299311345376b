//! Room flow service: bridges the pure domain transitions with the bot
//! agent and structured logging.
//!
//! Every method takes the room by `&mut`. Callers serialise access per room
//! (see [`RoomRegistry`](crate::services::RoomRegistry)).

mod ai_coordinator;
mod emotes;
mod outcome;
mod player_actions;
mod round_lifecycle;
mod seats;

pub use ai_coordinator::{BotRun, MAX_BOT_STEPS};
pub use outcome::FlowOutcome;
pub use player_actions::ActionReport;
use tracing::warn;

use crate::ai::{create_ai, AiPlayer, Heuristic};
use crate::config::EngineConfig;

/// Stateless apart from its configuration and the bot driving bot seats.
pub struct RoomFlowService {
    config: EngineConfig,
    ai: Box<dyn AiPlayer>,
}

impl RoomFlowService {
    /// Build the bot named by `config.ai_name`, falling back to the
    /// heuristic bot for unknown names.
    pub fn new(config: EngineConfig) -> Self {
        let ai = create_ai(&config.ai_name, &config.ai).unwrap_or_else(|| {
            warn!(ai = %config.ai_name, "unknown AI name, using Heuristic");
            Box::new(Heuristic::new(&config.ai))
        });
        Self { config, ai }
    }

    /// Use a specific bot regardless of `config.ai_name`.
    pub fn with_ai(config: EngineConfig, ai: Box<dyn AiPlayer>) -> Self {
        Self { config, ai }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for RoomFlowService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
