//! Bots with fixed misbehaviour, for exercising the coordinator's fallback.

use sixhand_engine::ai::{AiError, AiPlayer};
use sixhand_engine::domain::fixtures::CardFixtures;
use sixhand_engine::domain::{Card, CurrentTrickInfo};

/// Always errors.
pub struct FailingAi;

impl AiPlayer for FailingAi {
    fn choose_move(&self, _state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError> {
        Err(AiError::Internal("scripted failure".into()))
    }
}

/// Always passes, even when it must lead.
pub struct PassingAi;

impl AiPlayer for PassingAi {
    fn choose_move(&self, _state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError> {
        Ok(None)
    }
}

/// Plays the big joker whether or not it holds it.
pub struct PhantomJokerAi;

impl AiPlayer for PhantomJokerAi {
    fn choose_move(&self, state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError> {
        let joker = CardFixtures::parse_hardcoded(&["BJ"]);
        if state.hand.iter().any(|c| c.id == joker[0].id) {
            return Ok(state.legal_moves().into_iter().next());
        }
        Ok(Some(joker))
    }
}
