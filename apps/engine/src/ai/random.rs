//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline [`AiPlayer`](super::AiPlayer): uniform over
//! the legal moves, optionally seeded for reproducible simulations.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::CurrentTrickInfo;
use crate::domain::Card;

/// AI that makes random legal moves.
///
/// When responding, passing is one more option alongside the legal moves,
/// so with `n` legal moves it passes with probability `1 / (n + 1)`. When
/// leading it always plays.
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible behavior, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, state: &CurrentTrickInfo) -> Result<Option<Vec<Card>>, AiError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            if state.is_leading() {
                return Err(AiError::InvalidMove("No legal leads available".into()));
            }
            return Ok(None);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let options = if state.is_leading() {
            legal.len()
        } else {
            legal.len() + 1
        };
        let pick = rng.random_range(0..options);
        Ok(legal.into_iter().nth(pick))
    }
}
