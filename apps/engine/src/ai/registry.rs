//! Static registry of bot implementations.
//!
//! A new bot implements `AiPlayer` and gets one `AiFactory` entry below with
//! a stable `name`. Constructors must be side-effect free, and a bot built
//! twice from the same seeded config must make the same choices.

use crate::ai::{AiConfig, AiPlayer, Heuristic, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

/// Build the named AI, or `None` if no factory has that name.
pub fn create_ai(name: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    by_name(name).map(|factory| (factory.make)(config))
}

fn make_heuristic(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new(config))
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(config.seed()))
}
