//! Bot players for seats not held by a human.
//!
//! This module provides:
//! - `AiPlayer`, the trait every bot implements
//! - `Heuristic`: the default scoring bot
//! - `RandomPlayer`: uniform over legal moves (seedable for tests)
//! - A static registry to build bots by name

pub mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::{AiConfig, HeuristicWeights};
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, create_ai, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer};
