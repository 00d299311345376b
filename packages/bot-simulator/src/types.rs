//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish
    Jsonl,
    /// A single JSON array written at the end
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Name of the bot in the engine's registry.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "Heuristic",
            AiType::Random => "RandomPlayer",
        }
    }
}
