#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for a six-seat, two-team climbing card game, with bot
//! players for empty seats and an in-process room registry.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

pub use config::EngineConfig;
pub use errors::{DomainError, ErrorCode};
pub use services::{FlowOutcome, RoomFlowService, RoomRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
