//! Engine configuration: buffer limits and the bot used for bot seats.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::ai::AiConfig;
use crate::domain::rules::{DEFAULT_EMOTE_LIMIT, DEFAULT_HAND_HISTORY_LIMIT, DEFAULT_LOG_LIMIT};
use crate::domain::RoomSettings;

pub const ENV_HISTORY_LIMIT: &str = "SIXHAND_HISTORY_LIMIT";
pub const ENV_EMOTE_LIMIT: &str = "SIXHAND_EMOTE_LIMIT";
pub const ENV_LOG_LIMIT: &str = "SIXHAND_LOG_LIMIT";
pub const ENV_AI: &str = "SIXHAND_AI";
pub const ENV_AI_CONFIG: &str = "SIXHAND_AI_CONFIG";

const DEFAULT_AI: &str = "Heuristic";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hand_history_limit: usize,
    pub emote_limit: usize,
    pub log_limit: usize,
    /// Registry name of the bot driving bot seats.
    pub ai_name: String,
    pub ai: AiConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_history_limit: DEFAULT_HAND_HISTORY_LIMIT,
            emote_limit: DEFAULT_EMOTE_LIMIT,
            log_limit: DEFAULT_LOG_LIMIT,
            ai_name: DEFAULT_AI.to_string(),
            ai: AiConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by any `SIXHAND_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parsed_var(ENV_HISTORY_LIMIT)? {
            config.hand_history_limit = v;
        }
        if let Some(v) = parsed_var(ENV_EMOTE_LIMIT)? {
            config.emote_limit = v;
        }
        if let Some(v) = parsed_var(ENV_LOG_LIMIT)? {
            config.log_limit = v;
        }
        if let Ok(name) = env::var(ENV_AI) {
            config.ai_name = name;
        }
        if let Ok(raw) = env::var(ENV_AI_CONFIG) {
            let json: JsonValue = serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid {
                name: ENV_AI_CONFIG,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.ai = serde_json::from_value(json).map_err(|e| ConfigError::Invalid {
                name: ENV_AI_CONFIG,
                value: raw,
                reason: e.to_string(),
            })?;
        }
        Ok(config)
    }

    pub fn settings(&self) -> RoomSettings {
        RoomSettings {
            hand_history_limit: self.hand_history_limit,
            emote_limit: self.emote_limit,
            log_limit: self.log_limit,
        }
    }
}

fn parsed_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                name,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
