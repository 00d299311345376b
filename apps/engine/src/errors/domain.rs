//! Domain-level error type used across the engine.
//!
//! This error type is transport-agnostic. The boundary layer turns it into
//! its own response shape; inside the engine every operation returns
//! `Result<T, DomainError>` and validates before it mutates.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Action attempted in the wrong room status
    #[error("state error [{code}]: {detail}")]
    State { code: ErrorCode, detail: String },
    /// Actor does not hold the turn
    #[error("turn error [{code}]: {detail}")]
    Turn { code: ErrorCode, detail: String },
    /// Malformed action (pass while leading, empty play)
    #[error("action error [{code}]: {detail}")]
    Action { code: ErrorCode, detail: String },
    /// Cards do not form a combo that beats the active trick
    #[error("combo error [{code}]: {detail}")]
    Combo { code: ErrorCode, detail: String },
    /// Seat occupancy or range violation
    #[error("seat error [{code}]: {detail}")]
    Seat { code: ErrorCode, detail: String },
    /// Missing room in the in-process registry
    #[error("not found [{code}]: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    /// Caller lacks the right to perform the operation
    #[error("forbidden [{code}]: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    /// Unparseable card token (fixtures and tooling)
    #[error("parse error [{code}]: {detail}")]
    Parse { code: ErrorCode, detail: String },
}

impl DomainError {
    pub fn state(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::State {
            code,
            detail: detail.into(),
        }
    }

    pub fn turn(detail: impl Into<String>) -> Self {
        Self::Turn {
            code: ErrorCode::NotYourTurn,
            detail: detail.into(),
        }
    }

    pub fn action(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Action {
            code,
            detail: detail.into(),
        }
    }

    pub fn combo(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Combo {
            code,
            detail: detail.into(),
        }
    }

    pub fn seat(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Seat {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::Parse {
            code: ErrorCode::ParseCard,
            detail: detail.into(),
        }
    }

    /// Error code carried by any variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::State { code, .. }
            | Self::Turn { code, .. }
            | Self::Action { code, .. }
            | Self::Combo { code, .. }
            | Self::Seat { code, .. }
            | Self::NotFound { code, .. }
            | Self::Forbidden { code, .. }
            | Self::Parse { code, .. } => *code,
        }
    }

    /// Human-readable detail carried by any variant.
    pub fn detail(&self) -> &str {
        match self {
            Self::State { detail, .. }
            | Self::Turn { detail, .. }
            | Self::Action { detail, .. }
            | Self::Combo { detail, .. }
            | Self::Seat { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Forbidden { detail, .. }
            | Self::Parse { detail, .. } => detail,
        }
    }
}
