use serde::Serialize;

use crate::errors::domain::DomainError;

/// Boundary-friendly `(ok, message)` result of a room operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowOutcome {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl FlowOutcome {
    pub fn success() -> Self {
        Self {
            ok: true,
            message: "ok".to_string(),
            code: None,
        }
    }

    pub fn failure(err: &DomainError) -> Self {
        Self {
            ok: false,
            message: err.detail().to_string(),
            code: Some(err.code().as_str()),
        }
    }
}

impl<T> From<Result<T, DomainError>> for FlowOutcome {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(err) => Self::failure(&err),
        }
    }
}
