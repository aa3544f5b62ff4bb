use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "There was a problem with retrieving the result.";
pub const INVALID_EXPRESSION_MESSAGE: &str = "The expression you entered is invalid.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequestConstructionError,
    TransportError,
    InvalidExpression,
    ProtocolError,
}

/// Categorized failure of a single evaluation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationFailure {
    pub kind: ErrorKind,
    pub debug_message: String,
    pub user_message: String,
}

impl EvaluationFailure {
    pub fn new(kind: ErrorKind, debug_message: impl Into<String>) -> Self {
        let user_message = match kind {
            ErrorKind::InvalidExpression => INVALID_EXPRESSION_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        };
        Self {
            kind,
            debug_message: debug_message.into(),
            user_message: user_message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("the request url could not be generated: {0}")]
    RequestConstruction(String),
    #[error("{0}")]
    Transport(String),
    #[error("{}", INVALID_EXPRESSION_MESSAGE)]
    InvalidExpression,
    #[error("{0}")]
    Protocol(String),
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::RequestConstruction(_) => ErrorKind::RequestConstructionError,
            EvaluationError::Transport(_) => ErrorKind::TransportError,
            EvaluationError::InvalidExpression => ErrorKind::InvalidExpression,
            EvaluationError::Protocol(_) => ErrorKind::ProtocolError,
        }
    }
}

impl From<EvaluationError> for EvaluationFailure {
    fn from(value: EvaluationError) -> Self {
        EvaluationFailure::new(value.kind(), value.to_string())
    }
}
