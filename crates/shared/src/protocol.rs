use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, EvaluationFailure};

pub const DEFAULT_PRECISION: u32 = 10;

/// Query sent to the evaluation service, one per Evaluate press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(rename = "expr")]
    pub expression: String,
    pub precision: u32,
}

impl EvaluationRequest {
    pub fn new(expression: impl Into<String>) -> Self {
        Self::with_precision(expression, DEFAULT_PRECISION)
    }

    pub fn with_precision(expression: impl Into<String>, precision: u32) -> Self {
        Self {
            expression: expression.into(),
            precision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Success { display_text: String },
    Failure(EvaluationFailure),
}

impl EvaluationOutcome {
    pub fn success(display_text: impl Into<String>) -> Self {
        EvaluationOutcome::Success {
            display_text: display_text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationOutcome::Success { .. })
    }

    pub fn failure(&self) -> Option<&EvaluationFailure> {
        match self {
            EvaluationOutcome::Failure(failure) => Some(failure),
            EvaluationOutcome::Success { .. } => None,
        }
    }
}

impl From<Result<String, EvaluationError>> for EvaluationOutcome {
    fn from(value: Result<String, EvaluationError>) -> Self {
        match value {
            Ok(display_text) => EvaluationOutcome::Success { display_text },
            Err(err) => EvaluationOutcome::Failure(err.into()),
        }
    }
}
