//! UI/backend events and error modeling for desktop GUI controller.

use shared::{
    error::{ErrorKind, EvaluationFailure},
    protocol::EvaluationOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    EvaluationFinished(EvaluationOutcome),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Evaluate,
}

/// Error surfaced in the alert window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_failure(failure: &EvaluationFailure) -> Self {
        let category = match failure.kind {
            ErrorKind::InvalidExpression => UiErrorCategory::Validation,
            ErrorKind::TransportError => UiErrorCategory::Transport,
            ErrorKind::RequestConstructionError | ErrorKind::ProtocolError => {
                UiErrorCategory::Protocol
            }
        };
        Self::new(category, UiErrorContext::Evaluate, failure.user_message.clone())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match (self.context, self.category) {
            (UiErrorContext::BackendStartup, _) => "Startup error",
            (_, UiErrorCategory::Validation) => "Invalid expression",
            _ => "Error",
        }
    }
}
