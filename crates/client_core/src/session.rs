//! Expression buffer editor: applies keypad presses to the display text and
//! decides when a press should hand the expression to the evaluator.

use std::fmt;

use shared::{
    domain::ButtonEvent,
    error::{ErrorKind, EvaluationFailure},
    protocol::{EvaluationOutcome, EvaluationRequest, DEFAULT_PRECISION},
};
use tracing::{debug, warn};

const EMPTY_EXPRESSION: &str = "0";

/// Editable expression text. Never empty; the minimum value is `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer(String);

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self(EMPTY_EXPRESSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_reset(&self) -> bool {
        self.0 == EMPTY_EXPRESSION
    }

    pub fn clear(&mut self) {
        self.0.clear();
        self.0.push_str(EMPTY_EXPRESSION);
    }

    /// Removes the last glyph; an emptied buffer falls back to `"0"`.
    pub fn backspace(&mut self) {
        self.0.pop();
        if self.0.is_empty() {
            self.clear();
        }
    }

    /// Appends `token`, replacing the whole buffer first when `restart` is set.
    fn push(&mut self, token: char, restart: bool) {
        if restart {
            self.0.clear();
        }
        self.0.push(token);
    }

    fn replace(&mut self, text: &str) {
        self.0.clear();
        self.0.push_str(text);
    }
}

impl Default for ExpressionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A request is in flight; further Evaluate presses are dropped.
    Submitting,
    /// The buffer shows an unedited result.
    JustCompleted,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    buffer: ExpressionBuffer,
    state: SessionState,
    precision: u32,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    pub fn with_precision(precision: u32) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            state: SessionState::Idle,
            precision,
        }
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// Applies one keypad press. Returns the request to submit when the press
    /// starts an evaluation; the caller must later report its outcome through
    /// [`CalculatorSession::finish`]. Every press is dropped while a request
    /// is in flight.
    pub fn apply(&mut self, event: ButtonEvent) -> Option<EvaluationRequest> {
        if self.state == SessionState::Submitting {
            debug!(?event, "press ignored: a request is already in flight");
            return None;
        }

        match event {
            ButtonEvent::Evaluate => return self.submit(),
            ButtonEvent::Clear => self.buffer.clear(),
            ButtonEvent::Backspace => self.buffer.backspace(),
            appendable => {
                if let Some(token) = appendable.token() {
                    let restart = (self.buffer.is_reset() && appendable != ButtonEvent::Decimal)
                        || (self.state == SessionState::JustCompleted
                            && !appendable.is_operator());
                    self.buffer.push(token, restart);
                }
            }
        }

        if self.state == SessionState::JustCompleted {
            self.state = SessionState::Idle;
        }
        None
    }

    fn submit(&mut self) -> Option<EvaluationRequest> {
        match self.state {
            SessionState::JustCompleted => {
                debug!("evaluate ignored: result is already displayed");
                None
            }
            SessionState::Submitting => None,
            SessionState::Idle => {
                self.state = SessionState::Submitting;
                Some(EvaluationRequest::with_precision(
                    self.buffer.as_str(),
                    self.precision,
                ))
            }
        }
    }

    /// Records the outcome of the in-flight request. A failure leaves the
    /// buffer untouched and is handed back for the UI to surface.
    pub fn finish(&mut self, outcome: EvaluationOutcome) -> Option<EvaluationFailure> {
        if self.state != SessionState::Submitting {
            warn!(state = ?self.state, "dropping evaluation outcome with no request in flight");
            return None;
        }

        match outcome {
            EvaluationOutcome::Success { display_text } => {
                if display_text.is_empty() {
                    self.state = SessionState::Idle;
                    return Some(EvaluationFailure::new(
                        ErrorKind::ProtocolError,
                        "No data was returned.",
                    ));
                }
                self.buffer.replace(&display_text);
                self.state = SessionState::JustCompleted;
                None
            }
            EvaluationOutcome::Failure(failure) => {
                self.state = SessionState::Idle;
                Some(failure)
            }
        }
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
