//! UI-thread state: the calculator session plus the alert and status line.
//! Only this type mutates the session; backend results arrive as [`UiEvent`]s.

use client_core::CalculatorSession;
use crossbeam_channel::{Receiver, Sender};
use shared::{
    domain::ButtonEvent,
    error::{ErrorKind, EvaluationFailure},
    protocol::EvaluationOutcome,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub struct CalculatorController {
    session: CalculatorSession,
    cmd_tx: Sender<BackendCommand>,
    alert: Option<UiError>,
    status: String,
}

impl CalculatorController {
    pub fn new(cmd_tx: Sender<BackendCommand>, precision: u32) -> Self {
        Self {
            session: CalculatorSession::with_precision(precision),
            cmd_tx,
            alert: None,
            status: String::new(),
        }
    }

    pub fn display(&self) -> &str {
        self.session.display()
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_submitting()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn alert(&self) -> Option<&UiError> {
        self.alert.as_ref()
    }

    /// The keypad is locked while a request is in flight or an alert waits
    /// for acknowledgement.
    pub fn keypad_locked(&self) -> bool {
        self.alert.is_some() || self.is_busy()
    }

    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }

    pub fn press(&mut self, event: ButtonEvent) {
        if self.keypad_locked() {
            return;
        }

        let Some(request) = self.session.apply(event) else {
            return;
        };

        tracing::info!(expression = %request.expression, "submitting expression");
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::Evaluate(request)) {
            Ok(()) => self.status = "Evaluating...".to_string(),
            Err(message) => {
                let failure = EvaluationFailure::new(ErrorKind::TransportError, message);
                self.finish(EvaluationOutcome::Failure(failure));
            }
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::EvaluationFinished(outcome) => self.finish(outcome),
            UiEvent::Error(err) => {
                self.status = err.message().to_string();
                self.alert = Some(err);
            }
        }
    }

    pub fn drain_events(&mut self, ui_rx: &Receiver<UiEvent>) -> usize {
        let mut handled = 0;
        while let Ok(event) = ui_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    fn finish(&mut self, outcome: EvaluationOutcome) {
        self.status.clear();
        if let Some(failure) = self.session.finish(outcome) {
            tracing::debug!(kind = ?failure.kind, "evaluation failed: {}", failure.debug_message);
            self.alert = Some(UiError::from_failure(&failure));
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
