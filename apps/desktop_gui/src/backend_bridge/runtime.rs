//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::Evaluator;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Starts the backend worker on its own thread. `repaint` is invoked after
/// every event posted to the UI so the frame loop wakes up.
pub fn launch<E, F>(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    evaluator: E,
    repaint: F,
) -> thread::JoinHandle<()>
where
    E: Evaluator + 'static,
    F: Fn() + Send + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let startup_error = UiEvent::Error(UiError::new(
                    UiErrorCategory::Transport,
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                ));
                if let Err(send_err) = ui_tx.try_send(startup_error) {
                    tracing::warn!("failed to post backend startup error to ui: {send_err}");
                }
                repaint();
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            if let Err(err) = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string())) {
                tracing::warn!("failed to post backend ready event to ui: {err}");
            }
            repaint();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Evaluate(request) => {
                        let outcome = evaluator.evaluate(&request).await;
                        if ui_tx.send(UiEvent::EvaluationFinished(outcome)).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                        repaint();
                    }
                }
            }
            tracing::debug!("backend command queue closed");
        });
    })
}
