use super::*;
use crate::controller::events::{UiErrorCategory, UiErrorContext};
use crossbeam_channel::bounded;
use shared::{domain::Operator, protocol::EvaluationRequest};

fn controller() -> (CalculatorController, Receiver<BackendCommand>) {
    let (cmd_tx, cmd_rx) = bounded(8);
    (CalculatorController::new(cmd_tx, 10), cmd_rx)
}

#[test]
fn evaluate_queues_single_backend_command() {
    let (mut controller, cmd_rx) = controller();
    controller.press(ButtonEvent::Digit(6));
    controller.press(ButtonEvent::Operator(Operator::Divide));
    controller.press(ButtonEvent::Digit(2));
    controller.press(ButtonEvent::Evaluate);
    controller.press(ButtonEvent::Evaluate);

    assert_eq!(
        cmd_rx.try_recv().expect("command"),
        BackendCommand::Evaluate(EvaluationRequest::new("6÷2"))
    );
    assert!(cmd_rx.try_recv().is_err());
    assert!(controller.is_busy());
    assert_eq!(controller.status(), "Evaluating...");
}

#[test]
fn keypad_is_locked_while_request_in_flight() {
    let (mut controller, cmd_rx) = controller();
    controller.press(ButtonEvent::Digit(2));
    controller.press(ButtonEvent::Operator(Operator::Add));
    controller.press(ButtonEvent::Digit(2));
    controller.press(ButtonEvent::Evaluate);
    assert!(controller.is_busy());
    assert!(controller.keypad_locked());
    assert!(controller.alert().is_none());

    controller.press(ButtonEvent::Digit(9));
    controller.press(ButtonEvent::Clear);
    controller.press(ButtonEvent::Digit(5));
    assert_eq!(controller.display(), "2+2");

    controller.handle_event(UiEvent::EvaluationFinished(EvaluationOutcome::success("4")));
    assert_eq!(controller.display(), "4");
    assert!(!controller.keypad_locked());

    controller.press(ButtonEvent::Operator(Operator::Multiply));
    assert_eq!(controller.display(), "4×");
    assert!(cmd_rx.try_recv().is_ok());
    assert!(cmd_rx.try_recv().is_err());
}

#[test]
fn success_event_replaces_display() {
    let (mut controller, _cmd_rx) = controller();
    controller.press(ButtonEvent::Digit(4));
    controller.press(ButtonEvent::Evaluate);

    controller.handle_event(UiEvent::EvaluationFinished(EvaluationOutcome::success("4")));
    assert_eq!(controller.display(), "4");
    assert!(!controller.is_busy());
    assert!(controller.alert().is_none());
    assert!(controller.status().is_empty());
}

#[test]
fn failure_event_opens_alert_and_locks_keypad() {
    let (mut controller, _cmd_rx) = controller();
    controller.press(ButtonEvent::Digit(1));
    controller.press(ButtonEvent::Operator(Operator::Add));
    controller.press(ButtonEvent::Evaluate);

    controller.handle_event(UiEvent::EvaluationFinished(EvaluationOutcome::Failure(
        EvaluationFailure::new(ErrorKind::InvalidExpression, "400"),
    )));
    assert_eq!(controller.display(), "1+");
    assert!(!controller.is_busy());
    assert!(controller.keypad_locked());
    assert_eq!(
        controller.alert().map(UiError::category),
        Some(UiErrorCategory::Validation)
    );

    controller.press(ButtonEvent::Digit(9));
    assert_eq!(controller.display(), "1+");

    controller.acknowledge_alert();
    controller.press(ButtonEvent::Digit(9));
    assert_eq!(controller.display(), "1+9");
}

#[test]
fn disconnected_backend_fails_submission_locally() {
    let (cmd_tx, cmd_rx) = bounded(1);
    drop(cmd_rx);
    let mut controller = CalculatorController::new(cmd_tx, 10);
    controller.press(ButtonEvent::Digit(3));
    controller.press(ButtonEvent::Evaluate);

    assert!(!controller.is_busy());
    assert_eq!(controller.display(), "3");
    assert_eq!(
        controller.alert().map(UiError::category),
        Some(UiErrorCategory::Transport)
    );
}

#[test]
fn drains_all_pending_events() {
    let (mut controller, _cmd_rx) = controller();
    let (ui_tx, ui_rx) = bounded(8);
    controller.press(ButtonEvent::Digit(2));
    controller.press(ButtonEvent::Evaluate);

    ui_tx
        .send(UiEvent::Info("Backend worker ready".to_string()))
        .expect("send");
    ui_tx
        .send(UiEvent::EvaluationFinished(EvaluationOutcome::success("2")))
        .expect("send");

    assert_eq!(controller.drain_events(&ui_rx), 2);
    assert_eq!(controller.display(), "2");
}

#[test]
fn backend_startup_error_is_shown_as_alert() {
    let (mut controller, _cmd_rx) = controller();
    controller.handle_event(UiEvent::Error(UiError::new(
        UiErrorCategory::Transport,
        UiErrorContext::BackendStartup,
        "failed to build runtime",
    )));
    assert_eq!(controller.alert().map(UiError::title), Some("Startup error"));
}
