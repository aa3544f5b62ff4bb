use std::{path::PathBuf, process::ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, CalculatorSession, Evaluator, MathJsClient};
use shared::{
    domain::ButtonEvent,
    error::EvaluationFailure,
    protocol::{EvaluationOutcome, EvaluationRequest},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calc", about = "Evaluate arithmetic through the remote evaluation service")]
struct Args {
    /// Expression to evaluate, e.g. "6÷2" or "(1+2)*3".
    #[arg(conflicts_with = "keys")]
    expression: Option<String>,
    /// Space-separated keypad labels replayed through a session, e.g. "7 × 6 =".
    #[arg(long)]
    keys: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    endpoint: Option<String>,
    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

/// Splits a key script into events. Whole tokens are tried as labels first
/// (`AC`, `⌫`), otherwise each character is a key.
fn parse_keys(script: &str) -> Result<Vec<ButtonEvent>> {
    let mut events = Vec::new();
    for token in script.split_whitespace() {
        if let Some(event) = ButtonEvent::from_label(token) {
            events.push(event);
            continue;
        }
        for c in token.chars() {
            match ButtonEvent::from_char(c) {
                Some(event) => events.push(event),
                None => bail!("unknown key '{c}' in '{token}'"),
            }
        }
    }
    Ok(events)
}

/// Feeds `events` through `session`, awaiting each submitted evaluation
/// before the next key. Returns the failures in the order they occurred.
async fn replay(
    session: &mut CalculatorSession,
    evaluator: &impl Evaluator,
    events: &[ButtonEvent],
) -> Vec<EvaluationFailure> {
    let mut failures = Vec::new();
    for event in events {
        if let Some(request) = session.apply(*event) {
            let outcome = evaluator.evaluate(&request).await;
            if let Some(failure) = session.finish(outcome) {
                tracing::debug!(kind = ?failure.kind, "{}", failure.debug_message);
                failures.push(failure);
            }
        }
    }
    failures
}

fn print_outcome(outcome: &EvaluationOutcome, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    }
    match outcome {
        EvaluationOutcome::Success { display_text } => {
            if !json {
                println!("{display_text}");
            }
            Ok(ExitCode::SUCCESS)
        }
        EvaluationOutcome::Failure(failure) => {
            eprintln!("{}", failure.user_message);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_url = endpoint;
    }
    let client =
        MathJsClient::from_settings(&settings).context("failed to build evaluation client")?;

    if let Some(script) = args.keys {
        let events = parse_keys(&script)?;
        let mut session = CalculatorSession::with_precision(settings.precision);
        let mut failures = replay(&mut session, &client, &events).await;
        let outcome = match failures.pop() {
            Some(failure) => EvaluationOutcome::Failure(failure),
            None => EvaluationOutcome::success(session.display()),
        };
        return print_outcome(&outcome, args.json);
    }

    let Some(expression) = args.expression else {
        bail!("provide an expression or --keys");
    };
    let request = EvaluationRequest::with_precision(expression, settings.precision);
    let outcome = client.evaluate(&request).await;
    print_outcome(&outcome, args.json)
}
