use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::{load_settings, MathJsClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, CalculatorController};
use crate::ui::CalculatorApp;

const APP_NAME: &str = "Calculator";
const SETTINGS_FILE_NAME: &str = "calculator.toml";

#[derive(Parser, Debug)]
#[command(about = "Keypad calculator backed by a remote evaluation service")]
struct Args {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the evaluation endpoint.
    #[arg(long)]
    endpoint: Option<String>,
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("remote_calc").join(SETTINGS_FILE_NAME))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings_path = args.config.or_else(default_settings_path);
    let mut settings = load_settings(settings_path.as_deref());
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_url = endpoint;
    }
    tracing::info!(endpoint = %settings.endpoint_url, precision = settings.precision, "loaded settings");

    let evaluator =
        MathJsClient::from_settings(&settings).context("failed to build evaluation client")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let controller = CalculatorController::new(cmd_tx, settings.precision);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([375.0, 667.0])
            .with_min_inner_size([300.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(cmd_rx, ui_tx, evaluator, move || {
                repaint_ctx.request_repaint()
            });
            Ok(Box::new(CalculatorApp::new(controller, ui_rx)))
        }),
    )
    .map_err(|err| anyhow!("failed to run calculator window: {err}"))
}
