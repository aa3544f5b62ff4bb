use std::time::Duration;

use arboard::Clipboard;
use crossbeam_channel::Receiver;
use eframe::egui;
use shared::domain::ButtonEvent;

use crate::controller::{events::UiEvent, CalculatorController};
use crate::ui::keypad::{keypad_events, show_keypad};

const DISPLAY_FONT_SIZE: f32 = 48.0;
const OUTER_MARGIN: i8 = 20;

pub struct CalculatorApp {
    controller: CalculatorController,
    ui_rx: Receiver<UiEvent>,
    keypad: Vec<Vec<ButtonEvent>>,
}

impl CalculatorApp {
    pub fn new(controller: CalculatorController, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller,
            ui_rx,
            keypad: keypad_events(),
        }
    }

    fn copy_display_to_clipboard(&mut self) {
        match Clipboard::new().and_then(|mut clipboard| {
            clipboard.set_text(self.controller.display().to_string())
        }) {
            Ok(()) => tracing::debug!("copied display to clipboard"),
            Err(err) => tracing::warn!("clipboard unavailable: {err}"),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Text(text) => {
                    for c in text.chars() {
                        if let Some(event) = ButtonEvent::from_char(c) {
                            self.controller.press(event);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Backspace => self.controller.press(ButtonEvent::Backspace),
                    egui::Key::Enter | egui::Key::Escape if self.controller.alert().is_some() => {
                        self.controller.acknowledge_alert()
                    }
                    egui::Key::Delete | egui::Key::Escape => {
                        self.controller.press(ButtonEvent::Clear)
                    }
                    egui::Key::Enter => self.controller.press(ButtonEvent::Evaluate),
                    _ => {}
                },
                egui::Event::Copy => self.copy_display_to_clipboard(),
                _ => {}
            }
        }
    }

    fn show_display(&mut self, ui: &mut egui::Ui) {
        let height = ui.available_height() * 0.1;
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), height.max(DISPLAY_FONT_SIZE)),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                let response = ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.controller.display())
                            .size(DISPLAY_FONT_SIZE)
                            .color(egui::Color32::WHITE),
                    )
                    .truncate()
                    .sense(egui::Sense::click()),
                );
                response.context_menu(|ui| {
                    if ui.button("Copy").clicked() {
                        self.copy_display_to_clipboard();
                        ui.close();
                    }
                });
            },
        );

        let status = self.controller.status();
        if !status.is_empty() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(status).color(egui::Color32::GRAY));
            });
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.controller.alert().cloned() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(alert.title())
            .id(egui::Id::new("evaluation_alert"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(alert.message());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.controller.acknowledge_alert();
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.drain_events(&self.ui_rx);
        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::BLACK)
                    .inner_margin(egui::Margin::same(OUTER_MARGIN)),
            )
            .show(ctx, |ui| {
                self.show_display(ui);
                ui.add_space(f32::from(OUTER_MARGIN));
                let enabled = !self.controller.keypad_locked();
                if let Some(event) = show_keypad(ui, &self.keypad, enabled) {
                    self.controller.press(event);
                }
            });

        self.show_alert(ctx);

        if self.controller.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
