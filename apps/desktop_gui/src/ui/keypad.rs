//! Keypad layout and per-key colors.

use eframe::egui::{self, Color32, RichText};
use shared::domain::ButtonEvent;

pub const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["AC", "(", ")", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "⌫", "="],
];

const KEY_SPACING: f32 = 10.0;
const KEY_FONT_SIZE: f32 = 30.0;

const CLEAR_BLUE: Color32 = Color32::from_rgb(0, 0, 255);
const OPERATOR_ORANGE: Color32 = Color32::from_rgb(255, 128, 0);
const BACKSPACE_RED: Color32 = Color32::from_rgb(255, 0, 0);
const EVALUATE_GREEN: Color32 = Color32::from_rgb(0, 128, 0);
const DIGIT_GRAY: Color32 = Color32::from_rgb(128, 128, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStyle {
    pub fill: Color32,
    pub text: Color32,
}

pub fn key_style(event: ButtonEvent) -> KeyStyle {
    match event {
        ButtonEvent::Clear => KeyStyle {
            fill: CLEAR_BLUE,
            text: Color32::WHITE,
        },
        ButtonEvent::OpenParen | ButtonEvent::CloseParen => KeyStyle {
            fill: Color32::WHITE,
            text: Color32::BLACK,
        },
        ButtonEvent::Operator(_) => KeyStyle {
            fill: OPERATOR_ORANGE,
            text: Color32::WHITE,
        },
        ButtonEvent::Backspace => KeyStyle {
            fill: BACKSPACE_RED,
            text: Color32::WHITE,
        },
        ButtonEvent::Evaluate => KeyStyle {
            fill: EVALUATE_GREEN,
            text: Color32::WHITE,
        },
        ButtonEvent::Digit(_) | ButtonEvent::Decimal => KeyStyle {
            fill: DIGIT_GRAY,
            text: Color32::WHITE,
        },
    }
}

pub fn keypad_events() -> Vec<Vec<ButtonEvent>> {
    KEYPAD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|label| ButtonEvent::from_label(label))
                .collect()
        })
        .collect()
}

/// Draws the keypad filling the remaining space; returns the pressed key.
pub fn show_keypad(ui: &mut egui::Ui, rows: &[Vec<ButtonEvent>], enabled: bool) -> Option<ButtonEvent> {
    let row_count = rows.len().max(1) as f32;
    let col_count = rows.iter().map(Vec::len).max().unwrap_or(1).max(1) as f32;
    let key_size = egui::vec2(
        (ui.available_width() - KEY_SPACING * (col_count - 1.0)) / col_count,
        (ui.available_height() - KEY_SPACING * (row_count - 1.0)) / row_count,
    );

    let mut pressed = None;
    ui.spacing_mut().item_spacing = egui::vec2(KEY_SPACING, KEY_SPACING);
    for row in rows {
        ui.horizontal(|ui| {
            for event in row {
                let style = key_style(*event);
                let button = egui::Button::new(
                    RichText::new(event.label())
                        .size(KEY_FONT_SIZE)
                        .color(style.text),
                )
                .fill(style.fill)
                .corner_radius(8.0)
                .min_size(key_size);
                if ui.add_enabled(enabled, button).clicked() {
                    pressed = Some(*event);
                }
            }
        });
    }
    pressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Operator;

    #[test]
    fn every_keypad_label_maps_to_an_event() {
        let rows = keypad_events();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(rows[0][0], ButtonEvent::Clear);
        assert_eq!(rows[4][2], ButtonEvent::Backspace);
        assert_eq!(rows[4][3], ButtonEvent::Evaluate);
    }

    #[test]
    fn right_column_operators_are_orange() {
        for row in &keypad_events()[..4] {
            assert!(row[3].is_operator());
            assert_eq!(key_style(row[3]).fill, OPERATOR_ORANGE);
        }
    }

    #[test]
    fn parens_use_dark_text_on_white() {
        let style = key_style(ButtonEvent::OpenParen);
        assert_eq!(style.fill, Color32::WHITE);
        assert_eq!(style.text, Color32::BLACK);
        assert_eq!(
            key_style(ButtonEvent::Operator(Operator::Add)).text,
            Color32::WHITE
        );
    }
}
