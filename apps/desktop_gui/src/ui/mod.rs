//! UI layer for desktop GUI: app shell, display, keypad, and error alert.

pub mod app;
pub mod keypad;

pub use app::CalculatorApp;
