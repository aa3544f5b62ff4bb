use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown on the keypad and kept in the expression buffer.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Form understood by the evaluation service.
    pub fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '×' | '*' | 'x' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ButtonEvent {
    Digit(u8),
    Decimal,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Clear,
    Backspace,
    Evaluate,
}

impl ButtonEvent {
    pub const CLEAR_LABEL: &'static str = "AC";
    pub const BACKSPACE_LABEL: &'static str = "⌫";
    pub const EVALUATE_LABEL: &'static str = "=";

    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(ButtonEvent::Digit(d))
    }

    /// Parses a keypad label. ASCII aliases are accepted so the events can be
    /// typed from a terminal.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            Self::CLEAR_LABEL | "C" | "c" | "ac" => return Some(ButtonEvent::Clear),
            Self::BACKSPACE_LABEL | "<" | "bs" | "backspace" => {
                return Some(ButtonEvent::Backspace)
            }
            Self::EVALUATE_LABEL => return Some(ButtonEvent::Evaluate),
            _ => {}
        }

        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::from_char(c)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => ButtonEvent::digit(c as u8 - b'0'),
            '.' => Some(ButtonEvent::Decimal),
            '(' => Some(ButtonEvent::OpenParen),
            ')' => Some(ButtonEvent::CloseParen),
            '=' => Some(ButtonEvent::Evaluate),
            other => Operator::from_char(other).map(ButtonEvent::Operator),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ButtonEvent::Clear => Self::CLEAR_LABEL.to_string(),
            ButtonEvent::Backspace => Self::BACKSPACE_LABEL.to_string(),
            ButtonEvent::Evaluate => Self::EVALUATE_LABEL.to_string(),
            other => other
                .token()
                .map(String::from)
                .unwrap_or_default(),
        }
    }

    /// The character appended to the expression buffer, if the event appends.
    pub fn token(&self) -> Option<char> {
        match self {
            ButtonEvent::Digit(d) => char::from_digit(u32::from(*d), 10),
            ButtonEvent::Decimal => Some('.'),
            ButtonEvent::Operator(op) => Some(op.glyph()),
            ButtonEvent::OpenParen => Some('('),
            ButtonEvent::CloseParen => Some(')'),
            ButtonEvent::Clear | ButtonEvent::Backspace | ButtonEvent::Evaluate => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, ButtonEvent::Operator(_))
    }
}
