//! Theme: dark palette and layout metrics.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (chat and gate panels).
    pub const BG: Color = Color::Rgb(0x14, 0x17, 0x1d);
    /// Input bar and status line.
    pub const ELEVATED: Color = Color::Rgb(0x11, 0x14, 0x19);
    /// Borders and separators.
    pub const BORDER: Color = Color::Rgb(0x2a, 0x31, 0x3b);
    /// Primary accent (prompt, "You" label).
    pub const ACCENT: Color = Color::Rgb(0x7d, 0xc4, 0x83);
    /// Bot label.
    pub const ACCENT_SOFT: Color = Color::Rgb(0xb5, 0xdc, 0xa8);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf0, 0xf2, 0xf6);
    /// Secondary text (system notices, timestamps).
    pub const TEXT_DIM: Color = Color::Rgb(0xb8, 0xc1, 0xcc);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x8e, 0x98, 0xa6);
    /// Validation and failure text.
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
}

pub const HEADER_HEIGHT: u16 = 5;
pub const INPUT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_BODY_LINES: u16 = 3;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
/// Blank lines between transcript messages.
pub const MESSAGE_GAP: usize = 1;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
