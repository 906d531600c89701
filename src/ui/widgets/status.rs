//! Status line: request state on the left, key hints on the right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::state::View;
use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    view: View,
    loading: bool,
    spinner_char: char,
) {
    let left = if loading {
        format!(" {spinner_char} Sending…")
    } else {
        " Ready".to_string()
    };
    let right = match view {
        View::Gate => " Enter start  Ctrl+C quit ",
        View::Chat => " ↑↓ history  PgUp/PgDn scroll  Enter send  Ctrl+C quit ",
    };
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{left}{}{right}", " ".repeat(pad));
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
