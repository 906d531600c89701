//! Pre-chat gate panel: phone prompt and validation feedback.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::GateState;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, gate: &GateState, area: ratatui::prelude::Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Enter your phone number to start chatting.",
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Digits only, including country code (11-15 digits).",
            Style::default().fg(colors::MUTED),
        )),
    ];

    if let Some(error) = &gate.error {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::ERROR),
        )));
    }

    let block = Block::default()
        .title(" Before we start ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}
