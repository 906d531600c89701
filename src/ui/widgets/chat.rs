//! Chat transcript: labelled message blocks, pinned to the newest entry.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ChatState, MessageRole};
use crate::ui::theme::{colors, MESSAGE_GAP};

pub fn render(
    f: &mut Frame,
    chat: &ChatState,
    area: ratatui::prelude::Rect,
    loading: bool,
    spinner_char: char,
) {
    let mut lines: Vec<Line> = Vec::new();
    let mut first_message = true;

    for msg in &chat.messages {
        if !first_message {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        first_message = false;

        let (label, label_style) = match msg.role {
            MessageRole::User => (
                "You",
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            MessageRole::Bot => (
                "Bot",
                Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
            ),
            MessageRole::System => ("", Style::default().fg(colors::TEXT_DIM)),
        };
        let content_style = match msg.role {
            MessageRole::System => Style::default().fg(colors::TEXT_DIM),
            _ => Style::default().fg(colors::TEXT),
        };

        let mut content_lines = msg.content.lines();
        let first = content_lines.next().unwrap_or("");
        let mut spans = Vec::new();
        if !label.is_empty() {
            spans.push(Span::styled(format!("{label} "), label_style));
        }
        spans.push(Span::styled(first.to_string(), content_style));
        lines.push(Line::from(spans));
        for rest in content_lines {
            lines.push(Line::from(vec![
                Span::raw(if label.is_empty() { "" } else { "    " }),
                Span::styled(rest.to_string(), content_style),
            ]));
        }
    }

    if loading {
        if !lines.is_empty() {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        lines.push(Line::from(vec![
            Span::styled(
                "Bot ",
                Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{spinner_char} "), Style::default().fg(colors::ACCENT)),
            Span::styled("typing…", Style::default().fg(colors::TEXT_DIM)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Say hello — Enter sends.",
            Style::default().fg(colors::MUTED),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // `scroll_back` counts lines up from the bottom; clamp it so the view
    // never overshoots the top.
    let height = inner.height as usize;
    let total = lines.len();
    let max_back = total.saturating_sub(height);
    let back = chat.scroll_back.min(max_back);
    let offset = max_back - back;
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    let para = Paragraph::new(visible)
        .style(Style::default().fg(colors::TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}
