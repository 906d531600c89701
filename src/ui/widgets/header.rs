//! Header banner: title, version, endpoint, and the gated session if any.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::session::Session;
use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ENDPOINT_LABEL: &str = "webhook: ";

/// Truncate to `max_chars` from the end with an ellipsis.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    endpoint: &str,
    session: Option<&Session>,
) {
    let border = Style::default().fg(colors::BORDER);
    let total = (area.width as usize).saturating_sub(2);
    let dash_count = total.saturating_sub(2);
    // Inner content width between "│ " and " │".
    let inner = total.saturating_sub(4);

    let session_hint = match session {
        Some(s) => format!("session {}", s.masked_phone()),
        None => String::new(),
    };
    let title = format!("Charla (v{VERSION})");
    let title_pad = inner.saturating_sub(title.chars().count() + session_hint.chars().count());

    let endpoint_show = truncate_end(endpoint, inner.saturating_sub(ENDPOINT_LABEL.chars().count()));
    let endpoint_pad =
        inner.saturating_sub(ENDPOINT_LABEL.chars().count() + endpoint_show.chars().count());

    let lines = vec![
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╭{}╮", "─".repeat(dash_count)), border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled(title, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(title_pad)),
            Span::styled(session_hint, Style::default().fg(colors::TEXT_DIM)),
            Span::styled(" │", border),
        ]),
        Line::from(vec![
            Span::styled("  │", border),
            Span::raw(" ".repeat(dash_count)),
            Span::styled("│", border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled(ENDPOINT_LABEL, Style::default().fg(colors::TEXT_DIM)),
            Span::styled(endpoint_show, Style::default().fg(colors::MUTED)),
            Span::raw(" ".repeat(endpoint_pad)),
            Span::styled(" │", border),
        ]),
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╰{}╯", "─".repeat(dash_count)), border),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).style(Style::default().bg(colors::BG)), area);
}
