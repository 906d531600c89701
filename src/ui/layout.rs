//! Single-column layout: header, body, input bar, status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_BODY_LINES, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub body: Rect,
    pub input: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_BODY_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let body = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        header: chunks[0],
        body,
        input: chunks[2],
        status: chunks[3],
    }
}
