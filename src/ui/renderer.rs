//! Frame render: header, gate or chat body, input bar, status line.

use ratatui::Frame;

use crate::app::App;
use crate::state::View;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{render_chat, render_gate, render_header, render_input, render_status};

pub fn render(f: &mut Frame, app: &App) {
    let regions = layout::compute(f.area());
    let spinner_char = SPINNER[app.tick % SPINNER.len()];

    render_header(f, regions.header, app.endpoint(), app.state.session.as_ref());

    match app.state.view {
        View::Gate => render_gate(f, &app.state.gate, regions.body),
        View::Chat => render_chat(
            f,
            &app.state.chat,
            regions.body,
            app.state.loading,
            spinner_char,
        ),
    }

    render_input(
        f,
        &app.state.input_buffer,
        app.state.input_cursor,
        regions.input,
    );
    render_status(f, regions.status, app.state.view, app.state.loading, spinner_char);
}
