//! Terminal lifecycle, event loop, and cleanup for the Charla widget.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use charla_tui::app::App;
use charla_tui::config::Config;
use charla_tui::events::{key_to_action, TICK_RATE};
use charla_tui::ui;
use charla_tui::webhook::WebhookClient;

fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("charla_tui=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    let runtime = tokio::runtime::Runtime::new()?;

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let mut app = App::new(WebhookClient::new(config.webhook_url), runtime.handle().clone());

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_replies();

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(&key, app.state.view) {
                    app.dispatch(action);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
