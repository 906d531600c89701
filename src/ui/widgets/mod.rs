//! TUI widgets: header banner, gate panel, chat transcript, input bar, status.

mod chat;
mod gate;
mod header;
mod input;
mod status;

pub use chat::render as render_chat;
pub use gate::render as render_gate;
pub use header::render as render_header;
pub use input::render as render_input;
pub use status::render as render_status;
