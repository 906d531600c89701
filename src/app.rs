//! Widget controller: state container and action dispatch.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::actions::Action;
use crate::session::Session;
use crate::state::{AppState, Message, View};
use crate::webhook::{WebhookClient, WebhookError};

/// Shown as the bot turn when the webhook cannot be reached.
pub const FALLBACK_REPLY: &str = "Sorry, I can't reach my brain right now. Please try again in a moment.";
/// Shown when the webhook answers 2xx without a reply field.
pub const EMPTY_REPLY: &str = "(no reply)";

const WELCOME: &str = "Connected. Type a message and press Enter.";

type ReplyResult = Result<Option<String>, WebhookError>;

pub struct App {
    pub state: AppState,
    client: Arc<WebhookClient>,
    handle: Handle,
    reply_tx: UnboundedSender<ReplyResult>,
    reply_rx: UnboundedReceiver<ReplyResult>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(client: WebhookClient, handle: Handle) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client: Arc::new(client),
            handle,
            reply_tx,
            reply_rx,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Drain finished webhook requests; called once per tick by the event loop.
    pub fn poll_replies(&mut self) {
        while let Ok(result) = self.reply_rx.try_recv() {
            self.state.loading = false;
            match result {
                Ok(reply) => {
                    let text = reply.unwrap_or_else(|| EMPTY_REPLY.to_string());
                    self.state.chat.push(Message::bot(text));
                }
                Err(err) => {
                    tracing::error!(error = %err, "webhook request failed");
                    self.state.chat.push(Message::bot(FALLBACK_REPLY.to_string()));
                }
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
            }
            Action::Backspace => {
                let before = &self.state.input_buffer[..self.state.input_cursor];
                if let Some((idx, _)) = before.char_indices().last() {
                    self.state.input_buffer.remove(idx);
                    self.state.input_cursor = idx;
                }
            }
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
            }
            Action::Submit => self.submit_input(),

            Action::ChatScrollPageUp => {
                self.state.chat.scroll_back = self.state.chat.scroll_back.saturating_add(10);
            }
            Action::ChatScrollPageDown => {
                self.state.chat.scroll_back = self.state.chat.scroll_back.saturating_sub(10);
            }

            Action::HistoryUp => self.history_up(),
            Action::HistoryDown => self.history_down(),
        }
    }

    fn submit_input(&mut self) {
        match self.state.view {
            View::Gate => self.submit_phone(),
            View::Chat => self.send_message(),
        }
    }

    /// Gate attempt: validate the typed candidate and open the session.
    fn submit_phone(&mut self) {
        match Session::open(&self.state.input_buffer) {
            Ok(session) => {
                self.state.session = Some(session);
                self.state.view = View::Chat;
                self.state.gate.error = None;
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
                self.state.chat.push(Message::system(WELCOME.to_string()));
            }
            Err(err) => {
                // Stay in the gate; keep the candidate so it can be corrected.
                self.state.gate.error = Some(err.to_string());
            }
        }
    }

    /// Send the current input line to the webhook. No-op on empty input or
    /// while a request is already in flight (single-slot guard); the draft
    /// stays in the input bar in the latter case.
    fn send_message(&mut self) {
        let text = self.state.input_buffer.trim().to_string();
        if text.is_empty() {
            return;
        }
        if self.state.loading {
            return;
        }
        let Some(session) = self.state.session.clone() else {
            return;
        };

        if self.state.history.last() != Some(&text) {
            self.state.history.push(text.clone());
        }
        self.state.history_index = self.state.history.len();

        // The user's turn renders before the request starts.
        self.state.chat.push(Message::user(text.clone()));
        self.state.input_buffer.clear();
        self.state.input_cursor = 0;
        self.state.loading = true;

        let client = Arc::clone(&self.client);
        let tx = self.reply_tx.clone();
        self.handle.spawn(async move {
            let result = client.send(&text, &session).await;
            let _ = tx.send(result);
        });
    }

    fn history_up(&mut self) {
        if !self.state.history.is_empty() && self.state.history_index > 0 {
            self.state.history_index -= 1;
            self.state.input_buffer = self.state.history[self.state.history_index].clone();
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }

    fn history_down(&mut self) {
        if self.state.history_index < self.state.history.len() {
            self.state.history_index += 1;
            self.state.input_buffer = if self.state.history_index >= self.state.history.len() {
                String::new()
            } else {
                self.state.history[self.state.history_index].clone()
            };
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }
}
