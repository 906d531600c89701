//! Widget state: view, gate, chat transcript, input.

use std::time::SystemTime;

use crate::session::Session;

/// Which side of the conversation a message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Bot,
    System,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: SystemTime,
}

impl Message {
    pub fn user(content: String) -> Self {
        Self { role: MessageRole::User, content, timestamp: SystemTime::now() }
    }
    pub fn bot(content: String) -> Self {
        Self { role: MessageRole::Bot, content, timestamp: SystemTime::now() }
    }
    pub fn system(content: String) -> Self {
        Self { role: MessageRole::System, content, timestamp: SystemTime::now() }
    }
}

/// Append-only transcript. `scroll_back` counts lines scrolled up from the
/// newest entry; zero means the view is pinned to the bottom.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub scroll_back: usize,
}

impl ChatState {
    /// Append a message and snap the view back to the newest entry.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll_back = 0;
    }
}

/// Widget phase. The gate is terminal: once a session opens there is no way
/// back to the gate view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Gate,
    Chat,
}

/// Pre-chat gate: the last validation error, shown until the next attempt.
#[derive(Clone, Debug, Default)]
pub struct GateState {
    pub error: Option<String>,
}

/// Global widget state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: View,
    pub gate: GateState,
    pub session: Option<Session>,
    pub chat: ChatState,
    pub input_buffer: String,
    /// Byte offset into `input_buffer`, always on a char boundary.
    pub input_cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    /// True while a webhook request is in flight (single-slot guard).
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut chat = ChatState::default();
        chat.push(Message::user("one".into()));
        chat.push(Message::bot("two".into()));
        chat.push(Message::user("three".into()));

        let contents: Vec<&str> = chat.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two", "three"]);
        assert_eq!(chat.messages[0].role, MessageRole::User);
        assert_eq!(chat.messages[1].role, MessageRole::Bot);
    }

    #[test]
    fn push_n_messages_yields_n_entries() {
        let mut chat = ChatState::default();
        for i in 0..25 {
            chat.push(Message::bot(format!("reply {i}")));
        }
        assert_eq!(chat.messages.len(), 25);
    }

    #[test]
    fn push_snaps_scroll_to_newest() {
        let mut chat = ChatState::default();
        chat.push(Message::user("hi".into()));
        chat.scroll_back = 12;
        chat.push(Message::bot("hello".into()));
        assert_eq!(chat.scroll_back, 0);
    }
}
