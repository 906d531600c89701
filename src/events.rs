//! Keybindings: Enter submits, Ctrl+C quits, Ctrl+L clears, Up/Down history,
//! PgUp/PgDn scroll.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::Action;
use crate::state::View;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, view: View) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::Submit);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }

    // History and transcript scrolling only exist once the chat is active.
    if view == View::Chat && mods.is_empty() {
        match code {
            KeyCode::Up => return Some(Action::HistoryUp),
            KeyCode::Down => return Some(Action::HistoryDown),
            KeyCode::PageUp => return Some(Action::ChatScrollPageUp),
            KeyCode::PageDown => return Some(Action::ChatScrollPageDown),
            _ => {}
        }
    }

    // Any other character goes to the input (allow Alt for accented chars;
    // only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, mods);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn enter_submits_in_both_views() {
        let enter = press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(&enter, View::Gate), Some(Action::Submit));
        assert_eq!(key_to_action(&enter, View::Chat), Some(Action::Submit));
    }

    #[test]
    fn printable_chars_go_to_input() {
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&q, View::Chat), Some(Action::Char('q')));
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ctrl_c, View::Gate), Some(Action::Quit));
    }

    #[test]
    fn history_keys_are_chat_only() {
        let up = press(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(key_to_action(&up, View::Chat), Some(Action::HistoryUp));
        assert_eq!(key_to_action(&up, View::Gate), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        enter.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&enter, View::Chat), None);
    }
}
