//! User actions the key handler can emit.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    ClearInput,
    Submit,

    ChatScrollPageUp,
    ChatScrollPageDown,

    HistoryUp,
    HistoryDown,
}
