//! Per-session conversation state.

use std::fmt;

/// What the next plain-text message means for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Text is a sentence to classify.
    #[default]
    Idle,
    /// Text is the new filter word.
    AwaitingFilterWord,
    /// Text is the word to search stored messages for.
    AwaitingSearchWord,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Idle => "idle",
            Mode::AwaitingFilterWord => "awaiting_filter_word",
            Mode::AwaitingSearchWord => "awaiting_search_word",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub filter_word: Option<String>,
    pub search_word: Option<String>,
    pub mode: Mode,
}

impl ConversationState {
    /// True while the next non-command text must be a single word.
    pub fn waiting_for_word(&self) -> bool {
        self.mode != Mode::Idle
    }

    pub fn is_searching(&self) -> bool {
        self.mode == Mode::AwaitingSearchWord
    }

    /// Filter word usable for classification. Empty counts as unset.
    pub fn active_filter_word(&self) -> Option<&str> {
        self.filter_word.as_deref().filter(|word| !word.is_empty())
    }

    /// Stores `word` for whatever the session was waiting for and returns to Idle.
    /// Returns the mode that consumed the word.
    pub fn accept_word(&mut self, word: &str) -> Mode {
        let mode = std::mem::take(&mut self.mode);
        match mode {
            Mode::AwaitingFilterWord => self.filter_word = Some(word.to_string()),
            Mode::AwaitingSearchWord => self.search_word = Some(word.to_string()),
            Mode::Idle => {}
        }
        mode
    }

    /// Drops a pending word request without storing anything.
    pub fn reject_word(&mut self) {
        self.mode = Mode::Idle;
    }
}
