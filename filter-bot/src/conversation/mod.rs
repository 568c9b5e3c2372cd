//! Conversation: per-chat state, classification, reply texts and the controller that ties them
//! to the bot and the store.

mod classify;
mod controller;
mod replies;
mod sessions;
mod state;

pub use classify::{contains_word, single_word};
pub use controller::{ConversationController, Timeouts};
pub use replies::{format_row, result_messages, show_choices, MAX_MESSAGE_LEN};
pub use sessions::SessionRegistry;
pub use state::{ConversationState, Mode};

/// Reply texts and callback tokens, for callers that assert on what the bot says.
pub mod texts {
    pub use super::replies::{
        ASK_FILTER_WORD, ASK_SEARCH_WORD, CHOOSE_OPTION, CONTAINS_WORD, FILTER_WORD_RECEIVED,
        HELP, MISSING_WORD, NO_FILTER_WORD, NO_MESSAGES_FOUND, ONE_WORD_ONLY,
        SEARCH_WORD_RECEIVED, SHOW_WITHOUT_FILTER, SHOW_WITH_FILTER, STOPPING, WELCOME,
    };
}
