//! User-facing texts and result formatting.

use dbot_core::Choice;
use storage::ClassifiedMessage;

pub const WELCOME: &str = "Welcome! This bot will first ask you for a word, and then for a sentence. \
It will then check if the sentence contains the word or not.\n\
Use /filter to define the filter word\n\
Use /show to search for messages";

pub const HELP: &str = "Available commands:\n\
/start - Start the bot\n\
/filter - Define a filter word\n\
/stop - Stop the bot\n\
/show - Show the stored messages\n\
/help - Display this help message";

pub const ASK_FILTER_WORD: &str = "Write the filter word (one word only)";
pub const ASK_SEARCH_WORD: &str = "Please enter the filter word:";
pub const ONE_WORD_ONLY: &str = "Please provide only one word. Try /filter again.";
pub const FILTER_WORD_RECEIVED: &str = "Word received.\nPlease send a sentence in the next messages.";
pub const SEARCH_WORD_RECEIVED: &str =
    "Word received.\nSearching for the messages with this filter word.";
pub const NO_FILTER_WORD: &str = "No filter word found. Use /filter to enter one";
pub const CONTAINS_WORD: &str = "The sentence contains the word!";
pub const MISSING_WORD: &str = "The sentence doesn't contain the word. Please try again.";
pub const CHOOSE_OPTION: &str = "Choose an option:";
pub const NO_MESSAGES_FOUND: &str = "No messages found.";
pub const STOPPING: &str = "Stopping the bot.\nClosing database connection.";

pub const SHOW_WITH_FILTER: &str = "show_with_filter";
pub const SHOW_WITHOUT_FILTER: &str = "show_without_filter";

/// Telegram's limit for one text message, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// The two `/show` options, with-filter first.
pub fn show_choices() -> [Choice; 2] {
    [
        Choice::new("Show messages with filter word", SHOW_WITH_FILTER),
        Choice::new("Show messages without filter word", SHOW_WITHOUT_FILTER),
    ]
}

pub fn classification_reply(contains_word: bool) -> &'static str {
    if contains_word {
        CONTAINS_WORD
    } else {
        MISSING_WORD
    }
}

pub fn format_row(row: &ClassifiedMessage) -> String {
    format!(
        "Sender ID: {}\nMessage: {}\nSent Date: {}\n\n",
        row.sender_id,
        row.message_text,
        row.sent_date.format("%Y-%m-%d %H:%M:%S %Z")
    )
}

fn telegram_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Splits `s` into pieces of at most `limit` UTF-16 units without breaking a character.
fn split_long(s: &str, limit: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for ch in s.chars() {
        if current_len + ch.len_utf16() > limit {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(ch);
        current_len += ch.len_utf16();
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Renders query results as one or more messages within `limit`. Rows are kept whole unless a
/// single row is longer than `limit` on its own. No rows gives [`NO_MESSAGES_FOUND`].
pub fn result_messages(rows: &[ClassifiedMessage], limit: usize) -> Vec<String> {
    if rows.is_empty() {
        return vec![NO_MESSAGES_FOUND.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for row in rows {
        let entry = format_row(row);
        let entry_len = telegram_len(&entry);
        if !current.is_empty() && telegram_len(&current) + entry_len > limit {
            chunks.push(std::mem::take(&mut current));
        }
        if entry_len > limit {
            chunks.extend(split_long(&entry, limit));
        } else {
            current.push_str(&entry);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
