//! Callback triggered when a user presses a previously sent [`super::Choice`].

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Inbound choice press. `data` is the token of the pressed choice, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callback {
    pub user: User,
    pub chat: Chat,
    pub data: String,
    /// Id of the message that carried the choices, when the transport still knows it.
    pub message_id: Option<String>,
}
