//! Labeled interactive choice sent alongside a message (an inline keyboard button on Telegram).

use serde::{Deserialize, Serialize};

/// One button: the label shown to the user and the opaque token echoed back in a [`super::Callback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub token: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}
