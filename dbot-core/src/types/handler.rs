//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{callback::Callback, event::Event, message::Message, response::HandlerResponse, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific callback type to core [`Callback`].
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> Callback;
}

/// Consumes one event at a time. Returning [`HandlerResponse::Stop`] ends the event loop.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: &Event) -> crate::error::Result<HandlerResponse>;
}
