//! Core types: user, chat, message, callback, event, choice, handler response, and Handler trait.
//!
//! One file per main type.

mod callback;
mod chat;
mod choice;
mod event;
mod handler;
mod message;
mod response;
mod user;

pub use callback::Callback;
pub use chat::Chat;
pub use choice::Choice;
pub use event::Event;
pub use handler::{Handler, ToCoreCallback, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
