//! Messaging components

mod chat_view;
mod message_bubble;
mod message_input;

pub use chat_view::ChatView;
