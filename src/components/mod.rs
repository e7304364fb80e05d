//! UI Components for Bubble Chat.

pub mod messages;
mod username_prompt;

pub use messages::ChatView;
pub use username_prompt::UsernamePrompt;
