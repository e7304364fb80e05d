//! Session context provider for Bubble Chat.
//!
//! The App component provides two signals to every child:
//!
//! - the chat session (`None` until a username is chosen)
//! - the running poller's handle, so shutdown paths can stop it
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! if let Some(chat) = session() {
//!     chat.sender.submit("hello")?;
//! }
//! ```

use bubblechat_core::{ChatClient, ClientConfig, MessageSender, PollerHandle};
use dioxus::prelude::*;

/// Everything the chat view needs once the user has picked a name.
#[derive(Clone, Debug)]
pub struct ChatSession {
    /// Name used for outgoing messages and "self" bubble styling
    pub username: String,
    /// Client shared by the poller
    pub client: ChatClient,
    /// Fire-and-forget sender bound to `username`
    pub sender: MessageSender,
}

impl ChatSession {
    pub fn new(client: ChatClient, username: String) -> Self {
        let sender = MessageSender::new(client.clone(), username.clone());
        Self {
            username,
            client,
            sender,
        }
    }
}

/// Get the client config parsed from the command line.
pub fn get_client_config() -> ClientConfig {
    crate::get_client_config()
}

/// Get the username passed via --username, if any.
/// Skips the prompt when set.
pub fn get_preset_username() -> Option<String> {
    crate::get_preset_username()
}

/// Hook to access the current chat session.
pub fn use_session() -> Signal<Option<ChatSession>> {
    use_context::<Signal<Option<ChatSession>>>()
}

/// Hook to access the running poller's handle.
///
/// Set by the chat view when polling starts; taken and cancelled on quit or
/// when the view is dropped.
pub fn use_poller_slot() -> Signal<Option<PollerHandle>> {
    use_context::<Signal<Option<PollerHandle>>>()
}
