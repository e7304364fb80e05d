//! Fire-and-forget message sending
//!
//! The window clears its input before the request is even started, so there
//! is nothing to report back: a failed POST is logged and the text is lost.

use tokio::task::JoinHandle;
use tracing::warn;

use crate::client::ChatClient;
use crate::error::{ChatError, ChatResult};
use crate::message::ChatMessage;

/// Posts messages under a fixed username.
#[derive(Debug, Clone)]
pub struct MessageSender {
    client: ChatClient,
    username: String,
}

impl MessageSender {
    /// Create a sender for `username`
    pub fn new(client: ChatClient, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    /// The username attached to every outgoing message
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Build the outgoing message for raw input text.
    ///
    /// Input is trimmed; blank input is rejected with
    /// [`ChatError::EmptyMessage`].
    pub fn prepare(&self, text: &str) -> ChatResult<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(ChatMessage::new(self.username.clone(), text))
    }

    /// Send `text` on a detached task.
    ///
    /// Returns [`ChatError::EmptyMessage`] without spawning anything if the
    /// trimmed text is blank. The returned handle never needs to be awaited;
    /// dropping it leaves the request running.
    pub fn submit(&self, text: &str) -> ChatResult<JoinHandle<()>> {
        let message = self.prepare(text)?;
        let client = self.client.clone();

        Ok(tokio::spawn(async move {
            if let Err(e) = client.send_message(&message).await {
                warn!(error = %e, "Send error");
            }
        }))
    }
}
