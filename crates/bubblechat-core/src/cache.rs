//! Local mirror of the server's message list
//!
//! The cache's length acts as a cursor into the server's list: everything past
//! `len()` in a fresh fetch is new. This only holds while the server list is
//! append-only. A reordered or truncated list goes unnoticed and produces
//! duplicated or skipped messages.

use tracing::debug;

use crate::message::ChatMessage;

/// Ordered, append-only copy of the last server list that grew.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCache {
    messages: Vec<ChatMessage>,
}

impl MessageCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached messages (the cursor)
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the cache holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Cached messages in server order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Merge a freshly fetched server list into the cache.
    ///
    /// If `fetched` is longer than the cache, returns `fetched[len..]` and the
    /// cache becomes `fetched`. Otherwise returns nothing and leaves the cache
    /// untouched.
    pub fn apply(&mut self, fetched: Vec<ChatMessage>) -> Vec<ChatMessage> {
        let cursor = self.messages.len();

        if fetched.len() <= cursor {
            if fetched.len() < cursor {
                debug!(
                    cached = cursor,
                    fetched = fetched.len(),
                    "Server list shorter than cache, ignoring"
                );
            }
            return Vec::new();
        }

        let new_messages = fetched[cursor..].to_vec();
        self.messages = fetched;
        new_messages
    }
}
