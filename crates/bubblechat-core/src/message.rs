//! Chat message wire type
//!
//! [`ChatMessage`] is both what `GET /messages` returns (as an array) and what
//! `POST /send` accepts. The server assigns no id or timestamp; a message's
//! only identity is its position in the server's list.
//!
//! Decoding never fails for a single entry. Every array element must still
//! produce a message, otherwise the cache length stops matching the server's
//! list and one bad record would block every message after it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sender name used when the server omits the field.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Text of a field that should be a string: strings as-is, `null` or missing
/// as `None`, anything else as its JSON text.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// A single chat message.
///
/// # Example
///
/// ```
/// use bubblechat_core::ChatMessage;
///
/// let msg = ChatMessage::new("alice", "hi");
/// assert_eq!(msg.display_text(), "alice: hi");
/// assert!(msg.is_from("alice"));
/// assert!(!msg.is_from("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Free-form sender name, not verified by the server
    pub sender: String,
    /// Message body
    pub message: String,
}

impl<'de> Deserialize<'de> for ChatMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(&Value::deserialize(deserializer)?))
    }
}

impl ChatMessage {
    /// Create a new ChatMessage.
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Build a message from one element of the server's list.
    ///
    /// Missing or `null` fields fall back to [`UNKNOWN_SENDER`] and `""`.
    /// Non-string fields are shown as JSON text. An element that is not an
    /// object becomes the body of a message from [`UNKNOWN_SENDER`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                sender: field_text(fields.get("sender"))
                    .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
                message: field_text(fields.get("message")).unwrap_or_default(),
            },
            other => Self::new(UNKNOWN_SENDER, field_text(Some(other)).unwrap_or_default()),
        }
    }

    /// Whether this message was sent under `username`.
    ///
    /// Exact, case-sensitive comparison. Two users picking the same name are
    /// indistinguishable.
    pub fn is_from(&self, username: &str) -> bool {
        self.sender == username
    }

    /// Text shown inside a bubble: `"sender: message"`.
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.sender, self.message)
    }
}
