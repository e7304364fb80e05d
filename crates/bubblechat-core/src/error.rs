//! Error types for Bubble Chat

use thiserror::Error;

/// Main error type for Bubble Chat operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status we do not act on
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Submitted message was empty after trimming
    #[error("Message is empty")]
    EmptyMessage,
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::UnexpectedStatus(503);
        assert_eq!(format!("{}", err), "Unexpected status: 503");

        let err = ChatError::InvalidConfig("poll interval must be non-zero".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: poll interval must be non-zero"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let chat_err: ChatError = json_err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }
}
