//! HTTP transport for the chat server
//!
//! Two endpoints, no authentication:
//!
//! - `GET {server}/messages` returns the whole history as a JSON array
//! - `POST {server}/send` accepts `{"sender": .., "message": ..}`

use reqwest::StatusCode;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ChatError, ChatResult};
use crate::message::ChatMessage;

/// Thin wrapper around a `reqwest::Client` bound to one server.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ChatClient {
    /// Build a client for `config`, validating it first.
    pub fn new(config: ClientConfig) -> ChatResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the full message list.
    ///
    /// Only a `200 OK` is treated as data. Any other status yields
    /// [`ChatError::UnexpectedStatus`], which callers treat as "no update".
    pub async fn fetch_messages(&self) -> ChatResult<Vec<ChatMessage>> {
        let response = self.http.get(self.config.messages_url()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ChatError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let messages: Vec<ChatMessage> = serde_json::from_slice(&body)?;
        debug!(count = messages.len(), "Fetched message list");
        Ok(messages)
    }

    /// Post a single message. The response body is ignored.
    pub async fn send_message(&self, message: &ChatMessage) -> ChatResult<()> {
        let response = self
            .http
            .post(self.config.send_url())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::UnexpectedStatus(status.as_u16()));
        }
        debug!(sender = %message.sender, "Message posted");
        Ok(())
    }
}
