//! Client configuration
//!
//! Defaults match the public Bubble Chat server. The desktop binary overrides
//! individual fields from command-line flags.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ChatError, ChatResult};

/// Default chat server base URL
pub const DEFAULT_SERVER_URL: &str = "https://bubbleapp.pythonanywhere.com";

/// Default delay between polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Default per-request timeout for both GET and POST
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Username used when none (or a blank one) is chosen
pub const ANONYMOUS_USERNAME: &str = "Anonymous";

/// Connection settings shared by the poller and the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, without the `/messages` or `/send` suffix
    pub server_url: String,
    /// Fixed delay between successive fetches
    pub poll_interval: Duration,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `server_url` with default timings.
    pub fn with_server(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Check that the config is usable before starting any network activity.
    pub fn validate(&self) -> ChatResult<()> {
        let url = Url::parse(&self.server_url)
            .map_err(|e| ChatError::InvalidConfig(format!("server url '{}': {}", self.server_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChatError::InvalidConfig(format!(
                "server url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(ChatError::InvalidConfig(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(ChatError::InvalidConfig(
                "request timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `GET` endpoint returning the full message list
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.server_url.trim_end_matches('/'))
    }

    /// `POST` endpoint accepting a single message
    pub fn send_url(&self) -> String {
        format!("{}/send", self.server_url.trim_end_matches('/'))
    }
}

/// Pick the session username from whatever the user entered.
///
/// `None` (prompt cancelled) and blank input fall back to
/// [`ANONYMOUS_USERNAME`]. Anything else is kept exactly as typed, surrounding
/// whitespace included, since sender matching is exact.
pub fn resolve_username(input: Option<&str>) -> String {
    match input {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => ANONYMOUS_USERNAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_endpoints() {
        let config = ClientConfig::with_server("http://localhost:5000");
        assert_eq!(config.messages_url(), "http://localhost:5000/messages");
        assert_eq!(config.send_url(), "http://localhost:5000/send");
    }

    #[test]
    fn test_endpoints_trailing_slash() {
        let config = ClientConfig::with_server("http://localhost:5000/");
        assert_eq!(config.messages_url(), "http://localhost:5000/messages");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ClientConfig::with_server("not a url");
        assert!(matches!(config.validate(), Err(ChatError::InvalidConfig(_))));

        let config = ClientConfig::with_server("ftp://example.com");
        assert!(matches!(config.validate(), Err(ChatError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_durations() {
        let mut config = ClientConfig::default();
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_username() {
        assert_eq!(resolve_username(None), "Anonymous");
        assert_eq!(resolve_username(Some("")), "Anonymous");
        assert_eq!(resolve_username(Some("   \t")), "Anonymous");
        assert_eq!(resolve_username(Some("alice")), "alice");
        assert_eq!(resolve_username(Some(" alice ")), " alice ");
    }
}
