//! Bubble Chat Core Library
//!
//! Polling-diff message sync for a single shared chat room.
//!
//! ## Overview
//!
//! The server exposes the whole chat history at `GET /messages` and accepts
//! new messages at `POST /send`. There are no ids, timestamps or cursors, so
//! the client keeps a local copy of the list and treats whatever lies past
//! its length as new.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bubblechat_core::{ChatClient, ClientConfig, MessageSender, Poller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatClient::new(ClientConfig::default())?;
//!
//!     let sender = MessageSender::new(client.clone(), "alice");
//!     sender.submit("hello!")?;
//!
//!     let (handle, mut rx) = Poller::new(client).spawn();
//!     while let Some(msg) = rx.recv().await {
//!         println!("{}", msg.display_text());
//!     }
//!     handle.stop().await;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod poller;
pub mod sender;

// Re-exports
pub use cache::MessageCache;
pub use client::ChatClient;
pub use config::{resolve_username, ClientConfig, ANONYMOUS_USERNAME};
pub use error::{ChatError, ChatResult};
pub use message::ChatMessage;
pub use poller::{Poller, PollerHandle};
pub use sender::MessageSender;
