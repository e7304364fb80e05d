//! Background poller that turns full-list fetches into a stream of new messages
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Poller task (tokio)                                            │
//! │  ├── ChatClient: GET /messages every poll_interval              │
//! │  ├── MessageCache: owned by the task, length = cursor           │
//! │  └── mpsc::UnboundedSender<ChatMessage>                         │
//! │      └── New suffix, one message at a time, in server order     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  PollerHandle (UI side)                                         │
//! │  ├── CancellationToken: interrupts fetch or sleep               │
//! │  └── JoinHandle: awaited by stop()                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures never leave the task: timeouts, connection errors and bad JSON
//! are logged at warn, non-200 responses at debug, and the loop carries on
//! with the next tick. There is no backoff.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::MessageCache;
use crate::client::ChatClient;
use crate::error::ChatError;
use crate::message::ChatMessage;

/// Poll loop state: a client and the cache it diffs against.
#[derive(Debug)]
pub struct Poller {
    client: ChatClient,
    cache: MessageCache,
}

impl Poller {
    /// Create a poller with an empty cache.
    ///
    /// The first successful poll therefore re-delivers the whole server
    /// history as new messages.
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            cache: MessageCache::new(),
        }
    }

    /// Current cache contents
    pub fn cache(&self) -> &MessageCache {
        &self.cache
    }

    /// Run a single fetch-and-diff step.
    ///
    /// Returns the messages that were appended on the server since the last
    /// successful poll. Errors are logged and reported as an empty result.
    pub async fn poll_once(&mut self) -> Vec<ChatMessage> {
        match self.client.fetch_messages().await {
            Ok(fetched) => self.cache.apply(fetched),
            Err(ChatError::UnexpectedStatus(status)) => {
                debug!(status, "Poll returned non-200, skipping");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Polling error");
                Vec::new()
            }
        }
    }

    /// Move the poller onto a background task.
    ///
    /// Returns a handle for stopping it and the receiving end of the
    /// new-message channel. Dropping the receiver also ends the loop.
    pub fn spawn(self) -> (PollerHandle, mpsc::UnboundedReceiver<ChatMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(self.run(tx, cancel.clone()));
        info!("Poller started");
        (PollerHandle { cancel, task }, rx)
    }

    async fn run(mut self, tx: mpsc::UnboundedSender<ChatMessage>, cancel: CancellationToken) {
        let interval = self.client.config().poll_interval;

        loop {
            if tx.is_closed() {
                debug!("Message receiver dropped, poller exiting");
                break;
            }

            let fresh = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                fresh = self.poll_once() => fresh,
            };

            if !fresh.is_empty() {
                debug!(count = fresh.len(), cached = self.cache.len(), "New messages");
            }
            for message in fresh {
                if tx.send(message).is_err() {
                    debug!("Message receiver dropped, poller exiting");
                    return;
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("Poller stopped");
    }
}

/// Handle to a running poller task.
#[derive(Debug)]
pub struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Ask the poller to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the poll loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the poller and wait for the loop to exit.
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "Poller task ended abnormally");
        }
    }
}
