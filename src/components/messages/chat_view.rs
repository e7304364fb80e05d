//! Chat View Component
//!
//! The whole chat window once a username is chosen: the bubble column fed by
//! the poller and the input bar that hands text to the sender.

use std::time::Duration;

use bubblechat_core::{ChatMessage, Poller};
use dioxus::prelude::*;
use tracing::debug;

use super::message_bubble::MessageBubble;
use super::message_input::MessageInput;
use crate::context::{use_poller_slot, use_session};
use crate::notify;

/// Delay before scrolling so the new bubble has been laid out
const SCROLL_SETTLE_MS: u64 = 50;

const SCROLL_TO_BOTTOM_JS: &str = r#"
const el = document.getElementById("chat-scroll");
if (el) { el.scrollTop = el.scrollHeight; }
"#;

async fn scroll_to_bottom() {
    tokio::time::sleep(Duration::from_millis(SCROLL_SETTLE_MS)).await;
    let _ = document::eval(SCROLL_TO_BOTTOM_JS);
}

/// Chat view: message bubbles plus input
#[component]
pub fn ChatView() -> Element {
    let session = use_session();
    let mut poller_slot = use_poller_slot();
    let mut messages: Signal<Vec<ChatMessage>> = use_signal(Vec::new);

    // Start polling once. Messages cross from the poller task to this
    // component only through the channel.
    use_hook(move || {
        let Some(chat) = session.peek().as_ref().cloned() else {
            return;
        };

        let (handle, mut rx) = Poller::new(chat.client.clone()).spawn();
        poller_slot.set(Some(handle));

        spawn(async move {
            while let Some(message) = rx.recv().await {
                messages.write().push(message);
                notify::play_notification();
                spawn(scroll_to_bottom());
            }
        });
    });

    use_drop(move || {
        if let Ok(mut slot) = poller_slot.try_write() {
            if let Some(handle) = slot.take() {
                handle.cancel();
            }
        }
    });

    let Some(chat) = session() else {
        return rsx! {};
    };
    let sender = chat.sender.clone();
    let list = messages();

    rsx! {
        div { id: "chat-scroll", class: "chat-scroll",
            div { class: "chat-messages",
                if list.is_empty() {
                    div { class: "chat-empty", "No messages yet" }
                }
                for (index, msg) in list.iter().enumerate() {
                    MessageBubble {
                        key: "{index}",
                        is_mine: msg.is_from(&chat.username),
                        message: msg.clone(),
                    }
                }
            }
        }

        MessageInput {
            on_send: move |text: String| {
                if let Err(e) = sender.submit(&text) {
                    debug!(error = %e, "Message not sent");
                }
            },
        }
    }
}
