//! Message Bubble Component
//!
//! One bubble per chat message, colored by whether we sent it.

use bubblechat_core::ChatMessage;
use dioxus::prelude::*;

/// CSS classes for a bubble
fn bubble_class(is_mine: bool) -> &'static str {
    if is_mine {
        "bubble bubble-self"
    } else {
        "bubble bubble-other"
    }
}

/// Individual message bubble component
#[component]
pub fn MessageBubble(
    /// Message to render as `"sender: message"`
    message: ChatMessage,
    /// Whether the sender matches our username
    is_mine: bool,
) -> Element {
    rsx! {
        div { class: bubble_class(is_mine), "{message.display_text()}" }
    }
}
