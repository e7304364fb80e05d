//! Inline Message Input Component
//!
//! Single-line input with a Send button at the bottom of the window.
//! Submitting clears the field right away; delivery is never confirmed.

use dioxus::prelude::*;

use crate::notify;

/// Take the draft for sending.
///
/// Non-blank text is returned and the draft is cleared before anything is
/// sent. Blank text returns `None` and leaves the draft as it was.
pub(crate) fn take_submission(draft: &mut String) -> Option<String> {
    if draft.trim().is_empty() {
        return None;
    }
    Some(std::mem::take(draft))
}

/// Input bar for composing messages
#[component]
pub fn MessageInput(
    /// Handler called with the non-blank text on submit
    on_send: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Type a message...".to_string())]
    placeholder: String,
) -> Element {
    let mut draft = use_signal(String::new);

    let mut submit = move || {
        let submission = take_submission(&mut draft.write());
        match submission {
            Some(content) => on_send.call(content),
            None => notify::play_error_beep(),
        }
    };

    rsx! {
        div { class: "message-input-bar",
            input {
                class: "message-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        submit();
                    }
                },
                // Keep text selection from dragging the window
                onmousedown: move |e: MouseEvent| e.stop_propagation(),
            }

            button {
                class: "message-send-btn",
                onclick: move |_| submit(),
                onmousedown: move |e: MouseEvent| e.stop_propagation(),
                "Send"
            }
        }
    }
}
