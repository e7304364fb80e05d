//! Username Prompt
//!
//! Asked once per launch before the chat view appears. Cancel (or Escape)
//! reports `None`; the caller decides the fallback name.

use dioxus::prelude::*;

/// In-window dialog asking for a username
#[component]
pub fn UsernamePrompt(
    /// Called with the entered text, or `None` when cancelled
    on_submit: EventHandler<Option<String>>,
) -> Element {
    let mut name = use_signal(String::new);

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            e.prevent_default();
            on_submit.call(Some(name()));
        } else if e.key() == Key::Escape {
            on_submit.call(None);
        }
    };

    rsx! {
        div { class: "username-prompt",
            h2 { class: "username-prompt-title", "Username" }
            label { class: "username-prompt-label", r#for: "username-input", "Enter your username:" }
            input {
                id: "username-input",
                class: "message-input",
                r#type: "text",
                autofocus: true,
                value: "{name}",
                oninput: move |e| name.set(e.value()),
                onkeydown: handle_keydown,
                onmousedown: move |e: MouseEvent| e.stop_propagation(),
            }

            div { class: "username-prompt-actions",
                button {
                    class: "prompt-btn",
                    onclick: move |_| on_submit.call(None),
                    onmousedown: move |e: MouseEvent| e.stop_propagation(),
                    "Cancel"
                }
                button {
                    class: "prompt-btn prompt-btn-primary",
                    onclick: move |_| on_submit.call(Some(name())),
                    onmousedown: move |e: MouseEvent| e.stop_propagation(),
                    "OK"
                }
            }
        }
    }
}
