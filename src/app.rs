use bubblechat_core::{resolve_username, ChatClient, PollerHandle};
use dioxus::desktop::{use_window, LogicalPosition};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use tracing::{error, info};

use crate::components::{ChatView, UsernamePrompt};
use crate::context::{get_client_config, get_preset_username, ChatSession};
use crate::drag::{in_scrollbar_gutter, DragTracker};
use crate::theme::GLOBAL_STYLES;
use crate::tray::use_chat_tray;

/// Resolve the username and open a session against the configured server.
fn start_session(mut session: Signal<Option<ChatSession>>, input: Option<String>) {
    let username = resolve_username(input.as_deref());

    match ChatClient::new(get_client_config()) {
        Ok(client) => {
            info!(%username, server = %client.config().server_url, "Chat session started");
            session.set(Some(ChatSession::new(client, username)));
        }
        Err(e) => {
            error!("Failed to create chat client: {}", e);
        }
    }
}

/// Root application component.
///
/// Provides global styles, session context, the tray icon and window
/// dragging. Shows the username prompt until a session exists.
#[component]
pub fn App() -> Element {
    let session: Signal<Option<ChatSession>> = use_signal(|| None);
    let poller_slot: Signal<Option<PollerHandle>> = use_signal(|| None);

    use_context_provider(|| session);
    use_context_provider(|| poller_slot);

    use_chat_tray();

    // --username skips the prompt
    use_hook(move || {
        if let Some(name) = get_preset_username() {
            start_session(session, Some(name));
        }
    });

    let window = use_window();
    let press_window = window.clone();
    let mut drag = use_signal(DragTracker::default);

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "chat-window",
            onmousedown: move |e: MouseEvent| {
                if e.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let point = e.client_coordinates();
                let width = press_window
                    .inner_size()
                    .to_logical::<f64>(press_window.scale_factor())
                    .width;
                if !in_scrollbar_gutter(point.x, width) {
                    drag.write().press(point.x, point.y);
                }
            },
            onmousemove: move |e: MouseEvent| {
                let point = e.screen_coordinates();
                if let Some((x, y)) = drag.read().position_for(point.x, point.y) {
                    window.set_outer_position(LogicalPosition::new(x, y));
                }
            },
            onmouseup: move |_| drag.write().release(),

            if session.read().is_some() {
                ChatView {}
            } else {
                UsernamePrompt {
                    on_submit: move |name: Option<String>| start_session(session, name),
                }
            }
        }
    }
}
