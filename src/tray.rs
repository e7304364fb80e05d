//! System tray icon with a show/hide toggle and quit.

use dioxus::desktop::trayicon::init_tray_icon;
use dioxus::desktop::trayicon::menu::{Menu, MenuId, MenuItem};
use dioxus::desktop::{use_tray_menu_event_handler, use_window};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::context::use_poller_slot;

/// Ids of the tray menu entries
#[derive(Clone, Debug)]
struct TrayMenuIds {
    toggle: MenuId,
    quit: MenuId,
}

fn build_tray_menu() -> (Menu, TrayMenuIds) {
    let menu = Menu::new();
    let toggle = MenuItem::new("Show/Hide Chat", true, None);
    let quit = MenuItem::new("Quit", true, None);

    if let Err(e) = menu.append_items(&[&toggle, &quit]) {
        warn!(error = %e, "Failed to build tray menu");
    }

    let ids = TrayMenuIds {
        toggle: toggle.id().clone(),
        quit: quit.id().clone(),
    };
    (menu, ids)
}

/// Install the tray icon and handle its menu events.
///
/// Must be called from the root component, after the poller slot context is
/// provided.
pub fn use_chat_tray() {
    let window = use_window();
    let mut poller_slot = use_poller_slot();
    let mut quit_requested = use_signal(|| false);

    let ids = use_hook(|| {
        let (menu, ids) = build_tray_menu();
        init_tray_icon(menu, None);
        ids
    });

    // Menu events arrive from the event loop, outside any component scope,
    // so the shutdown task is started from here instead.
    let quit_window = window.clone();
    use_effect(move || {
        if !quit_requested() {
            return;
        }
        let handle = poller_slot.write().take();
        let window = quit_window.clone();
        spawn(async move {
            if let Some(handle) = handle {
                handle.stop().await;
            }
            window.close();
        });
    });

    use_tray_menu_event_handler(move |event| {
        if event.id == ids.toggle {
            let visible = window.is_visible();
            window.set_visible(!visible);
        } else if event.id == ids.quit {
            info!("Quit requested from tray");
            quit_requested.set(true);
        }
    });
}
