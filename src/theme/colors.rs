//! Color constants for the chat window.

#![allow(dead_code)]

// === BACKGROUND ===
pub const WINDOW_BG: &str = "#1c1c1c";

// === BUBBLES ===
pub const SELF_BUBBLE: &str = "#0078d7";
pub const OTHER_BUBBLE: &str = "#3a3a3a";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.5)";
