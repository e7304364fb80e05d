//! Global CSS styles for the chat window.
//!
//! Keep the custom properties in sync with `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --window-bg: #1c1c1c;
  --self-bubble: #0078d7;
  --other-bubble: #3a3a3a;
  --text-primary: #ffffff;
  --text-muted: rgba(255, 255, 255, 0.5);
}

html, body {
  margin: 0;
  padding: 0;
  height: 100%;
  background: transparent;
  overflow: hidden;
  font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
  font-size: 14px;
  color: var(--text-primary);
  user-select: none;
}

/* === Window === */
.chat-window {
  box-sizing: border-box;
  display: flex;
  flex-direction: column;
  gap: 5px;
  height: 100vh;
  padding: 10px;
  background-color: var(--window-bg);
  border-radius: 12px;
  cursor: default;
}

/* === Message list === */
.chat-scroll {
  flex: 1;
  overflow-y: auto;
  background: transparent;
  border: none;
}

.chat-scroll::-webkit-scrollbar {
  width: 6px;
}

.chat-scroll::-webkit-scrollbar-thumb {
  background: var(--other-bubble);
  border-radius: 3px;
}

.chat-messages {
  display: flex;
  flex-direction: column;
  justify-content: flex-start;
  gap: 5px;
}

.chat-empty {
  margin-top: 40%;
  text-align: center;
  color: var(--text-muted);
  font-style: italic;
}

/* === Bubbles === */
.bubble {
  padding: 10px;
  border-radius: 12px;
  color: var(--text-primary);
  white-space: pre-wrap;
  word-wrap: break-word;
  overflow-wrap: anywhere;
}

.bubble-self {
  background-color: var(--self-bubble);
}

.bubble-other {
  background-color: var(--other-bubble);
}

/* === Input row === */
.message-input-bar {
  display: flex;
  gap: 5px;
}

.message-input {
  flex: 1;
  padding: 6px;
  border: none;
  border-radius: 10px;
  outline: none;
  background-color: var(--other-bubble);
  color: var(--text-primary);
  font: inherit;
  user-select: text;
}

.message-input::placeholder {
  color: var(--text-muted);
}

.message-send-btn {
  padding: 6px 12px;
  border: none;
  border-radius: 10px;
  background-color: var(--self-bubble);
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
}

.message-send-btn:active {
  filter: brightness(0.9);
}

/* === Username prompt === */
.username-prompt {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 10px;
  height: 100%;
  padding: 0 20px;
}

.username-prompt-title {
  margin: 0;
  font-size: 16px;
  font-weight: 600;
}

.username-prompt-label {
  color: var(--text-muted);
}

.username-prompt-actions {
  display: flex;
  justify-content: flex-end;
  gap: 5px;
}

.prompt-btn {
  padding: 6px 12px;
  border: none;
  border-radius: 10px;
  background-color: var(--other-bubble);
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
}

.prompt-btn-primary {
  background-color: var(--self-bubble);
}
"#;
