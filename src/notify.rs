//! Notification sounds
//!
//! macOS beeps through `osascript` on the blocking pool so the window never
//! waits on it. Windows queues the system exclamation sound with
//! `MessageBeep`, which returns immediately. Other platforms stay silent.

/// Sound played for every received message
pub fn play_notification() {
    #[cfg(target_os = "macos")]
    run_detached("osascript", &["-e", "beep"]);

    #[cfg(target_os = "windows")]
    exclamation_beep();
}

/// Sound played when an empty message is submitted (macOS only)
pub fn play_error_beep() {
    #[cfg(target_os = "macos")]
    run_detached("osascript", &["-e", "beep"]);
}

#[cfg(target_os = "windows")]
fn exclamation_beep() {
    use windows_sys::Win32::System::Diagnostics::Debug::MessageBeep;
    use windows_sys::Win32::UI::WindowsAndMessaging::MB_ICONEXCLAMATION;

    // SAFETY: MessageBeep takes a plain flag value and only queues a sound.
    if unsafe { MessageBeep(MB_ICONEXCLAMATION) } == 0 {
        tracing::debug!("Notification sound failed");
    }
}

#[cfg(target_os = "macos")]
fn run_detached(program: &'static str, args: &'static [&'static str]) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = std::process::Command::new(program).args(args).status() {
            tracing::debug!(program, error = %e, "Notification sound failed");
        }
    });
}
