//! Manual window dragging for the frameless window.
//!
//! On press we remember where inside the window the pointer was. While the
//! button stays down, the window's outer position follows the pointer's screen
//! position minus that offset.

/// Horizontal padding of `.chat-window` in `theme/styles.rs`
const WINDOW_PADDING: f64 = 10.0;

/// Width of the `.chat-scroll` scrollbar in `theme/styles.rs`
const SCROLLBAR_WIDTH: f64 = 6.0;

/// Whether a press at window x-coordinate `x` hit the message list's
/// scrollbar, which sits against the right padding.
pub fn in_scrollbar_gutter(x: f64, window_width: f64) -> bool {
    let gutter_end = window_width - WINDOW_PADDING;
    x >= gutter_end - SCROLLBAR_WIDTH && x < gutter_end
}

/// Pointer offset captured on press, cleared on release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    offset: Option<(f64, f64)>,
}

impl DragTracker {
    /// Start a drag with the pointer at `(x, y)` in window coordinates.
    pub fn press(&mut self, x: f64, y: f64) {
        self.offset = Some((x, y));
    }

    /// Where the window should move for a pointer at `(screen_x, screen_y)`.
    ///
    /// `None` when no drag is in progress.
    pub fn position_for(&self, screen_x: f64, screen_y: f64) -> Option<(f64, f64)> {
        self.offset.map(|(dx, dy)| (screen_x - dx, screen_y - dy))
    }

    /// End the drag
    pub fn release(&mut self) {
        self.offset = None;
    }
}
