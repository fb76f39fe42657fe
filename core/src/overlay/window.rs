//! Game window location seam
//!
//! The synchronizer needs three things from the OS: find the game window,
//! know whether it is minimized, and read its client rectangle in screen
//! coordinates. All three go through this trait so the core stays free of
//! Win32/Wayland plumbing and the tests can drive the synchronizer with a
//! scripted window.

use crate::layout::WindowRect;

/// Candidate titles used to locate the game window.
#[derive(Debug, Clone)]
pub struct WindowQuery {
    /// Exact titles tried first
    pub titles: Vec<String>,
    /// Substrings accepted as a fallback when no exact title matches
    pub fallback_substrings: Vec<String>,
}

impl Default for WindowQuery {
    fn default() -> Self {
        Self {
            titles: vec![
                "MTGA".to_string(),
                "Magic: The Gathering Arena".to_string(),
            ],
            fallback_substrings: vec!["MTGA".to_string(), "Magic".to_string()],
        }
    }
}

/// Synchronous window lookup collaborator.
///
/// Every method is a fresh query; handles are only valid until the next
/// poll tick and are never cached by the synchronizer.
pub trait WindowTracker {
    type Handle;

    /// Locate the game window, or `None` when it is not running/visible.
    fn find(&mut self, query: &WindowQuery) -> Option<Self::Handle>;

    fn is_minimized(&mut self, handle: &Self::Handle) -> bool;

    /// Client rectangle in absolute screen coordinates, or `None` when the
    /// rectangle cannot be read this tick.
    fn client_rect(&mut self, handle: &Self::Handle) -> Option<WindowRect>;
}
