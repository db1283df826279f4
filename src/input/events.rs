//! Generic input event types forwarded by the overlay chrome.
//!
//! The chrome delivers raw client coordinates and key identifiers; mapping
//! native events onto these types is the embedder's job.

/// A pointer event in client (viewport-relative) coordinates.
///
/// Conversion to document coordinates happens in the session, which adds the
/// viewport scroll offset at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub client_x: i32,
    pub client_y: i32,
}

impl PointerEvent {
    pub const fn new(client_x: i32, client_y: i32) -> Self {
        Self { client_x, client_y }
    }
}

/// A key press with the modifier state relevant to shortcut dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed character key.
    pub key: char,
    /// Ctrl held.
    pub ctrl: bool,
    /// Meta/Command held (treated the same as Ctrl).
    pub meta: bool,
}

impl KeyEvent {
    pub const fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub const fn with_ctrl(key: char) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }
}
