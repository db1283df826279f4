//! Input event types.
//!
//! The overlay chrome translates native pointer and keyboard events into
//! these generic types before handing them to the session controller.

pub mod events;

pub use events::{KeyEvent, PointerEvent};
