//! Contracts for the host document and the overlay chrome.
//!
//! Everything outside the drawing engine - the page being annotated, the
//! surface allocator, and the chrome that shows dialogs - sits behind these
//! traits. [`PixmapViewport`] and [`AutoConfirm`] are headless
//! implementations for tests and embeddings without a real document.

use crate::draw::{Pixmap, Surface};

/// The host document and viewport the overlay sits above.
pub trait Viewport {
    /// Current scroll offset in pixels, sampled per event.
    fn scroll_offset(&self) -> (i32, i32);

    /// Intrinsic content dimensions used to size overlay surfaces.
    fn content_size(&self) -> (u32, u32);

    /// One-time raster capture of the document's visual state, used only for
    /// pipette fallback sampling.
    fn snapshot(&self) -> Box<dyn Surface>;

    /// Allocates a fresh transparent surface sized to the content.
    fn create_surface(&self) -> Box<dyn Surface>;
}

/// The overlay chrome surrounding the engine.
///
/// Icons, layout, and z-ordering are entirely the chrome's business; the
/// engine only needs a way to ask the user a yes/no question before
/// destructive actions.
pub trait Chrome {
    /// Presents a confirmation prompt and returns the user's answer.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Headless viewport over an in-memory [`Pixmap`] background.
#[derive(Debug, Clone)]
pub struct PixmapViewport {
    width: u32,
    height: u32,
    scroll: (i32, i32),
    background: Pixmap,
}

impl PixmapViewport {
    /// Creates a viewport with a fully transparent background snapshot.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll: (0, 0),
            background: Pixmap::new(width, height),
        }
    }

    /// Uses the given pixmap as the document's visual state.
    pub fn with_background(background: Pixmap) -> Self {
        Self {
            width: background.width(),
            height: background.height(),
            scroll: (0, 0),
            background,
        }
    }

    /// Simulates the page scrolling.
    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.scroll = (x, y);
    }
}

impl Viewport for PixmapViewport {
    fn scroll_offset(&self) -> (i32, i32) {
        self.scroll
    }

    fn content_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn snapshot(&self) -> Box<dyn Surface> {
        Box::new(self.background.clone())
    }

    fn create_surface(&self) -> Box<dyn Surface> {
        Box::new(Pixmap::new(self.width, self.height))
    }
}

/// Chrome that answers every confirmation prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Chrome for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}
