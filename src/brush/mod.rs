//! Brush strategies and the per-stroke lifecycle contract.
//!
//! A brush turns pointer events into pixels. The session controller drives
//! every stroke through the same lifecycle:
//!
//! 1. [`Brush::start`] - the brush reads the shared configuration once
//! 2. [`Brush::pointer_down`] - the stroke begins
//! 3. zero or more [`Brush::pointer_move`] calls (only when
//!    [`Brush::allows_dragging`] is true)
//! 4. [`Brush::pointer_up`] - the stroke commits
//!
//! Surfaces are never captured by a brush: each call borrows them through
//! [`StrokeCtx`], so nothing outlives the stroke.

pub mod eraser;
pub mod pen;
pub mod pipette;
pub mod rect;
pub mod rect_eraser;

pub use eraser::Eraser;
pub use pen::Pen;
pub use pipette::Pipette;
pub use rect::RectBrush;
pub use rect_eraser::RectEraser;

use crate::draw::{Color, Surface, color::BLACK};
use crate::util::Point;

/// Shared brush configuration, owned by the session and mutated by tool
/// buttons. A brush reads it once at stroke start; menu changes mid-stroke
/// do not affect the stroke in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushOptions {
    /// Base stroke color, always an opaque rgb value.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Optional translucency applied on top of `color`.
    pub alpha: Option<f64>,
}

impl BrushOptions {
    /// Derives the draw color: the base color with `alpha` applied when set,
    /// the opaque base color otherwise.
    pub fn effective_color(&self) -> Color {
        match self.alpha {
            Some(alpha) => self.color.with_alpha(alpha),
            None => self.color,
        }
    }
}

impl Default for BrushOptions {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 5.0,
            alpha: None,
        }
    }
}

/// The three surfaces a brush may touch during one stroke.
pub struct StrokeCtx<'a> {
    /// Persistent layer holding committed strokes.
    pub drawing: &'a mut dyn Surface,
    /// Ephemeral per-stroke layer for live feedback.
    pub preview: &'a mut dyn Surface,
    /// Immutable snapshot of the document beneath the overlay.
    pub background: &'a dyn Surface,
}

/// Side effect requested by a brush beyond drawing on its surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushAction {
    /// Nothing beyond the surface mutations already performed.
    None,
    /// Adopt the given color as the shared brush color (pipette result).
    SetColor(Color),
}

/// Polymorphic drawing strategy; see the module docs for the lifecycle.
pub trait Brush {
    /// Whether pointer-move events should be forwarded during a stroke.
    fn allows_dragging(&self) -> bool {
        true
    }

    /// Captures configuration and performs per-stroke setup.
    fn start(&mut self, _options: &BrushOptions, _ctx: &mut StrokeCtx<'_>) {}

    /// Begins the stroke at `point`.
    fn pointer_down(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction;

    /// Continues the stroke; only called when `allows_dragging` is true.
    fn pointer_move(&mut self, _point: Point, _ctx: &mut StrokeCtx<'_>) {}

    /// Commits the stroke. Transient state is discarded before returning.
    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction;
}
