//! Rectangular eraser brush.

use super::{Brush, BrushAction, BrushOptions, StrokeCtx};
use crate::draw::{Color, clear_surface};
use crate::util::{Point, Rect};

/// Translucent red indicator shown while dragging out the erase region.
///
/// The preview deliberately looks like paint while the commit erases: the
/// fixed red fill marks the doomed region regardless of the configured
/// brush color.
const PREVIEW_INDICATOR: Color = Color::rgba(255, 0, 0, 0.7);

/// Drag-to-erase rectangle brush.
///
/// Shares the anchor/drag geometry of [`RectBrush`], but the commit clears
/// the region back to transparent instead of filling it.
///
/// [`RectBrush`]: super::RectBrush
#[derive(Debug, Default)]
pub struct RectEraser {
    anchor: Option<Point>,
}

impl RectEraser {
    pub fn new() -> Self {
        Self { anchor: None }
    }
}

impl Brush for RectEraser {
    fn start(&mut self, _options: &BrushOptions, _ctx: &mut StrokeCtx<'_>) {
        self.anchor = None;
    }

    fn pointer_down(&mut self, point: Point, _ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.anchor = Some(point);
        BrushAction::None
    }

    fn pointer_move(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) {
        let Some(anchor) = self.anchor else { return };
        clear_surface(ctx.preview);
        ctx.preview
            .fill_rect(Rect::from_points(anchor, point), PREVIEW_INDICATOR);
    }

    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        if let Some(anchor) = self.anchor.take() {
            ctx.drawing.clear_rect(Rect::from_points(anchor, point));
        }
        BrushAction::None
    }
}
