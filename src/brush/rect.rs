//! Filled rectangle brush.

use super::{Brush, BrushAction, BrushOptions, StrokeCtx};
use crate::draw::{Color, clear_surface, color::BLACK};
use crate::util::{Point, Rect};

/// Drag-to-fill rectangle brush.
///
/// The pointer-down point anchors one corner; every move redraws the live
/// rectangle on the preview surface, and pointer-up fills the final anchor
/// to release rectangle on the drawing surface.
#[derive(Debug)]
pub struct RectBrush {
    anchor: Option<Point>,
    color: Color,
}

impl RectBrush {
    pub fn new() -> Self {
        Self {
            anchor: None,
            color: BLACK,
        }
    }
}

impl Default for RectBrush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for RectBrush {
    fn start(&mut self, options: &BrushOptions, _ctx: &mut StrokeCtx<'_>) {
        self.anchor = None;
        self.color = options.effective_color();
    }

    fn pointer_down(&mut self, point: Point, _ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.anchor = Some(point);
        BrushAction::None
    }

    fn pointer_move(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) {
        let Some(anchor) = self.anchor else { return };
        clear_surface(ctx.preview);
        ctx.preview
            .fill_rect(Rect::from_points(anchor, point), self.color);
    }

    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        if let Some(anchor) = self.anchor.take() {
            ctx.drawing
                .fill_rect(Rect::from_points(anchor, point), self.color);
        }
        BrushAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::test_support::surfaces;
    use crate::draw::Surface;

    #[test]
    fn commit_fills_rect_between_anchor_and_release() {
        let (mut drawing, mut preview, background) = surfaces(20);
        let mut brush = RectBrush::new();
        let options = BrushOptions {
            color: Color::rgb(0, 0, 200),
            width: 5.0,
            alpha: None,
        };

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        brush.start(&options, &mut ctx);
        brush.pointer_down(Point::new(0, 0), &mut ctx);
        brush.pointer_move(Point::new(5, 5), &mut ctx);
        brush.pointer_up(Point::new(10, 10), &mut ctx);

        assert_eq!(drawing.pixel(5, 5), [0, 0, 200, 255]);
        assert_eq!(drawing.pixel(9, 9), [0, 0, 200, 255]);
        assert_eq!(drawing.pixel(10, 10)[3], 0);
    }

    #[test]
    fn drag_direction_does_not_matter() {
        let (mut drawing, mut preview, background) = surfaces(20);
        let mut brush = RectBrush::new();
        let options = BrushOptions {
            color: Color::rgb(10, 20, 30),
            width: 5.0,
            alpha: None,
        };

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        brush.start(&options, &mut ctx);
        // Drag up and to the left.
        brush.pointer_down(Point::new(10, 10), &mut ctx);
        brush.pointer_up(Point::new(2, 2), &mut ctx);

        assert_eq!(drawing.pixel(5, 5), [10, 20, 30, 255]);
        assert_eq!(drawing.pixel(2, 2), [10, 20, 30, 255]);
    }

    #[test]
    fn each_move_redraws_preview_from_scratch() {
        let (mut drawing, mut preview, background) = surfaces(30);
        let mut brush = RectBrush::new();
        let options = BrushOptions {
            color: Color::rgb(0, 0, 0),
            width: 5.0,
            alpha: None,
        };

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        brush.start(&options, &mut ctx);
        brush.pointer_down(Point::new(0, 0), &mut ctx);
        brush.pointer_move(Point::new(20, 20), &mut ctx);
        brush.pointer_move(Point::new(5, 5), &mut ctx);

        // The stale larger rectangle is gone after shrinking the drag.
        assert_eq!(preview.pixel(15, 15)[3], 0);
        assert_eq!(preview.pixel(3, 3)[3], 255);
        assert_eq!(drawing.pixel(3, 3)[3], 0);
    }
}
