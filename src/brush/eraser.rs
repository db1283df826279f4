//! Freehand eraser brush.

use super::{Brush, BrushAction, StrokeCtx};
use crate::util::{Point, Rect};

/// Half-width of the square erased around each visited point.
const ERASE_HALF_WIDTH: i32 = 10;

/// Freehand eraser.
///
/// Erases a fixed-size square centered on every visited point, directly on
/// the drawing surface. There is no preview and no commit step: the erase is
/// destructive from the first pointer-down.
#[derive(Debug, Default)]
pub struct Eraser;

impl Eraser {
    pub fn new() -> Self {
        Self
    }

    fn erase(&self, point: Point, ctx: &mut StrokeCtx<'_>) {
        ctx.drawing.clear_rect(Rect::new(
            point.x - ERASE_HALF_WIDTH,
            point.y - ERASE_HALF_WIDTH,
            ERASE_HALF_WIDTH * 2,
            ERASE_HALF_WIDTH * 2,
        ));
    }
}

impl Brush for Eraser {
    fn pointer_down(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.erase(point, ctx);
        BrushAction::None
    }

    fn pointer_move(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) {
        self.erase(point, ctx);
    }

    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.erase(point, ctx);
        BrushAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{BrushOptions, test_support::surfaces};
    use crate::draw::{Color, Surface};

    #[test]
    fn erases_destructively_from_pointer_down() {
        let (mut drawing, mut preview, background) = surfaces(60);
        drawing.fill_rect(Rect::new(0, 0, 60, 60), Color::rgb(80, 80, 80));

        let mut eraser = Eraser::new();
        let options = BrushOptions::default();
        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        eraser.start(&options, &mut ctx);
        eraser.pointer_down(Point::new(20, 20), &mut ctx);

        // Erased before any pointer-up.
        assert_eq!(drawing.pixel(20, 20)[3], 0);
        assert_eq!(drawing.pixel(12, 12)[3], 0);
        assert_eq!(drawing.pixel(35, 35)[3], 255);
        // The preview layer is never touched.
        assert!(preview.pixel(20, 20) == [0, 0, 0, 0]);
    }

    #[test]
    fn moves_erase_fixed_squares_at_each_point() {
        let (mut drawing, mut preview, background) = surfaces(80);
        drawing.fill_rect(Rect::new(0, 0, 80, 80), Color::rgb(80, 80, 80));

        let mut eraser = Eraser::new();
        let options = BrushOptions::default();
        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        eraser.pointer_down(Point::new(15, 15), &mut ctx);
        eraser.pointer_move(Point::new(60, 15), &mut ctx);
        eraser.pointer_up(Point::new(60, 60), &mut ctx);

        for p in [Point::new(15, 15), Point::new(60, 15), Point::new(60, 60)] {
            assert_eq!(drawing.pixel(p.x, p.y)[3], 0, "square not erased at {p:?}");
        }
        // Gaps between sampled points are untouched; the eraser does not
        // interpolate between events.
        assert_eq!(drawing.pixel(38, 15)[3], 255);
    }
}
