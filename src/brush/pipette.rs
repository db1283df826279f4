//! Color-pipette brush.

use super::{Brush, BrushAction, StrokeCtx};
use crate::draw::sample_fallback;
use crate::util::Point;

/// Color sampling brush.
///
/// Never modifies a surface; it reads the pixel under the pointer from the
/// drawing surface, falling back to the background snapshot when the live
/// pixel is fully transparent, and asks the session to adopt the result as
/// the shared brush color.
#[derive(Debug, Default)]
pub struct Pipette;

impl Pipette {
    pub fn new() -> Self {
        Self
    }

    fn sample(&self, point: Point, ctx: &StrokeCtx<'_>) -> BrushAction {
        BrushAction::SetColor(sample_fallback(&*ctx.drawing, ctx.background, point))
    }
}

impl Brush for Pipette {
    fn allows_dragging(&self) -> bool {
        false
    }

    fn pointer_down(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.sample(point, ctx)
    }

    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.sample(point, ctx)
    }
}
