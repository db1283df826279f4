//! Freehand pen brush.

use super::{Brush, BrushAction, BrushOptions, StrokeCtx};
use crate::draw::{Color, color::BLACK};
use crate::util::Point;

/// Freehand polyline brush.
///
/// During the stroke each segment is drawn on the preview surface only; the
/// commit re-walks the full recorded point history and strokes the connected
/// polyline onto the drawing surface in a single path. Even if intermediate
/// move events were throttled out of the preview, the committed stroke is
/// always the true polyline.
#[derive(Debug)]
pub struct Pen {
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl Pen {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            color: BLACK,
            width: 5.0,
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for Pen {
    fn start(&mut self, options: &BrushOptions, _ctx: &mut StrokeCtx<'_>) {
        self.points.clear();
        self.color = options.effective_color();
        self.width = options.width;
    }

    fn pointer_down(&mut self, point: Point, _ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.points.push(point);
        BrushAction::None
    }

    fn pointer_move(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) {
        if let Some(&last) = self.points.last() {
            ctx.preview
                .stroke_polyline(&[last, point], self.width, self.color);
        }
        self.points.push(point);
    }

    fn pointer_up(&mut self, point: Point, ctx: &mut StrokeCtx<'_>) -> BrushAction {
        self.points.push(point);
        ctx.drawing
            .stroke_polyline(&self.points, self.width, self.color);
        self.points = Vec::new();
        BrushAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::test_support::surfaces;
    use crate::draw::Surface;

    #[test]
    fn commit_strokes_full_polyline_onto_drawing_surface() {
        let (mut drawing, mut preview, background) = surfaces(40);
        let mut pen = Pen::new();
        let options = BrushOptions {
            color: Color::rgb(0, 0, 0),
            width: 1.0,
            alpha: None,
        };

        let path = [
            Point::new(2, 2),
            Point::new(10, 4),
            Point::new(6, 20),
            Point::new(30, 30),
        ];

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        pen.start(&options, &mut ctx);
        pen.pointer_down(path[0], &mut ctx);
        pen.pointer_move(path[1], &mut ctx);
        pen.pointer_move(path[2], &mut ctx);
        pen.pointer_up(path[3], &mut ctx);

        for p in path {
            assert_eq!(drawing.pixel(p.x, p.y)[3], 255, "missing vertex {p:?}");
        }
        // Transient point history is discarded on completion.
        assert!(pen.points.is_empty());
    }

    #[test]
    fn moves_render_to_preview_not_drawing() {
        let (mut drawing, mut preview, background) = surfaces(20);
        let mut pen = Pen::new();
        let options = BrushOptions::default();

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        pen.start(&options, &mut ctx);
        pen.pointer_down(Point::new(2, 10), &mut ctx);
        pen.pointer_move(Point::new(15, 10), &mut ctx);

        assert_eq!(preview.pixel(8, 10)[3], 255);
        // Nothing committed until pointer-up.
        assert_eq!(drawing.pixel(8, 10)[3], 0);
    }

    #[test]
    fn down_up_at_same_point_commits_a_dot() {
        let (mut drawing, mut preview, background) = surfaces(20);
        let mut pen = Pen::new();
        let options = BrushOptions {
            color: Color::rgb(0, 0, 0),
            width: 1.0,
            alpha: None,
        };

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        pen.start(&options, &mut ctx);
        pen.pointer_down(Point::new(10, 10), &mut ctx);
        pen.pointer_up(Point::new(10, 10), &mut ctx);

        assert_eq!(drawing.pixel(10, 10), [0, 0, 0, 255]);
        assert_eq!(drawing.pixel(12, 10)[3], 0);
    }

    #[test]
    fn options_are_captured_at_start_not_reread() {
        let (mut drawing, mut preview, background) = surfaces(20);
        let mut pen = Pen::new();
        let mut options = BrushOptions {
            color: Color::rgb(200, 0, 0),
            width: 1.0,
            alpha: None,
        };

        let mut ctx = StrokeCtx {
            drawing: &mut drawing,
            preview: &mut preview,
            background: &background,
        };
        pen.start(&options, &mut ctx);
        pen.pointer_down(Point::new(5, 5), &mut ctx);
        // A menu change mid-stroke must not affect the stroke in progress.
        options.color = Color::rgb(0, 200, 0);
        pen.pointer_up(Point::new(5, 5), &mut ctx);

        assert_eq!(drawing.pixel(5, 5), [200, 0, 0, 255]);
    }
}
