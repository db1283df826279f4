//! Geometry helpers shared by brushes, surfaces, and the session controller.

use crate::input::PointerEvent;

/// A position in document coordinates (pointer client coordinates plus the
/// viewport scroll offset at the time of the event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the bounding rectangle of two corner points.
    ///
    /// The result is independent of argument order, so fill and erase
    /// operations behave the same regardless of drag direction.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    /// Returns true if the rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Converts a raw pointer event into document coordinates.
///
/// The scroll offset is sampled per event, not cached, so points stay stable
/// when the page scrolls mid-stroke.
pub fn point_from_event(event: &PointerEvent, scroll: (i32, i32)) -> Point {
    Point::new(event.client_x + scroll.0, event.client_y + scroll.1)
}
