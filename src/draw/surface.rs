//! The raster surface contract the drawing engine runs against.
//!
//! The real overlay renders into whatever 2D context the host provides; the
//! engine only relies on the small primitive set defined here. [`Pixmap`] in
//! this crate is the reference implementation.
//!
//! [`Pixmap`]: super::Pixmap

use super::color::Color;
use crate::util::{Point, Rect};

/// A single pixel as straight (non-premultiplied) RGBA bytes.
pub type Rgba = [u8; 4];

/// 2D raster drawing primitive.
///
/// Coordinates are in document space; implementations clip to their bounds.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fills a rectangle with `color` using source-over compositing.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Erases a rectangle back to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Strokes a connected polyline with round caps and joins.
    ///
    /// A single-point polyline renders a dot of the given width.
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color);

    /// Reads one pixel; out-of-bounds reads return fully transparent.
    fn pixel(&self, x: i32, y: i32) -> Rgba;

    /// Overwrites every pixel with `color` (no compositing).
    fn fill_all(&mut self, color: Color);
}

/// Erases the full surface to transparent.
pub fn clear_surface(surface: &mut dyn Surface) {
    let rect = Rect::new(0, 0, surface.width() as i32, surface.height() as i32);
    surface.clear_rect(rect);
}

/// Fills the full surface with fully-transparent white.
///
/// Establishes a defined pixel format before any color sampling occurs.
pub fn init_surface(surface: &mut dyn Surface) {
    surface.fill_all(Color::rgba(255, 255, 255, 0.0));
}

/// Samples the pixel under `point`, falling back to the background snapshot
/// when the live surface is fully transparent there.
///
/// This is deliberately naive top-layer-or-background sampling: a partially
/// transparent live pixel wins outright, no alpha compositing is performed.
pub fn sample_fallback(live: &dyn Surface, background: &dyn Surface, point: Point) -> Color {
    let top = live.pixel(point.x, point.y);
    let chosen = if top[3] == 0 {
        background.pixel(point.x, point.y)
    } else {
        top
    };
    Color::rgb(chosen[0], chosen[1], chosen[2])
}
