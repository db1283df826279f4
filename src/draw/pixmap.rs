//! In-memory RGBA surface implementation.

use super::color::Color;
use super::surface::{Rgba, Surface};
use crate::util::{Point, Rect};

/// CPU raster surface backing the engine in tests and headless embeddings.
///
/// Pixels are stored as straight RGBA bytes in row-major order. Drawing
/// operations composite with source-over; erase operations zero the bytes.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; Self::byte_len(width, height)],
        }
    }

    /// Buffer length in bytes. Widened to `usize` before multiplying so
    /// document-sized surfaces do not wrap 32-bit arithmetic.
    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some((y as usize * self.width as usize + x as usize) * 4)
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(i) = self.index(x, y) else { return };
        let sa = color.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let da = self.data[i + 3] as f64 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let over = |s: u8, d: u8| -> u8 {
            let s = s as f64 / 255.0;
            let d = d as f64 / 255.0;
            (((s * sa + d * da * (1.0 - sa)) / out_a) * 255.0).round() as u8
        };

        let (dr, dg, db) = (self.data[i], self.data[i + 1], self.data[i + 2]);
        self.data[i] = over(color.r, dr);
        self.data[i + 1] = over(color.g, dg);
        self.data[i + 2] = over(color.b, db);
        self.data[i + 3] = (out_a * 255.0).round() as u8;
    }

    fn clipped(&self, rect: Rect) -> Option<(i32, i32, i32, i32)> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = (rect.x + rect.width).min(self.width as i32);
        let y1 = (rect.y + rect.height).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 { None } else { Some((x0, y0, x1, y1)) }
    }

    /// Marks every pixel within `radius` of (cx, cy) in the coverage mask.
    fn stamp_disc(&self, mask: &mut [bool], cx: i32, cy: i32, radius: f64) {
        let reach = radius.ceil() as i32;
        // The +0.25 bias keeps a width-1 stroke at exactly one pixel while
        // rounding wider strokes outward.
        let limit = radius * radius + 0.25;
        for oy in -reach..=reach {
            for ox in -reach..=reach {
                if ((ox * ox + oy * oy) as f64) <= limit {
                    if let Some(i) = self.index(cx + ox, cy + oy) {
                        mask[i / 4] = true;
                    }
                }
            }
        }
    }
}

impl Surface for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clipped(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some((x0, y0, x1, y1)) = self.clipped(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(i) = self.index(x, y) {
                    self.data[i..i + 4].fill(0);
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color) {
        if points.is_empty() {
            return;
        }

        // Rasterize the whole polyline into a coverage mask first, then blend
        // each covered pixel once. Blending per dab would darken overlaps of
        // translucent strokes at every joint.
        let mut mask = vec![false; self.width as usize * self.height as usize];
        let radius = (width / 2.0).max(0.5);

        self.stamp_disc(&mut mask, points[0].x, points[0].y, radius);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let steps = dx.abs().max(dy.abs());
            for i in 1..=steps {
                let t = i as f64 / steps as f64;
                let x = a.x + (dx as f64 * t).round() as i32;
                let y = a.y + (dy as f64 * t).round() as i32;
                self.stamp_disc(&mut mask, x, y, radius);
            }
        }

        for (pixel, covered) in mask.into_iter().enumerate() {
            if covered {
                let x = (pixel % self.width as usize) as i32;
                let y = (pixel / self.width as usize) as i32;
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba {
        match self.index(x, y) {
            Some(i) => [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ],
            None => [0, 0, 0, 0],
        }
    }

    fn fill_all(&mut self, color: Color) {
        let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        for chunk in self.data.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = alpha;
        }
    }
}
