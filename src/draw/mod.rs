//! Raster drawing primitives.
//!
//! This module defines the surface contract the drawing engine runs against:
//! - [`Color`]: RGBA color with CSS-style parsing and formatting
//! - [`Surface`]: the 2D raster primitive trait
//! - [`Pixmap`]: an in-memory reference implementation
//! - Whole-surface helpers ([`clear_surface`], [`init_surface`]) and the
//!   pipette's naive [`sample_fallback`] rule

pub mod color;
pub mod pixmap;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorFormatError};
pub use pixmap::Pixmap;
pub use surface::{Rgba, Surface, clear_surface, init_surface, sample_fallback};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, WHITE};
