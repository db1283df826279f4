//! In-page freehand annotation overlay.
//!
//! Exposes the sketch session controller together with the subsystems it is
//! built from (brush strategies, raster surfaces, tool menu, configuration)
//! so that embedders can drive a session from their own event loop and render
//! its surfaces however they like.

pub mod brush;
pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod menu;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::{SessionIds, SketchSession, StrokeState};
