//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Tool menu layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Ordered list of button identifiers to build the palette from.
    /// Known identifiers: close, pen1-pen4, rect, rect_eraser, eraser,
    /// clear, pipette, hide_pipette, alpha.
    #[serde(default = "default_buttons")]
    pub buttons: Vec<String>,

    /// Palette colors as `#rrggbb` strings, top to bottom.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            buttons: default_buttons(),
            palette: default_palette(),
        }
    }
}

/// Brush defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Stroke widths for the four pen buttons (valid range: 1.0 - 64.0)
    #[serde(default = "default_pen_widths")]
    pub pen_widths: [f64; 4],

    /// Shared width set by the eraser button (valid range: 1.0 - 64.0)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,

    /// Translucency applied by the alpha toggle (valid range: 0.05 - 1.0)
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            pen_widths: default_pen_widths(),
            eraser_width: default_eraser_width(),
            alpha: default_alpha(),
        }
    }
}

/// Overlay behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Hide the tool menu while a stroke is in progress.
    #[serde(default = "default_hide_menu")]
    pub hide_menu_while_drawing: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_menu_while_drawing: default_hide_menu(),
        }
    }
}

fn default_buttons() -> Vec<String> {
    [
        "close",
        "pen1",
        "pen2",
        "pen3",
        "pen4",
        "rect",
        "rect_eraser",
        "eraser",
        "clear",
        "pipette",
        "hide_pipette",
        "alpha",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_palette() -> Vec<String> {
    [
        "#000000", "#FFFFFF", "#9ea1a3", "#D9333F", "#F5B199", "#FFDB4F", "#7EBEAB", "#2F5D50",
        "#706CAA",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_pen_widths() -> [f64; 4] {
    [1.0, 5.0, 10.0, 30.0]
}

fn default_eraser_width() -> f64 {
    20.0
}

fn default_alpha() -> f64 {
    0.5
}

fn default_hide_menu() -> bool {
    true
}
