//! Tool button definitions.

use crate::config::BrushConfig;
use crate::draw::{Color, color::BLACK};

/// Keyboard shortcut attached to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// A plain character key, matched case-insensitively.
    Char(char),
    /// The Ctrl/Meta modifier pressed on its own.
    Modifier,
}

/// Effect a button applies when activated.
///
/// Buttons either swap the active brush or mutate shared state; the menu
/// interprets these centrally so a keyboard shortcut and a click go through
/// the exact same path.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonAction {
    /// Swap to a pen brush with the given stroke width. `reset_color`
    /// additionally routes a color change through the menu's single
    /// `set_color` path.
    PenBrush {
        width: f64,
        reset_color: Option<Color>,
    },
    /// Swap to the filled rectangle brush.
    RectBrush,
    /// Swap to the rectangular eraser brush.
    RectEraserBrush,
    /// Swap to the freehand eraser brush and set the shared width.
    EraserBrush { width: f64 },
    /// Swap to the color pipette brush.
    PipetteBrush,
    /// Sample the color under the last known pointer position.
    PickAtPointer,
    /// Toggle shared translucency between unset and the configured value.
    ToggleAlpha,
    /// Wipe the drawing surface after user confirmation.
    ClearCanvas,
    /// Hide the whole overlay.
    CloseOverlay,
}

/// A selectable entry in the tool menu.
///
/// Momentary buttons fire their action without becoming the persistently
/// selected tool and without affecting highlight state.
#[derive(Debug, Clone)]
pub struct ToolButton {
    pub name: String,
    pub shortcut: Option<Shortcut>,
    pub momentary: bool,
    pub action: ButtonAction,
}

impl ToolButton {
    pub fn new(
        name: impl Into<String>,
        shortcut: Option<Shortcut>,
        momentary: bool,
        action: ButtonAction,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut,
            momentary,
            action,
        }
    }
}

/// Builds the button for a configured identifier, or `None` for an unknown
/// identifier.
pub fn button_from_id(id: &str, brush: &BrushConfig) -> Option<ToolButton> {
    let button = match id {
        "close" => ToolButton::new(
            "Close",
            Some(Shortcut::Char('x')),
            true,
            ButtonAction::CloseOverlay,
        ),
        "pen1" => ToolButton::new(
            "Pen1",
            Some(Shortcut::Char('1')),
            false,
            ButtonAction::PenBrush {
                width: brush.pen_widths[0],
                // The thin pen doubles as a reset to the default ink.
                reset_color: Some(BLACK),
            },
        ),
        "pen2" => ToolButton::new(
            "Pen2",
            Some(Shortcut::Char('2')),
            false,
            ButtonAction::PenBrush {
                width: brush.pen_widths[1],
                reset_color: None,
            },
        ),
        "pen3" => ToolButton::new(
            "Pen3",
            Some(Shortcut::Char('3')),
            false,
            ButtonAction::PenBrush {
                width: brush.pen_widths[2],
                reset_color: None,
            },
        ),
        "pen4" => ToolButton::new(
            "Pen4",
            Some(Shortcut::Char('4')),
            false,
            ButtonAction::PenBrush {
                width: brush.pen_widths[3],
                reset_color: None,
            },
        ),
        "rect" => ToolButton::new(
            "Rect",
            Some(Shortcut::Char('r')),
            false,
            ButtonAction::RectBrush,
        ),
        "rect_eraser" => ToolButton::new(
            "RectEraser",
            Some(Shortcut::Char('t')),
            false,
            ButtonAction::RectEraserBrush,
        ),
        "eraser" => ToolButton::new(
            "Eraser",
            Some(Shortcut::Char('e')),
            false,
            ButtonAction::EraserBrush {
                width: brush.eraser_width,
            },
        ),
        "clear" => ToolButton::new(
            "Clear",
            Some(Shortcut::Char('c')),
            true,
            ButtonAction::ClearCanvas,
        ),
        "pipette" => ToolButton::new("Pipette", None, false, ButtonAction::PipetteBrush),
        "hide_pipette" => ToolButton::new(
            "HidePipette",
            Some(Shortcut::Modifier),
            true,
            ButtonAction::PickAtPointer,
        ),
        "alpha" => ToolButton::new(
            "Alpha",
            Some(Shortcut::Char('a')),
            true,
            ButtonAction::ToggleAlpha,
        ),
        _ => return None,
    };
    Some(button)
}
