//! The floating tool palette.
//!
//! The menu owns the ordered button list, the shortcut map, the single
//! persistently-selected button, and the static color palette. Button
//! activation mutates session state (the active brush or the shared brush
//! configuration); the menu itself never draws.

pub mod button;

pub use button::{ButtonAction, Shortcut, ToolButton, button_from_id};

use std::collections::HashMap;

use crate::brush::{Eraser, Pen, Pipette, RectBrush, RectEraser};
use crate::config::Config;
use crate::draw::{Color, clear_surface, color::BLACK, sample_fallback};
use crate::host::Chrome;
use crate::input::KeyEvent;
use crate::session::{SessionState, StrokeState};

/// Prompt shown before wiping the drawing surface.
pub(crate) const CLEAR_PROMPT: &str = "Clear all annotations?";

/// The tool palette: ordered buttons, shortcut dispatch, selection state,
/// and the shared color palette.
pub struct ToolMenu {
    buttons: Vec<ToolButton>,
    shortcuts: HashMap<Shortcut, usize>,
    selected: Option<usize>,
    palette: Vec<Color>,
    indicator: Color,
    visible: bool,
    alpha_value: f64,
}

impl ToolMenu {
    /// Builds the menu from the configured button order and palette.
    ///
    /// Unknown button identifiers and unparseable palette entries are
    /// skipped with a warning; the menu is built from whatever remains.
    pub fn from_config(config: &Config) -> Self {
        let mut menu = Self {
            buttons: Vec::new(),
            shortcuts: HashMap::new(),
            selected: None,
            palette: Vec::new(),
            indicator: BLACK,
            visible: true,
            alpha_value: config.brush.alpha,
        };

        for id in &config.menu.buttons {
            match button_from_id(id, &config.brush) {
                Some(button) => menu.register_button(button),
                None => log::warn!("Skipping unknown tool button id {id:?}"),
            }
        }

        for entry in &config.menu.palette {
            match Color::parse(entry) {
                Ok(color) => menu.palette.push(color),
                Err(err) => log::warn!("Skipping palette entry: {err}"),
            }
        }

        menu
    }

    /// Appends a button and registers its shortcut.
    ///
    /// Re-registering an existing shortcut overwrites the previous binding;
    /// the last registration wins.
    pub fn register_button(&mut self, button: ToolButton) {
        let index = self.buttons.len();
        if let Some(shortcut) = button.shortcut {
            if let Some(previous) = self.shortcuts.insert(shortcut, index) {
                log::debug!(
                    "Shortcut {shortcut:?} rebound from {:?} to {:?}",
                    self.buttons[previous].name,
                    button.name
                );
            }
        }
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }

    /// Index of the button with the given name, if present.
    pub fn button_index(&self, name: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.name == name)
    }

    /// Index of the first non-momentary button, used for the initial
    /// selection when the overlay opens.
    pub fn first_persistent(&self) -> Option<usize> {
        self.buttons.iter().position(|b| !b.momentary)
    }

    /// The persistently-selected button index, if any has been chosen.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_button(&self) -> Option<&ToolButton> {
        self.selected.and_then(|i| self.buttons.get(i))
    }

    /// Current color palette.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Color of the palette border indicator; follows the active color.
    pub fn indicator(&self) -> Color {
        self.indicator
    }

    /// True while the palette is attached to the document.
    pub fn is_shown(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The single path by which the active color changes: updates the shared
    /// brush configuration and the palette indicator together.
    pub fn set_color(&mut self, state: &mut SessionState, color: Color) {
        state.options.color = color.opaque();
        self.indicator = color.opaque();
    }

    /// Activates the palette cell at `index` as if it had been clicked.
    pub fn palette_click(&mut self, state: &mut SessionState, index: usize) {
        if let Some(&color) = self.palette.get(index) {
            self.set_color(state, color);
        }
    }

    /// Dispatches a key press to the matching shortcut, if any.
    ///
    /// Ctrl/Meta maps to the modifier shortcut; other keys match their
    /// lowercase character form. Unmatched keys are silently ignored.
    pub fn dispatch_shortcut(
        &mut self,
        key: &KeyEvent,
        state: &mut SessionState,
        chrome: &mut dyn Chrome,
    ) {
        if !self.visible {
            return;
        }
        let shortcut = if key.ctrl || key.meta {
            Shortcut::Modifier
        } else {
            Shortcut::Char(key.key.to_ascii_lowercase())
        };
        if let Some(&index) = self.shortcuts.get(&shortcut) {
            self.select(index, state, chrome);
        }
    }

    /// Shared selection routine for clicks and shortcuts.
    ///
    /// Momentary buttons fire without touching the selection; any other
    /// button replaces the previously selected one, keeping exactly one
    /// persistently-selected button.
    pub fn select(&mut self, index: usize, state: &mut SessionState, chrome: &mut dyn Chrome) {
        let (momentary, action) = match self.buttons.get(index) {
            Some(button) => (button.momentary, button.action.clone()),
            None => return,
        };
        if !momentary {
            self.selected = Some(index);
        }
        log::debug!("Activating tool button {:?}", self.buttons[index].name);
        self.apply(&action, state, chrome);
    }

    fn apply(&mut self, action: &ButtonAction, state: &mut SessionState, chrome: &mut dyn Chrome) {
        match action {
            ButtonAction::PenBrush { width, reset_color } => {
                state.brush = Box::new(Pen::new());
                state.options.width = *width;
                if let Some(color) = reset_color {
                    self.set_color(state, *color);
                }
            }
            ButtonAction::RectBrush => {
                state.brush = Box::new(RectBrush::new());
            }
            ButtonAction::RectEraserBrush => {
                state.brush = Box::new(RectEraser::new());
            }
            ButtonAction::EraserBrush { width } => {
                state.brush = Box::new(Eraser::new());
                state.options.width = *width;
            }
            ButtonAction::PipetteBrush => {
                state.brush = Box::new(Pipette::new());
            }
            ButtonAction::PickAtPointer => {
                if let Some(point) = state.last_point {
                    let color =
                        sample_fallback(state.drawing.as_ref(), state.background.as_ref(), point);
                    self.set_color(state, color);
                }
            }
            ButtonAction::ToggleAlpha => {
                state.options.alpha = match state.options.alpha {
                    Some(_) => None,
                    None => Some(self.alpha_value),
                };
                log::debug!("Brush alpha toggled to {:?}", state.options.alpha);
            }
            ButtonAction::ClearCanvas => {
                if chrome.confirm(CLEAR_PROMPT) {
                    clear_surface(state.drawing.as_mut());
                    log::debug!("Drawing surface cleared");
                }
            }
            ButtonAction::CloseOverlay => {
                // Same teardown as an explicit hide: an in-progress stroke
                // is abandoned, never left dangling behind a hidden overlay.
                if state.stroke == StrokeState::Drawing {
                    log::debug!("Stroke abandoned on close");
                }
                state.preview = None;
                state.stroke = StrokeState::Idle;
                state.visible = false;
                self.hide();
            }
        }
    }
}
