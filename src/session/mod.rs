//! The sketch session controller.
//!
//! A [`SketchSession`] ties one viewport, one chrome, one tool menu, and one
//! set of overlay surfaces together and drives the stroke state machine:
//! pointer events arrive in client coordinates, get translated into document
//! coordinates, and are forwarded to the active brush through the per-stroke
//! [`StrokeCtx`]. The session owns the only `Drawing -> Idle` transition, so
//! stroke teardown (detaching the preview, re-showing the menu) happens in
//! exactly one place.

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::brush::{Brush, BrushAction, BrushOptions, Pen, StrokeCtx};
use crate::config::Config;
use crate::draw::{Surface, clear_surface, init_surface, sample_fallback};
use crate::host::{Chrome, Viewport};
use crate::input::{KeyEvent, PointerEvent};
use crate::menu::{CLEAR_PROMPT, ToolMenu};
use crate::util::{Point, point_from_event};

/// Monotonic generator for session identifiers.
///
/// Owned by whoever constructs sessions; ids drawn from one generator are
/// never reused, so log lines from overlapping sessions stay
/// distinguishable.
pub struct SessionIds(AtomicU64);

impl SessionIds {
    pub const fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SessionIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the session is in the stroke lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// No stroke in progress; pointer-move only tracks the hover position.
    Idle,
    /// Between pointer-down and pointer-up; events go to the active brush.
    Drawing,
}

/// Mutable session data shared between the controller and the tool menu.
///
/// Kept separate from [`SketchSession`] so the menu can mutate the active
/// brush and shared options without borrowing the whole session.
pub struct SessionState {
    /// Whether the overlay accepts input and is meant to be on screen.
    pub visible: bool,
    /// Hide the tool menu for the duration of each stroke.
    pub hide_menu_while_drawing: bool,
    /// Shared brush configuration read at stroke start.
    pub options: BrushOptions,
    /// The active drawing strategy.
    pub brush: Box<dyn Brush>,
    /// Persistent layer holding committed strokes.
    pub drawing: Box<dyn Surface>,
    /// Ephemeral per-stroke layer, attached only while a stroke is live.
    pub preview: Option<Box<dyn Surface>>,
    /// Snapshot of the document beneath the overlay.
    pub background: Box<dyn Surface>,
    /// Stroke state machine position.
    pub stroke: StrokeState,
    /// Last pointer position in document coordinates, for pick-at-pointer.
    pub last_point: Option<Point>,
}

/// One in-page annotation session.
pub struct SketchSession<V: Viewport, C: Chrome> {
    id: u64,
    viewport: V,
    chrome: C,
    menu: ToolMenu,
    state: SessionState,
}

impl<V: Viewport, C: Chrome> SketchSession<V, C> {
    /// Opens a session over the given viewport: allocates the drawing
    /// surface, snapshots the document, builds the tool menu, and selects
    /// the first persistent button as the initial tool.
    ///
    /// The id is drawn from the caller's [`SessionIds`] generator.
    pub fn new(viewport: V, chrome: C, config: &Config, ids: &SessionIds) -> Self {
        let id = ids.next();

        let mut drawing = viewport.create_surface();
        init_surface(drawing.as_mut());
        let background = viewport.snapshot();

        let menu = ToolMenu::from_config(config);

        let state = SessionState {
            visible: true,
            hide_menu_while_drawing: config.overlay.hide_menu_while_drawing,
            options: BrushOptions::default(),
            brush: Box::new(Pen::new()),
            drawing,
            preview: None,
            background,
            stroke: StrokeState::Idle,
            last_point: None,
        };

        let mut session = Self {
            id,
            viewport,
            chrome,
            menu,
            state,
        };

        if let Some(index) = session.menu.first_persistent() {
            session.select_button(index);
        }

        log::info!("Sketch session {id} opened");
        session
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Begins a stroke at the event position.
    ///
    /// Ignored while hidden, and ignored while a stroke is already in
    /// progress (a second pointer-down mid-stroke must not restart the
    /// lifecycle).
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if !self.state.visible || self.state.stroke == StrokeState::Drawing {
            return;
        }

        let point = point_from_event(event, self.viewport.scroll_offset());
        self.state.last_point = Some(point);

        if self.state.hide_menu_while_drawing {
            self.menu.hide();
        }

        let mut preview = self.viewport.create_surface();
        clear_surface(preview.as_mut());
        self.state.preview = Some(preview);
        self.state.stroke = StrokeState::Drawing;
        log::debug!("Session {}: stroke started at {point:?}", self.id);

        let action = {
            let SessionState {
                brush,
                drawing,
                preview,
                background,
                options,
                ..
            } = &mut self.state;
            let preview = match preview.as_mut() {
                Some(preview) => preview,
                None => return,
            };
            let mut ctx = StrokeCtx {
                drawing: drawing.as_mut(),
                preview: preview.as_mut(),
                background: background.as_ref(),
            };
            brush.start(options, &mut ctx);
            brush.pointer_down(point, &mut ctx)
        };
        self.handle_action(action);
    }

    /// Tracks the pointer. Outside a stroke this only records the hover
    /// position; during a stroke it forwards to the brush unless the brush
    /// opted out of dragging.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let point = point_from_event(event, self.viewport.scroll_offset());
        self.state.last_point = Some(point);

        if self.state.stroke != StrokeState::Drawing || !self.state.brush.allows_dragging() {
            return;
        }

        let SessionState {
            brush,
            drawing,
            preview,
            background,
            ..
        } = &mut self.state;
        let preview = match preview.as_mut() {
            Some(preview) => preview,
            None => return,
        };
        let mut ctx = StrokeCtx {
            drawing: drawing.as_mut(),
            preview: preview.as_mut(),
            background: background.as_ref(),
        };
        brush.pointer_move(point, &mut ctx);
    }

    /// Commits the stroke and tears it down: the preview is detached, the
    /// menu re-shown, and the state machine returns to idle.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        if self.state.stroke != StrokeState::Drawing {
            return;
        }

        let point = point_from_event(event, self.viewport.scroll_offset());
        self.state.last_point = Some(point);

        let action = {
            let SessionState {
                brush,
                drawing,
                preview,
                background,
                ..
            } = &mut self.state;
            let preview = match preview.as_mut() {
                Some(preview) => preview,
                None => return,
            };
            let mut ctx = StrokeCtx {
                drawing: drawing.as_mut(),
                preview: preview.as_mut(),
                background: background.as_ref(),
            };
            brush.pointer_up(point, &mut ctx)
        };

        self.state.preview = None;
        self.state.stroke = StrokeState::Idle;
        if self.state.visible {
            self.menu.show();
        }
        log::debug!("Session {}: stroke committed at {point:?}", self.id);

        self.handle_action(action);
    }

    /// Routes a key press to the menu's shortcut table. Shortcuts are live
    /// only while the menu is shown, which also suspends them mid-stroke
    /// when `hide_menu_while_drawing` is set.
    pub fn key_press(&mut self, key: &KeyEvent) {
        if !self.state.visible {
            return;
        }
        self.menu
            .dispatch_shortcut(key, &mut self.state, &mut self.chrome);
    }

    /// Activates a menu button by index, as a click would.
    pub fn select_button(&mut self, index: usize) {
        self.menu.select(index, &mut self.state, &mut self.chrome);
    }

    /// Activates a palette cell by index, as a click would.
    pub fn palette_click(&mut self, index: usize) {
        self.menu.palette_click(&mut self.state, index);
    }

    /// Adopts the color under the last known pointer position, sampling the
    /// document snapshot wherever the overlay is transparent.
    pub fn copy_color(&mut self) {
        if let Some(point) = self.state.last_point {
            let color = sample_fallback(
                self.state.drawing.as_ref(),
                self.state.background.as_ref(),
                point,
            );
            self.menu.set_color(&mut self.state, color);
        }
    }

    /// Wipes the drawing surface after confirmation.
    pub fn clear(&mut self) {
        if self.chrome.confirm(CLEAR_PROMPT) {
            clear_surface(self.state.drawing.as_mut());
            log::debug!("Session {}: drawing surface cleared", self.id);
        }
    }

    /// Re-shows a hidden overlay together with its menu.
    pub fn show(&mut self) {
        self.state.visible = true;
        self.menu.show();
    }

    /// Hides the overlay. An in-progress stroke is abandoned: its preview is
    /// discarded without committing.
    pub fn hide(&mut self) {
        if self.state.stroke == StrokeState::Drawing {
            log::debug!("Session {}: stroke abandoned on hide", self.id);
        }
        self.state.preview = None;
        self.state.stroke = StrokeState::Idle;
        self.state.visible = false;
        self.menu.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.state.stroke
    }

    pub fn options(&self) -> &BrushOptions {
        &self.state.options
    }

    /// The committed annotation layer.
    pub fn drawing_surface(&self) -> &dyn Surface {
        self.state.drawing.as_ref()
    }

    /// The live preview layer, present only mid-stroke.
    pub fn preview_surface(&self) -> Option<&dyn Surface> {
        self.state.preview.as_deref()
    }

    pub fn menu(&self) -> &ToolMenu {
        &self.menu
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn handle_action(&mut self, action: BrushAction) {
        match action {
            BrushAction::None => {}
            BrushAction::SetColor(color) => self.menu.set_color(&mut self.state, color),
        }
    }
}
