use super::*;
use crate::host::{AutoConfirm, PixmapViewport};

const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

fn session() -> SketchSession<PixmapViewport, AutoConfirm> {
    SketchSession::new(
        PixmapViewport::new(64, 64),
        AutoConfirm(true),
        &Config::default(),
        &SessionIds::new(),
    )
}

fn press(session: &mut SketchSession<PixmapViewport, AutoConfirm>, key: char) {
    session.key_press(&KeyEvent::new(key));
}

#[test]
fn ids_come_from_the_callers_generator() {
    let ids = SessionIds::new();
    let config = Config::default();
    let a = SketchSession::new(PixmapViewport::new(8, 8), AutoConfirm(true), &config, &ids);
    let b = SketchSession::new(PixmapViewport::new(8, 8), AutoConfirm(true), &config, &ids);
    assert_eq!(a.id(), 1);
    assert_eq!(b.id(), 2);

    // A fresh generator is an independent sequence.
    let other = SessionIds::new();
    assert_eq!(other.next(), 1);
}

#[test]
fn initial_tool_is_the_first_persistent_button() {
    let session = session();
    let selected = session.menu().selected_button().unwrap();
    assert_eq!(selected.name, "Pen1");
    assert_eq!(session.options().width, 1.0);
    assert_eq!(session.options().color.to_string(), "rgb(0,0,0)");
}

#[test]
fn pen_click_commits_a_dot() {
    let mut session = session();
    let event = PointerEvent::new(10, 10);
    session.pointer_down(&event);
    session.pointer_up(&event);

    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert_eq!(session.drawing_surface().pixel(10, 10), OPAQUE_BLACK);
}

#[test]
fn preview_exists_only_during_a_stroke() {
    let mut session = session();
    assert!(session.preview_surface().is_none());

    session.pointer_down(&PointerEvent::new(5, 5));
    assert!(session.preview_surface().is_some());
    assert_eq!(session.stroke_state(), StrokeState::Drawing);

    session.pointer_up(&PointerEvent::new(5, 5));
    assert!(session.preview_surface().is_none());
}

#[test]
fn rect_previews_then_commits() {
    let mut session = session();
    let rect_index = session.menu().button_index("Rect").unwrap();
    session.select_button(rect_index);

    session.pointer_down(&PointerEvent::new(0, 0));
    session.pointer_move(&PointerEvent::new(5, 5));
    let preview = session.preview_surface().unwrap();
    assert_eq!(preview.pixel(2, 2), OPAQUE_BLACK);
    assert_eq!(session.drawing_surface().pixel(2, 2)[3], 0);

    session.pointer_move(&PointerEvent::new(10, 10));
    session.pointer_up(&PointerEvent::new(10, 10));
    assert_eq!(session.drawing_surface().pixel(7, 7), OPAQUE_BLACK);
    assert!(session.preview_surface().is_none());
}

#[test]
fn second_pointer_down_mid_stroke_is_ignored() {
    let mut session = session();
    let rect_index = session.menu().button_index("Rect").unwrap();
    session.select_button(rect_index);

    session.pointer_down(&PointerEvent::new(0, 0));
    // The anchor must stay at the original position.
    session.pointer_down(&PointerEvent::new(20, 20));
    session.pointer_up(&PointerEvent::new(10, 10));

    assert_eq!(session.drawing_surface().pixel(1, 1), OPAQUE_BLACK);
}

#[test]
fn pointer_up_without_a_stroke_is_ignored() {
    let mut session = session();
    session.pointer_up(&PointerEvent::new(10, 10));
    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert_eq!(session.drawing_surface().pixel(10, 10)[3], 0);
}

#[test]
fn scroll_offset_shifts_strokes_into_document_coordinates() {
    let mut session = session();
    session.viewport_mut().set_scroll(20, 8);

    let event = PointerEvent::new(10, 10);
    session.pointer_down(&event);
    session.pointer_up(&event);

    assert_eq!(session.drawing_surface().pixel(30, 18), OPAQUE_BLACK);
    assert_eq!(session.drawing_surface().pixel(10, 10)[3], 0);
}

#[test]
fn menu_hides_during_stroke_and_suspends_shortcuts() {
    let mut session = session();
    assert!(session.menu().is_shown());

    session.pointer_down(&PointerEvent::new(5, 5));
    assert!(!session.menu().is_shown());

    // Shortcuts are dead while the menu is hidden.
    press(&mut session, 'e');
    assert_eq!(session.menu().selected_button().unwrap().name, "Pen1");

    session.pointer_up(&PointerEvent::new(5, 5));
    assert!(session.menu().is_shown());

    press(&mut session, 'e');
    assert_eq!(session.menu().selected_button().unwrap().name, "Eraser");
}

#[test]
fn palette_click_sets_color_and_pen1_resets_it() {
    let mut session = session();
    session.palette_click(3);
    assert_eq!(session.options().color.to_string(), "rgb(217,51,63)");
    assert_eq!(session.menu().indicator().to_string(), "rgb(217,51,63)");

    press(&mut session, '1');
    assert_eq!(session.options().color.to_string(), "rgb(0,0,0)");
    assert_eq!(session.menu().indicator().to_string(), "rgb(0,0,0)");
}

#[test]
fn alpha_shortcut_toggles_translucency() {
    let mut session = session();
    assert_eq!(session.options().alpha, None);

    press(&mut session, 'a');
    assert_eq!(session.options().alpha, Some(0.5));

    press(&mut session, 'a');
    assert_eq!(session.options().alpha, None);
}

#[test]
fn copy_color_samples_the_document_snapshot() {
    let mut background = crate::draw::Pixmap::new(32, 32);
    background.fill_all(crate::draw::Color::rgb(40, 80, 120));
    let viewport = PixmapViewport::with_background(background);
    let mut session = SketchSession::new(
        viewport,
        AutoConfirm(true),
        &Config::default(),
        &SessionIds::new(),
    );

    session.pointer_move(&PointerEvent::new(16, 16));
    session.copy_color();

    assert_eq!(session.options().color.to_string(), "rgb(40,80,120)");
}

#[test]
fn clear_honors_the_confirmation_answer() {
    let mut declined = SketchSession::new(
        PixmapViewport::new(32, 32),
        AutoConfirm(false),
        &Config::default(),
        &SessionIds::new(),
    );
    let event = PointerEvent::new(10, 10);
    declined.pointer_down(&event);
    declined.pointer_up(&event);
    declined.clear();
    assert_eq!(declined.drawing_surface().pixel(10, 10), OPAQUE_BLACK);

    let mut confirmed = session();
    confirmed.pointer_down(&event);
    confirmed.pointer_up(&event);
    confirmed.clear();
    assert_eq!(confirmed.drawing_surface().pixel(10, 10)[3], 0);
}

#[test]
fn close_shortcut_hides_the_overlay_and_mutes_input() {
    let mut session = session();
    press(&mut session, 'x');
    assert!(!session.is_visible());

    session.pointer_down(&PointerEvent::new(5, 5));
    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert_eq!(session.drawing_surface().pixel(5, 5)[3], 0);

    session.show();
    assert!(session.is_visible());
    assert!(session.menu().is_shown());
}

#[test]
fn close_shortcut_mid_stroke_abandons_the_stroke() {
    let mut config = Config::default();
    config.overlay.hide_menu_while_drawing = false;
    let mut session = SketchSession::new(
        PixmapViewport::new(64, 64),
        AutoConfirm(true),
        &config,
        &SessionIds::new(),
    );

    session.pointer_down(&PointerEvent::new(5, 5));
    // The menu stays up mid-stroke, so the close shortcut can fire.
    assert!(session.menu().is_shown());
    press(&mut session, 'x');

    assert!(!session.is_visible());
    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert!(session.preview_surface().is_none());
    assert_eq!(session.drawing_surface().pixel(5, 5)[3], 0);
}

#[test]
fn hide_mid_stroke_abandons_the_preview() {
    let mut session = session();
    session.pointer_down(&PointerEvent::new(5, 5));
    session.hide();

    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert!(session.preview_surface().is_none());
    // The abandoned stroke never reached the drawing layer.
    assert_eq!(session.drawing_surface().pixel(5, 5)[3], 0);
}
