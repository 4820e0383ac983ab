#![allow(clippy::float_cmp)]

use captions::PosterCategory;

use super::*;
use crate::testing::{HalfEm, Op, RecordingSurface};

// =============================================================
// Helpers
// =============================================================

fn core() -> MemeEditorCore {
    let mut core = MemeEditorCore::new();
    core.select_template(0);
    core
}

fn press(core: &mut MemeEditorCore, x: f64, y: f64) -> Vec<Action> {
    core.on_pointer_down(&HalfEm, Point::new(x, y), Button::Primary)
}

fn drag_to(core: &mut MemeEditorCore, x: f64, y: f64) -> Vec<Action> {
    core.on_pointer_move(&HalfEm, Point::new(x, y))
}

// =============================================================
// Element edits
// =============================================================

#[test]
fn new_core_has_default_elements() {
    let core = core();
    assert_eq!(core.store.len(), 2);
    assert_eq!(core.store.selected(), 1);
    assert_eq!(core.template().title, "Drake Meme");
}

#[test]
fn add_text_selects_new_element() {
    let mut core = core();
    let id = core.add_text();
    assert_eq!(id, 3);
    assert_eq!(core.store.selected(), 3);
    assert_eq!(core.store.get(3).map(|e| e.text.as_str()), Some("New Text"));
}

#[test]
fn update_selected_patches_selection() {
    let mut core = core();
    core.select(2);
    assert!(core.update_selected(ElementPatch::Color("#FF0000".into())));
    assert_eq!(core.store.get(2).unwrap().color, "#FF0000");
    assert_eq!(core.store.get(1).unwrap().color, "#FFFFFF");
}

#[test]
fn delete_last_element_rejected() {
    let mut core = core();
    assert_eq!(core.delete(1), DeleteOutcome::Deleted);
    assert_eq!(core.delete(2), DeleteOutcome::RejectedLast);
    assert_eq!(core.store.len(), 1);
}

#[test]
fn select_template_rejects_out_of_range() {
    let mut core = core();
    assert!(core.select_template(1));
    assert_eq!(core.template().title, "Distracted Boyfriend");
    assert!(!core.select_template(99));
    assert_eq!(core.template_index(), 1);
}

// =============================================================
// Pointer: selection and drag
// =============================================================

#[test]
fn press_on_element_selects_and_starts_drag() {
    let mut core = core();
    let actions = press(&mut core, 60.0, 510.0);
    assert_eq!(actions, vec![Action::Selected(2), Action::RenderNeeded]);
    assert_eq!(core.store.selected(), 2);
    assert!(core.input.is_dragging());
}

#[test]
fn press_on_empty_canvas_keeps_selection() {
    let mut core = core();
    assert!(press(&mut core, 500.0, 300.0).is_empty());
    assert_eq!(core.store.selected(), 1);
    assert!(!core.input.is_dragging());
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = core();
    let actions = core.on_pointer_down(&HalfEm, Point::new(60.0, 60.0), Button::Secondary);
    assert!(actions.is_empty());
    assert!(!core.input.is_dragging());
}

#[test]
fn drag_moves_element_by_pointer_delta() {
    let mut core = core();
    press(&mut core, 60.0, 60.0);
    let actions = drag_to(&mut core, 160.0, 260.0);
    assert!(actions.contains(&Action::ElementMoved { id: 1, x: 150.0, y: 250.0 }));
    assert!(actions.contains(&Action::RenderNeeded));
    let el = core.store.get(1).unwrap();
    assert_eq!((el.x, el.y), (150.0, 250.0));
}

#[test]
fn drag_goes_off_canvas_when_unclamped() {
    let mut core = core();
    press(&mut core, 60.0, 60.0);
    drag_to(&mut core, 0.0, 0.0);
    let el = core.store.get(1).unwrap();
    assert_eq!((el.x, el.y), (-10.0, -10.0));
}

#[test]
fn drag_is_clamped_when_enabled() {
    let mut core = core();
    core.clamp_drag = true;
    press(&mut core, 60.0, 60.0);
    drag_to(&mut core, 0.0, 900.0);
    let el = core.store.get(1).unwrap();
    assert_eq!(el.x, 0.0);
    assert_eq!(el.y, 600.0 - 48.0);
}

#[test]
fn pointer_up_ends_drag() {
    let mut core = core();
    press(&mut core, 60.0, 60.0);
    assert_eq!(core.on_pointer_up(), vec![Action::DragEnded(1)]);
    assert!(!core.input.is_dragging());
    assert!(core.on_pointer_up().is_empty());

    // Moves after release don't drag.
    drag_to(&mut core, 300.0, 300.0);
    assert_eq!(core.store.get(1).unwrap().x, 50.0);
}

#[test]
fn drag_respects_scaled_viewport() {
    let mut core = core();
    core.viewport = Viewport { css_width: 300.0, css_height: 300.0, canvas_width: 600.0, canvas_height: 600.0 };
    // CSS (30, 30) is canvas (60, 60), inside "Top Text".
    assert_eq!(press(&mut core, 30.0, 30.0)[0], Action::Selected(1));
    drag_to(&mut core, 80.0, 130.0);
    let el = core.store.get(1).unwrap();
    assert_eq!((el.x, el.y), (150.0, 250.0));
}

// =============================================================
// Pointer: cursor affordance
// =============================================================

#[test]
fn hover_over_element_sets_move_cursor_once() {
    let mut core = core();
    let actions = drag_to(&mut core, 60.0, 60.0);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Move)]);
    assert!(drag_to(&mut core, 61.0, 61.0).is_empty());
}

#[test]
fn leaving_element_restores_default_cursor() {
    let mut core = core();
    drag_to(&mut core, 60.0, 60.0);
    assert_eq!(drag_to(&mut core, 500.0, 300.0), vec![Action::SetCursor(Cursor::Default)]);
}

#[test]
fn cursor_stays_move_while_dragging() {
    let mut core = core();
    press(&mut core, 60.0, 60.0);
    let actions = drag_to(&mut core, 60.0, 60.0);
    assert!(actions.contains(&Action::SetCursor(Cursor::Move)));
    // Element follows the pointer, so even a fast move keeps the move cursor.
    let actions = drag_to(&mut core, 400.0, 400.0);
    assert!(!actions.contains(&Action::SetCursor(Cursor::Default)));
}

// =============================================================
// Captions
// =============================================================

#[test]
fn begin_caption_builds_request() {
    let mut core = core();
    let ticket = core.begin_caption(Tone::Sarcastic).unwrap();
    assert_eq!(ticket.target, 1);
    assert_eq!(ticket.request.template, "Drake Meme");
    assert_eq!(ticket.request.current_text, "Top Text | Bottom Text");
    assert_eq!(ticket.request.tone, "sarcastic");
    assert!(core.is_caption_pending());
}

#[test]
fn second_caption_request_blocked_while_pending() {
    let mut core = core();
    let _ticket = core.begin_caption(Tone::Funny).unwrap();
    assert!(core.begin_caption(Tone::Funny).is_none());
}

#[test]
fn editor_stays_editable_while_caption_pending() {
    let mut core = core();
    let _ticket = core.begin_caption(Tone::Funny).unwrap();
    assert!(core.update(2, ElementPatch::Text("still editable".into())));
    assert_eq!(core.add_text(), 3);
}

#[test]
fn caption_applied_to_target() {
    let mut core = core();
    let ticket = core.begin_caption(Tone::Formal).unwrap();
    let actions = core.finish_caption(&ticket, Ok("Objective one | Objective two".into()));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.store.get(1).unwrap().text, "Objective one | Objective two");
    assert!(!core.is_caption_pending());
}

#[test]
fn caption_discarded_when_selection_changed() {
    let mut core = core();
    let ticket = core.begin_caption(Tone::Funny).unwrap();
    core.select(2);
    assert!(core.finish_caption(&ticket, Ok("late".into())).is_empty());
    assert_eq!(core.store.get(1).unwrap().text, "Top Text");
    assert_eq!(core.store.get(2).unwrap().text, "Bottom Text");
    assert!(!core.is_caption_pending());
}

#[test]
fn caption_discarded_when_target_deleted() {
    let mut core = core();
    let ticket = core.begin_caption(Tone::Funny).unwrap();
    core.delete(1);
    assert!(core.finish_caption(&ticket, Ok("late".into())).is_empty());
    assert_eq!(core.store.get(2).unwrap().text, "Bottom Text");
}

#[test]
fn caption_error_keeps_text_and_clears_pending() {
    let mut core = core();
    let ticket = core.begin_caption(Tone::Funny).unwrap();
    let err = CaptionError::Status { status: 500, message: "Failed to generate caption".into() };
    assert!(core.finish_caption(&ticket, Err(err)).is_empty());
    assert_eq!(core.store.get(1).unwrap().text, "Top Text");
    assert!(!core.is_caption_pending());
    assert!(core.begin_caption(Tone::Funny).is_some());
}

#[test]
fn caption_with_stale_ticket_is_dropped() {
    let mut core = core();
    let first = core.begin_caption(Tone::Funny).unwrap();
    core.finish_caption(&first, Err(CaptionError::Transport("offline".into())));
    let second = core.begin_caption(Tone::Funny).unwrap();
    assert!(core.finish_caption(&first, Ok("stale".into())).is_empty());
    assert!(core.is_caption_pending());
    assert_eq!(core.finish_caption(&second, Ok("fresh".into())), vec![Action::RenderNeeded]);
    assert_eq!(core.store.get(1).unwrap().text, "fresh");
}

// =============================================================
// Sharing
// =============================================================

#[test]
fn share_token_round_trips_through_another_editor() {
    let mut source = core();
    source.select_template(3);
    source.add_text();
    source.update(3, ElementPatch::Position { x: 12.0, y: 34.0 });
    let token = source.share_token().unwrap();

    let mut target = core();
    target.apply_share_token(&token).unwrap();
    assert_eq!(target.template_index(), 3);
    assert_eq!(target.store.elements(), source.store.elements());
    assert_eq!(target.store.selected(), 1);
}

#[test]
fn bad_share_token_leaves_state() {
    let mut core = core();
    core.update(1, ElementPatch::Text("mine".into()));
    let before = core.store.clone();
    assert!(core.apply_share_token("garbage!").is_err());
    assert_eq!(core.store, before);
    assert_eq!(core.template_index(), 0);
}

#[test]
fn shared_max_id_is_refused_and_new_ids_stay_unique() {
    use base64::Engine as _;

    let json = r##"{"v":1,"t":0,"e":[{"id":4294967295,"text":"x","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    let token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);

    let mut core = core();
    assert!(core.apply_share_token(&token).is_err());
    let id = core.add_text();
    let ids: Vec<ElementId> = core.store.elements().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, id]);
    assert_eq!(id, 3);
}

#[test]
fn share_url_uses_create_path() {
    let core = core();
    let url = core.share_url("https://memes.test").unwrap();
    assert!(url.starts_with("https://memes.test/create?share="));
}

// =============================================================
// Render / export
// =============================================================

#[test]
fn render_highlights_selection() {
    let core = core();
    let mut s = RecordingSurface::with_images();
    core.render(&mut s).unwrap();
    assert!(matches!(s.ops.last(), Some(Op::StrokeRect { x, y, .. }) if *x == 45.0 && *y == 45.0));
}

#[test]
fn export_file_name_uses_template_title() {
    let mut core = core();
    core.select_template(1);
    assert_eq!(core.export_file_name(7), "Distracted-Boyfriend-7.png");
}

// =============================================================
// Poster editor
// =============================================================

#[test]
fn poster_preset_sets_both_colors() {
    let mut core = PosterEditorCore::new();
    assert!(core.apply_preset("Navy Blue"));
    assert_eq!(core.poster.bg_color, "#1a3a52");
    assert_eq!(core.poster.text_color, "#FFFFFF");
    assert!(!core.apply_preset("Chartreuse"));
    assert_eq!(core.poster.bg_color, "#1a3a52");
}

#[test]
fn poster_generate_uses_category() {
    let mut core = PosterEditorCore::new();
    core.apply(PosterPatch::Category(PosterCategory::Workshop));
    let ticket = core.begin_generate().unwrap();
    assert_eq!(ticket.request.category, "workshop");
    assert!(core.begin_generate().is_none());
}

#[test]
fn poster_generate_overwrites_all_sections() {
    let mut core = PosterEditorCore::new();
    let ticket = core.begin_generate().unwrap();
    let text = PosterText { heading: "H".into(), subheading: "S".into(), body: "B".into() };
    assert_eq!(core.finish_generate(&ticket, Ok(text)), vec![Action::RenderNeeded]);
    assert_eq!((core.poster.heading.as_str(), core.poster.subheading.as_str(), core.poster.body.as_str()), ("H", "S", "B"));
    assert!(!core.is_generate_pending());
}

#[test]
fn poster_generate_error_keeps_text() {
    let mut core = PosterEditorCore::new();
    let ticket = core.begin_generate().unwrap();
    assert!(core.finish_generate(&ticket, Err(CaptionError::Decode("bad".into()))).is_empty());
    assert_eq!(core.poster.heading, "Your Heading Here");
    assert!(!core.is_generate_pending());
}

#[test]
fn poster_share_round_trip() {
    let mut source = PosterEditorCore::new();
    source.apply(PosterPatch::Heading("SALE".into()));
    source.apply_preset("Gradient Gold");
    let token = source.share_token().unwrap();

    let mut target = PosterEditorCore::new();
    target.apply_share_token(&token).unwrap();
    assert_eq!(target.poster.heading, "SALE");
    assert_eq!(target.poster.bg_color, "linear-gradient(135deg, #FFD700, #FFA500)");
    assert_eq!(target.poster.text_color, "#000000");
}

#[test]
fn poster_share_url_uses_poster_path() {
    let core = PosterEditorCore::new();
    assert!(core.share_url("http://localhost:3000").unwrap().starts_with("http://localhost:3000/poster?share="));
}

#[test]
fn poster_render_draws_three_lines() {
    let core = PosterEditorCore::new();
    let mut s = RecordingSurface::default();
    core.render(&mut s).unwrap();
    assert_eq!(s.fill_texts().len(), 3);
}

#[test]
fn poster_export_file_name() {
    assert_eq!(PosterEditorCore::export_file_name(5), "poster-5.png");
}
