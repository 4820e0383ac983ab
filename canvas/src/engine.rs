//! Editor controllers.
//!
//! [`MemeEditorCore`] and [`PosterEditorCore`] hold all editor state and
//! handle every user event. They are free of browser types so they can be
//! tested natively: handlers that need text measurement take any
//! [`TextMeasure`]. [`MemeEngine`] and [`PosterEngine`] bind a core to an
//! `HtmlCanvasElement` and carry out the resulting [`Action`]s.

use captions::{CaptionRequest, PosterText, PosterTextRequest, Tone};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::caption::{CaptionError, CaptionTicket, PosterTicket, RequestGate};
use crate::doc::{DeleteOutcome, ElementDraft, ElementId, ElementPatch, ElementStore, PosterPatch, PosterState};
use crate::export;
use crate::hit;
use crate::input::{Button, Cursor, DragBounds, InputState};
use crate::render;
use crate::share::{self, MEME_SHARE_PATH, POSTER_SHARE_PATH, ShareError};
use crate::surface::{CanvasSurface, Surface, TextMeasure};
use crate::template::{MEME_TEMPLATES, Template, preset_by_name, template_by_index};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The selection moved to another element.
    Selected(ElementId),
    /// An element's top-left corner changed during a drag.
    ElementMoved { id: ElementId, x: f64, y: f64 },
    /// A drag gesture finished.
    DragEnded(ElementId),
    SetCursor(Cursor),
    RenderNeeded,
}

// =============================================================
// Meme editor
// =============================================================

/// Core meme editor state: all logic that doesn't depend on the canvas element.
#[derive(Debug, Clone, Default)]
pub struct MemeEditorCore {
    pub store: ElementStore,
    template_index: usize,
    pub input: InputState,
    pub viewport: Viewport,
    cursor: Cursor,
    /// Keep dragged elements inside the template area. Off by default.
    pub clamp_drag: bool,
    captions: RequestGate,
}

impl MemeEditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Template ---

    #[must_use]
    pub fn template(&self) -> &'static Template {
        template_by_index(self.template_index)
    }

    #[must_use]
    pub fn template_index(&self) -> usize {
        self.template_index
    }

    /// Switch templates. Returns false for an unknown index.
    pub fn select_template(&mut self, index: usize) -> bool {
        if index >= MEME_TEMPLATES.len() {
            return false;
        }
        self.template_index = index;
        self.viewport.canvas_width = f64::from(self.template().width);
        self.viewport.canvas_height = f64::from(self.template().height);
        true
    }

    // --- Element edits ---

    /// Add a default "New Text" element and select it.
    pub fn add_text(&mut self) -> ElementId {
        self.store.create(ElementDraft::default())
    }

    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        self.store.update(id, patch)
    }

    /// Patch the selected element.
    pub fn update_selected(&mut self, patch: ElementPatch) -> bool {
        self.store.update(self.store.selected(), patch)
    }

    pub fn delete(&mut self, id: ElementId) -> DeleteOutcome {
        let outcome = self.store.delete(id);
        if outcome == DeleteOutcome::RejectedLast {
            log::debug!("delete of element {id} rejected: last element");
        }
        outcome
    }

    pub fn select(&mut self, id: ElementId) -> bool {
        self.store.select(id)
    }

    // --- Pointer input ---

    /// Pointer pressed at `css_pt` (CSS pixels relative to the canvas).
    ///
    /// A primary press on an element selects it and starts a drag. Presses
    /// on empty canvas keep the current selection.
    pub fn on_pointer_down(&mut self, measure: &impl TextMeasure, css_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let pt = self.viewport.css_to_canvas(css_pt);
        let Some(id) = hit::hit_test(measure, self.store.elements(), pt) else {
            return Vec::new();
        };
        let Some(el) = self.store.get(id) else {
            return Vec::new();
        };
        self.input = InputState::begin_drag(id, pt, Point::new(el.x, el.y));
        self.store.select(id);
        vec![Action::Selected(id), Action::RenderNeeded]
    }

    /// Pointer moved. Drags the grabbed element, or updates the hover cursor.
    pub fn on_pointer_move(&mut self, measure: &impl TextMeasure, css_pt: Point) -> Vec<Action> {
        let pt = self.viewport.css_to_canvas(css_pt);
        let mut actions = Vec::new();

        if let Some((id, pos)) = self.input.update_drag(pt) {
            let pos = self.clamp_position(measure, id, pos);
            if self.store.update(id, ElementPatch::Position { x: pos.x, y: pos.y }) {
                actions.push(Action::ElementMoved { id, x: pos.x, y: pos.y });
                actions.push(Action::RenderNeeded);
            }
        }

        let cursor = if self.input.is_dragging() || hit::hit_test(measure, self.store.elements(), pt).is_some() {
            Cursor::Move
        } else {
            Cursor::Default
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
        actions
    }

    /// Pointer released or left the canvas. Ends any drag.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.input.end_drag() {
            Some(id) => vec![Action::DragEnded(id)],
            None => Vec::new(),
        }
    }

    fn clamp_position(&self, measure: &impl TextMeasure, id: ElementId, pos: Point) -> Point {
        if !self.clamp_drag {
            return pos;
        }
        let Some(el) = self.store.get(id) else {
            return pos;
        };
        let template = self.template();
        let bounds = DragBounds { width: f64::from(template.width), height: f64::from(template.height) };
        bounds.clamp(pos, hit::text_box(measure, el))
    }

    // --- Captions ---

    /// Start a caption request for the selected element.
    ///
    /// Returns `None` while another request is pending.
    pub fn begin_caption(&mut self, tone: Tone) -> Option<CaptionTicket> {
        let seq = self.captions.try_begin()?;
        let request = CaptionRequest {
            template: self.template().title.to_owned(),
            current_text: self.store.joined_text(),
            tone: tone.as_str().to_owned(),
        };
        Some(CaptionTicket { seq, target: self.store.selected(), request })
    }

    #[must_use]
    pub fn is_caption_pending(&self) -> bool {
        self.captions.is_pending()
    }

    /// Deliver a caption result.
    ///
    /// The text lands only on the ticket's target, and only if that element
    /// still exists and is still selected. Errors keep the current text.
    pub fn finish_caption(&mut self, ticket: &CaptionTicket, result: Result<String, CaptionError>) -> Vec<Action> {
        if !self.captions.finish(ticket.seq) {
            log::warn!("caption: ticket {} is not pending, result dropped", ticket.seq);
            return Vec::new();
        }
        let text = match result {
            Ok(text) => text,
            Err(err) => {
                log::warn!("caption: request failed: {err}");
                return Vec::new();
            }
        };
        if self.store.selected() != ticket.target || self.store.get(ticket.target).is_none() {
            log::info!("caption: element {} no longer selected, result discarded", ticket.target);
            return Vec::new();
        }
        self.store.update(ticket.target, ElementPatch::Text(text));
        vec![Action::RenderNeeded]
    }

    // --- Sharing ---

    /// Load state from a share token. On error the editor is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the decode failure.
    pub fn apply_share_token(&mut self, token: &str) -> Result<(), ShareError> {
        let shared = share::decode_meme(token).inspect_err(|err| log::warn!("share: ignoring token: {err}"))?;
        if self.store.replace_all(shared.elements) {
            self.select_template(shared.template_index);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be serialized.
    pub fn share_token(&self) -> Result<String, ShareError> {
        share::encode_meme(self.template_index, self.store.elements())
    }

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be serialized.
    pub fn share_url(&self, origin: &str) -> Result<String, ShareError> {
        Ok(share::share_url(origin, MEME_SHARE_PATH, &self.share_token()?))
    }

    // --- Render / export ---

    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), JsValue> {
        render::draw_meme(surface, self.template(), self.store.elements(), Some(self.store.selected()))
    }

    #[must_use]
    pub fn export_file_name(&self, timestamp_ms: u64) -> String {
        export::export_file_name(self.template().title, timestamp_ms)
    }
}

// =============================================================
// Poster editor
// =============================================================

/// Core poster editor state.
#[derive(Debug, Clone, Default)]
pub struct PosterEditorCore {
    pub poster: PosterState,
    generation: RequestGate,
}

impl PosterEditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, patch: PosterPatch) {
        self.poster.apply(patch);
    }

    /// Apply a named color preset. Returns false for an unknown name.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        let Some(preset) = preset_by_name(name) else {
            return false;
        };
        self.poster.apply(PosterPatch::Colors { bg: preset.bg.to_owned(), text: preset.text.to_owned() });
        true
    }

    /// Start a text generation request for the current category.
    ///
    /// Returns `None` while another request is pending.
    pub fn begin_generate(&mut self) -> Option<PosterTicket> {
        let seq = self.generation.try_begin()?;
        let request = PosterTextRequest { category: self.poster.category.as_str().to_owned() };
        Some(PosterTicket { seq, request })
    }

    #[must_use]
    pub fn is_generate_pending(&self) -> bool {
        self.generation.is_pending()
    }

    /// Deliver a generation result, overwriting all three sections on success.
    pub fn finish_generate(&mut self, ticket: &PosterTicket, result: Result<PosterText, CaptionError>) -> Vec<Action> {
        if !self.generation.finish(ticket.seq) {
            log::warn!("poster: ticket {} is not pending, result dropped", ticket.seq);
            return Vec::new();
        }
        match result {
            Ok(text) => {
                self.poster.apply_text(text);
                vec![Action::RenderNeeded]
            }
            Err(err) => {
                log::warn!("poster: generation failed: {err}");
                Vec::new()
            }
        }
    }

    /// Load fields from a share token. On error the poster is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the decode failure.
    pub fn apply_share_token(&mut self, token: &str) -> Result<(), ShareError> {
        let shared = share::decode_poster(token).inspect_err(|err| log::warn!("share: ignoring token: {err}"))?;
        shared.apply_to(&mut self.poster);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be serialized.
    pub fn share_token(&self) -> Result<String, ShareError> {
        share::encode_poster(&self.poster)
    }

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be serialized.
    pub fn share_url(&self, origin: &str) -> Result<String, ShareError> {
        Ok(share::share_url(origin, POSTER_SHARE_PATH, &self.share_token()?))
    }

    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), JsValue> {
        render::draw_poster(surface, &self.poster)
    }

    #[must_use]
    pub fn export_file_name(timestamp_ms: u64) -> String {
        export::poster_file_name(timestamp_ms)
    }
}

// =============================================================
// Browser engines
// =============================================================

/// Meme editor bound to a canvas element.
pub struct MemeEngine {
    surface: CanvasSurface,
    pub core: MemeEditorCore,
}

impl MemeEngine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let mut core = MemeEditorCore::new();
        core.select_template(0);
        Ok(Self { surface: CanvasSurface::new(canvas)?, core })
    }

    /// Redraw when a background image finishes loading.
    pub fn set_image_listener(&mut self, listener: js_sys::Function) {
        self.surface.set_image_listener(listener);
    }

    /// Re-read the canvas's displayed size after a layout change.
    pub fn sync_viewport(&mut self) {
        let canvas = self.surface.canvas();
        self.core.viewport.css_width = f64::from(canvas.client_width());
        self.core.viewport.css_height = f64::from(canvas.client_height());
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if applying an action to the canvas fails.
    pub fn on_pointer_down(&mut self, css_pt: Point, button: Button) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_down(&self.surface, css_pt, button);
        self.perform(&actions)?;
        Ok(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if applying an action to the canvas fails.
    pub fn on_pointer_move(&mut self, css_pt: Point) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_move(&self.surface, css_pt);
        self.perform(&actions)?;
        Ok(actions)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    /// Carry out handler actions: cursor changes and at most one redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a cursor update or the redraw fails.
    pub fn perform(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        let mut redraw = false;
        for action in actions {
            match action {
                Action::SetCursor(cursor) => set_cursor(self.surface.canvas(), *cursor)?,
                Action::RenderNeeded => redraw = true,
                Action::Selected(_) | Action::ElementMoved { .. } | Action::DragEnded(_) => {}
            }
        }
        if redraw {
            self.render()?;
        }
        Ok(())
    }

    // --- Render / export ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any canvas call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.render(&mut self.surface)
    }

    /// Render without the selection highlight and offer the PNG as a download.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering or the download fails.
    pub fn export_png(&mut self) -> Result<String, JsValue> {
        let core = &self.core;
        render::draw_meme(&mut self.surface, core.template(), core.store.elements(), None)?;
        let name = core.export_file_name(now_ms());
        let downloaded = download_png(self.surface.canvas(), &name);
        self.render()?;
        downloaded?;
        Ok(name)
    }
}

/// Poster editor bound to a canvas element.
pub struct PosterEngine {
    surface: CanvasSurface,
    pub core: PosterEditorCore,
}

impl PosterEngine {
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        Ok(Self { surface: CanvasSurface::new(canvas)?, core: PosterEditorCore::new() })
    }

    /// # Errors
    ///
    /// Returns `Err` if any canvas call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.render(&mut self.surface)
    }

    /// # Errors
    ///
    /// Returns `Err` if the download fails.
    pub fn export_png(&mut self) -> Result<String, JsValue> {
        let name = PosterEditorCore::export_file_name(now_ms());
        download_png(self.surface.canvas(), &name)?;
        Ok(name)
    }
}

// =============================================================
// DOM helpers
// =============================================================

fn set_cursor(canvas: &HtmlCanvasElement, cursor: Cursor) -> Result<(), JsValue> {
    canvas.style().set_property("cursor", cursor.css())
}

fn download_png(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), JsValue> {
    let data_url = canvas.to_data_url_with_type("image/png")?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&data_url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
