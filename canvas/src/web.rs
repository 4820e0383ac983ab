//! JavaScript bindings used by the editor pages.
//!
//! [`MemeEditor`] and [`PosterEditor`] wrap the browser engines behind
//! `Rc<RefCell<..>>` so image-load callbacks and in-flight caption requests
//! can reach the engine after the call that started them has returned. Every
//! state-changing method redraws before returning.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::{Rc, Weak};

use captions::PosterCategory;
#[cfg(feature = "net")]
use captions::Tone;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::doc::{DeleteOutcome, ElementPatch, PosterPatch};
use crate::engine::{Action, MemeEngine, PosterEngine};
use crate::input::Button;
use crate::viewport::Point;

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Redraw callback handed to the image cache. Holds only a weak reference so
/// the engine can be dropped with the page.
fn redraw_listener<E: 'static>(
    engine: Weak<RefCell<E>>,
    render: fn(&mut E) -> Result<(), JsValue>,
) -> js_sys::Function {
    let cb = Closure::wrap(Box::new(move || {
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let Ok(mut engine) = engine.try_borrow_mut() else {
            return;
        };
        if let Err(err) = render(&mut engine) {
            log::warn!("redraw after image load failed: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    cb.into_js_value().unchecked_into()
}

#[cfg(feature = "net")]
fn notify(callback: Option<&js_sys::Function>) {
    if let Some(callback) = callback {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::warn!("completion callback threw: {err:?}");
        }
    }
}

// =============================================================
// Meme editor
// =============================================================

#[wasm_bindgen]
pub struct MemeEditor {
    engine: Rc<RefCell<MemeEngine>>,
}

#[wasm_bindgen]
impl MemeEditor {
    /// Bind to `canvas`, optionally load a share token, and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or the first draw fails.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, share_token: Option<String>) -> Result<MemeEditor, JsValue> {
        let engine = Rc::new(RefCell::new(MemeEngine::new(canvas)?));
        {
            let mut e = engine.borrow_mut();
            e.set_image_listener(redraw_listener(Rc::downgrade(&engine), MemeEngine::render));
            if let Some(token) = share_token.filter(|t| !t.is_empty()) {
                if e.core.apply_share_token(&token).is_err() {
                    log::info!("share: starting from defaults");
                }
            }
            e.sync_viewport();
            e.render()?;
        }
        Ok(Self { engine })
    }

    // --- Template ---

    #[wasm_bindgen(js_name = templateIndex)]
    #[must_use]
    pub fn template_index(&self) -> usize {
        self.engine.borrow().core.template_index()
    }

    #[wasm_bindgen(js_name = templateTitle)]
    #[must_use]
    pub fn template_title(&self) -> String {
        self.engine.borrow().core.template().title.to_owned()
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = selectTemplate)]
    pub fn select_template(&self, index: usize) -> Result<bool, JsValue> {
        let mut e = self.engine.borrow_mut();
        if !e.core.select_template(index) {
            return Ok(false);
        }
        e.sync_viewport();
        e.render()?;
        Ok(true)
    }

    /// Re-read the canvas's displayed size, e.g. after a window resize.
    #[wasm_bindgen(js_name = syncViewport)]
    pub fn sync_viewport(&self) {
        self.engine.borrow_mut().sync_viewport();
    }

    // --- Pointer input ---

    /// Returns the newly selected element id, if the press selected one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&self, x: f64, y: f64, button: i16) -> Result<Option<u32>, JsValue> {
        let Some(button) = Button::from_dom(button) else {
            return Ok(None);
        };
        let actions = self.engine.borrow_mut().on_pointer_down(Point::new(x, y), button)?;
        Ok(actions.iter().find_map(|a| match a {
            Action::Selected(id) => Some(*id),
            _ => None,
        }))
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor update or redraw fails.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.engine.borrow_mut().on_pointer_move(Point::new(x, y))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self) {
        self.engine.borrow_mut().on_pointer_up();
    }

    // --- Element edits ---

    /// Selected element as JSON (`{id, text, x, y, fontSize, color, font, bold}`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    #[wasm_bindgen(js_name = selectedElement)]
    pub fn selected_element(&self) -> Result<Option<String>, JsValue> {
        let e = self.engine.borrow();
        match e.core.store.selected_element() {
            Some(el) => serde_json::to_string(el).map(Some).map_err(js_error),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = addText)]
    pub fn add_text(&self) -> Result<u32, JsValue> {
        let mut e = self.engine.borrow_mut();
        let id = e.core.add_text();
        e.render()?;
        Ok(id)
    }

    /// Delete the selected element. The last element cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&self) -> Result<bool, JsValue> {
        let mut e = self.engine.borrow_mut();
        let id = e.core.store.selected();
        if e.core.delete(id) == DeleteOutcome::RejectedLast {
            return Ok(false);
        }
        e.render()?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: String) -> Result<(), JsValue> {
        self.patch(ElementPatch::Text(text))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&self, size: u32) -> Result<(), JsValue> {
        self.patch(ElementPatch::FontSize(size))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, color: String) -> Result<(), JsValue> {
        self.patch(ElementPatch::Color(color))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setFont)]
    pub fn set_font(&self, font: String) -> Result<(), JsValue> {
        self.patch(ElementPatch::Font(font))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setBold)]
    pub fn set_bold(&self, bold: bool) -> Result<(), JsValue> {
        self.patch(ElementPatch::Bold(bold))
    }

    fn patch(&self, patch: ElementPatch) -> Result<(), JsValue> {
        let mut e = self.engine.borrow_mut();
        if e.core.update_selected(patch) {
            e.render()?;
        }
        Ok(())
    }

    // --- Captions ---

    /// Request a caption for the selected element from `{base}/api/generate-caption`.
    ///
    /// Returns false while another request is in flight. `on_done` runs once
    /// the request settles, successful or not.
    #[cfg(feature = "net")]
    #[wasm_bindgen(js_name = generateCaption)]
    pub fn generate_caption(&self, base: String, tone: &str, on_done: Option<js_sys::Function>) -> bool {
        let Some(ticket) = self.engine.borrow_mut().core.begin_caption(Tone::parse_or_default(tone)) else {
            return false;
        };
        let engine = Rc::downgrade(&self.engine);
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::caption::fetch_caption(&base, &ticket.request).await;
            if let Some(engine) = engine.upgrade() {
                let mut e = engine.borrow_mut();
                let actions = e.core.finish_caption(&ticket, result);
                if let Err(err) = e.perform(&actions) {
                    log::warn!("caption: redraw failed: {err:?}");
                }
            }
            notify(on_done.as_ref());
        });
        true
    }

    #[cfg(feature = "net")]
    #[wasm_bindgen(js_name = isCaptionPending)]
    #[must_use]
    pub fn is_caption_pending(&self) -> bool {
        self.engine.borrow().core.is_caption_pending()
    }

    // --- Share / export ---

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be encoded.
    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self, origin: &str) -> Result<String, JsValue> {
        self.engine.borrow().core.share_url(origin).map_err(js_error)
    }

    /// Download the meme as a PNG and return the file name.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering or the download fails.
    #[wasm_bindgen(js_name = exportPng)]
    pub fn export_png(&self) -> Result<String, JsValue> {
        self.engine.borrow_mut().export_png()
    }
}

// =============================================================
// Poster editor
// =============================================================

#[wasm_bindgen]
pub struct PosterEditor {
    engine: Rc<RefCell<PosterEngine>>,
}

#[wasm_bindgen]
impl PosterEditor {
    /// Bind to `canvas`, optionally load a share token, and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or the first draw fails.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, share_token: Option<String>) -> Result<PosterEditor, JsValue> {
        let mut engine = PosterEngine::new(canvas)?;
        if let Some(token) = share_token.filter(|t| !t.is_empty()) {
            if engine.core.apply_share_token(&token).is_err() {
                log::info!("share: starting from defaults");
            }
        }
        engine.render()?;
        Ok(Self { engine: Rc::new(RefCell::new(engine)) })
    }

    /// Current poster fields as JSON (`{heading, subheading, body, bgColor, textColor, category}`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.borrow().core.poster).map_err(js_error)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setHeading)]
    pub fn set_heading(&self, text: String) -> Result<(), JsValue> {
        self.patch(PosterPatch::Heading(text))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setSubheading)]
    pub fn set_subheading(&self, text: String) -> Result<(), JsValue> {
        self.patch(PosterPatch::Subheading(text))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setBody)]
    pub fn set_body(&self, text: String) -> Result<(), JsValue> {
        self.patch(PosterPatch::Body(text))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setBgColor)]
    pub fn set_bg_color(&self, color: String) -> Result<(), JsValue> {
        self.patch(PosterPatch::BgColor(color))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setTextColor)]
    pub fn set_text_color(&self, color: String) -> Result<(), JsValue> {
        self.patch(PosterPatch::TextColor(color))
    }

    /// Unknown keys select `general`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setCategory)]
    pub fn set_category(&self, key: &str) -> Result<(), JsValue> {
        self.patch(PosterPatch::Category(PosterCategory::parse_or_default(key)))
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&self, name: &str) -> Result<bool, JsValue> {
        let mut e = self.engine.borrow_mut();
        if !e.core.apply_preset(name) {
            return Ok(false);
        }
        e.render()?;
        Ok(true)
    }

    fn patch(&self, patch: PosterPatch) -> Result<(), JsValue> {
        let mut e = self.engine.borrow_mut();
        e.core.apply(patch);
        e.render()
    }

    /// Request heading, subheading and body from `{base}/api/generate-poster-full`.
    ///
    /// Returns false while another request is in flight.
    #[cfg(feature = "net")]
    pub fn generate(&self, base: String, on_done: Option<js_sys::Function>) -> bool {
        let Some(ticket) = self.engine.borrow_mut().core.begin_generate() else {
            return false;
        };
        let engine = Rc::downgrade(&self.engine);
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::caption::fetch_poster_text(&base, &ticket.request).await;
            if let Some(engine) = engine.upgrade() {
                let mut e = engine.borrow_mut();
                let actions = e.core.finish_generate(&ticket, result);
                if actions.contains(&Action::RenderNeeded) {
                    if let Err(err) = e.render() {
                        log::warn!("poster: redraw failed: {err:?}");
                    }
                }
            }
            notify(on_done.as_ref());
        });
        true
    }

    /// # Errors
    ///
    /// Returns `Err` if the state cannot be encoded.
    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self, origin: &str) -> Result<String, JsValue> {
        self.engine.borrow().core.share_url(origin).map_err(js_error)
    }

    /// # Errors
    ///
    /// Returns `Err` if the download fails.
    #[wasm_bindgen(js_name = exportPng)]
    pub fn export_png(&self) -> Result<String, JsValue> {
        self.engine.borrow_mut().export_png()
    }
}

/// Install the console logger and panic hook.
#[cfg(feature = "console")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    if let Err(err) = crate::init_console_logging(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }
}
