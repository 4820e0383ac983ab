//! Browser-side engine for the meme and poster editors.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing model of both editors: the text element list and its selection,
//! translating raw pointer events into selection and drag updates,
//! hit-testing text, rendering to a 2D canvas, and packing state into share
//! links. The host page is responsible only for wiring DOM events and form
//! controls to the engine and acting on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser engines and the testable [`engine::MemeEditorCore`] / [`engine::PosterEditorCore`] |
//! | [`doc`] | Text elements, the element store, and the poster record |
//! | [`template`] | Meme template catalog and poster color presets |
//! | [`surface`] | Drawing and measuring seam plus the `web-sys` canvas implementation |
//! | [`render`] | Meme and poster scene rendering |
//! | [`gradient`] | CSS background parsing and gradient geometry |
//! | [`hit`] | Text boxes and hit-testing |
//! | [`viewport`] | CSS-to-canvas pixel mapping |
//! | [`input`] | Pointer types and the drag gesture |
//! | [`share`] | Share token encoding and decoding |
//! | [`caption`] | Caption request tickets and (`net` feature) HTTP fetchers |
//! | [`web`] | `wasm-bindgen` editor classes used by the host pages |
//! | [`export`] | PNG download naming |
//! | [`consts`] | Shared numeric and color constants |

pub mod caption;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod gradient;
pub mod hit;
pub mod input;
pub mod render;
pub mod share;
pub mod surface;
pub mod template;
pub mod viewport;
pub mod web;

#[cfg(test)]
mod testing;

/// Route `log` output to the browser console and panics to `console.error`.
///
/// # Errors
///
/// Returns `Err` if a logger is already installed.
#[cfg(feature = "console")]
pub fn init_console_logging(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
}
