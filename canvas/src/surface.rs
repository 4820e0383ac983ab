//! Drawing surface abstraction and its browser implementation.
//!
//! The renderer and hit-tester never talk to a 2D context directly. They go
//! through [`Surface`] and [`TextMeasure`], which keeps drawing and measuring
//! on one code path and lets tests substitute a recording surface.
//!
//! [`CanvasSurface`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Every call receives its full style
//! (font, colors, widths), so no context state leaks between draws and a
//! render pass is repeatable.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::gradient::LinearGradient;

/// Weight, size and family of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec<'a> {
    pub bold: bool,
    pub size_px: u32,
    pub family: &'a str,
}

impl FontSpec<'_> {
    /// CSS font shorthand, e.g. `"bold 48px Impact"`.
    #[must_use]
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px {}", self.size_px, self.family)
    }
}

/// Where `(x, y)` sits relative to the drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// `x` is the left edge, `y` the top of the em box.
    TopLeft,
    /// `x` is the horizontal center, `y` the alphabetic baseline.
    CenterBaseline,
}

/// Text measurement primitive shared by the renderer and the hit-tester.
pub trait TextMeasure {
    /// Advance width of `text` set in `font`, in canvas pixels.
    fn text_width(&self, font: &FontSpec<'_>, text: &str) -> f64;
}

/// A 2D drawing target.
pub trait Surface: TextMeasure {
    /// Set the pixel size of the surface. Clears its contents.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill a rectangle with a flat CSS color.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), JsValue>;

    /// Fill a rectangle with a linear gradient.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a color stop is rejected by the context.
    fn fill_rect_gradient(&mut self, x: f64, y: f64, w: f64, h: f64, gradient: &LinearGradient) -> Result<(), JsValue>;

    /// Draw the image at `src` scaled into the rectangle.
    ///
    /// Returns `Ok(false)` when the image is not drawable yet (still loading,
    /// or failed to load); the caller paints a fallback instead.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the draw.
    fn draw_image(&mut self, src: &str, x: f64, y: f64, w: f64, h: f64) -> Result<bool, JsValue>;

    /// Outline `text` with the given stroke color and width.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the call.
    #[allow(clippy::too_many_arguments)]
    fn stroke_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &FontSpec<'_>,
        anchor: TextAnchor,
        color: &str,
        line_width: f64,
    ) -> Result<(), JsValue>;

    /// Fill `text` in `color` at opacity `alpha`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the call.
    #[allow(clippy::too_many_arguments)]
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &FontSpec<'_>,
        anchor: TextAnchor,
        color: &str,
        alpha: f64,
    ) -> Result<(), JsValue>;

    /// Stroke a rectangle outline.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the call.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) -> Result<(), JsValue>;
}

// =============================================================
// Browser implementation
// =============================================================

/// [`Surface`] backed by an `HtmlCanvasElement` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<String, HtmlImageElement>,
    image_listener: Option<js_sys::Function>,
}

impl CanvasSurface {
    /// Bind to `canvas` and acquire its 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, images: HashMap::new(), image_listener: None })
    }

    /// Callback invoked when a background image finishes loading or fails,
    /// so the host can schedule a redraw.
    pub fn set_image_listener(&mut self, listener: js_sys::Function) {
        self.image_listener = Some(listener);
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn image(&mut self, src: &str) -> Result<&HtmlImageElement, JsValue> {
        if !self.images.contains_key(src) {
            let img = HtmlImageElement::new()?;
            img.set_cross_origin(Some("anonymous"));
            if let Some(listener) = &self.image_listener {
                img.set_onload(Some(listener));
                img.set_onerror(Some(listener));
            }
            img.set_src(src);
            self.images.insert(src.to_owned(), img);
        }
        self.images
            .get(src)
            .ok_or_else(|| JsValue::from_str("image cache miss"))
    }

    fn apply_text_style(&self, font: &FontSpec<'_>, anchor: TextAnchor) {
        self.ctx.set_font(&font.css());
        match anchor {
            TextAnchor::TopLeft => {
                self.ctx.set_text_align("left");
                self.ctx.set_text_baseline("top");
            }
            TextAnchor::CenterBaseline => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("alphabetic");
            }
        }
    }
}

impl TextMeasure for CanvasSurface {
    fn text_width(&self, font: &FontSpec<'_>, text: &str) -> f64 {
        self.ctx.set_font(&font.css());
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(err) => {
                log::warn!("measure_text failed: {err:?}");
                0.0
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_rect_gradient(&mut self, x: f64, y: f64, w: f64, h: f64, gradient: &LinearGradient) -> Result<(), JsValue> {
        let (x0, y0, x1, y1) = gradient.endpoints(x, y, w, h);
        let canvas_gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        for stop in &gradient.stops {
            canvas_gradient.add_color_stop(stop.offset as f32, &stop.color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&canvas_gradient);
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }

    fn draw_image(&mut self, src: &str, x: f64, y: f64, w: f64, h: f64) -> Result<bool, JsValue> {
        let img = self.image(src)?.clone();
        if !img.complete() || img.natural_width() == 0 {
            return Ok(false);
        }
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, x, y, w, h)?;
        Ok(true)
    }

    fn stroke_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &FontSpec<'_>,
        anchor: TextAnchor,
        color: &str,
        line_width: f64,
    ) -> Result<(), JsValue> {
        self.apply_text_style(font, anchor);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_text(text, x, y)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &FontSpec<'_>,
        anchor: TextAnchor,
        color: &str,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.apply_text_style(font, anchor);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_global_alpha(alpha);
        let drawn = self.ctx.fill_text(text, x, y);
        self.ctx.set_global_alpha(1.0);
        drawn
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(x, y, w, h);
        Ok(())
    }
}
