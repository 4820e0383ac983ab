//! Test doubles shared by the unit-test modules.

use wasm_bindgen::JsValue;

use crate::gradient::LinearGradient;
use crate::surface::{FontSpec, Surface, TextAnchor, TextMeasure};

/// Measures every character as `size_px / 2` wide, bold or not.
pub struct HalfEm;

impl TextMeasure for HalfEm {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, font: &FontSpec<'_>, text: &str) -> f64 {
        text.chars().count() as f64 * f64::from(font.size_px) / 2.0
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Resize(u32, u32),
    FillRect { x: f64, y: f64, w: f64, h: f64, color: String },
    Gradient { angle_deg: f64, stops: usize },
    Image { src: String, w: f64, h: f64 },
    StrokeText { text: String, x: f64, y: f64, font: String, anchor: TextAnchor, color: String, width: f64 },
    FillText { text: String, x: f64, y: f64, font: String, anchor: TextAnchor, color: String, alpha: f64 },
    StrokeRect { x: f64, y: f64, w: f64, h: f64, color: String, width: f64 },
}

/// Surface that records calls instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    /// Whether `draw_image` reports the image as drawable.
    pub images_ready: bool,
}

impl RecordingSurface {
    pub fn with_images() -> Self {
        Self { ops: Vec::new(), images_ready: true }
    }

    pub fn fill_texts(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::FillText { .. })).collect()
    }
}

impl TextMeasure for RecordingSurface {
    fn text_width(&self, font: &FontSpec<'_>, text: &str) -> f64 {
        HalfEm.text_width(font, text)
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.ops.clear();
        self.ops.push(Op::Resize(width, height));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), JsValue> {
        self.ops.push(Op::FillRect { x, y, w, h, color: color.to_owned() });
        Ok(())
    }

    fn fill_rect_gradient(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, gradient: &LinearGradient) -> Result<(), JsValue> {
        self.ops.push(Op::Gradient { angle_deg: gradient.angle_deg, stops: gradient.stops.len() });
        Ok(())
    }

    fn draw_image(&mut self, src: &str, _x: f64, _y: f64, w: f64, h: f64) -> Result<bool, JsValue> {
        if self.images_ready {
            self.ops.push(Op::Image { src: src.to_owned(), w, h });
        }
        Ok(self.images_ready)
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
        self.ops.push(Op::StrokeText {
            text: text.to_owned(),
            x,
            y,
            font: font.css(),
            anchor,
            color: color.to_owned(),
            width: line_width,
        });
        Ok(())
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
        self.ops.push(Op::FillText {
            text: text.to_owned(),
            x,
            y,
            font: font.css(),
            anchor,
            color: color.to_owned(),
            alpha,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) -> Result<(), JsValue> {
        self.ops.push(Op::StrokeRect { x, y, w, h, color: color.to_owned(), width: line_width });
        Ok(())
    }
}
