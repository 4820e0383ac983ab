//! Text boxes and pointer hit-testing.
//!
//! A text box is `[x, x + measured width] x [y, y + font size]`. The renderer
//! draws the selection highlight from the same box, so what the user sees
//! outlined is exactly what responds to the pointer.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::SELECTION_PADDING;
use crate::doc::{ElementId, TextElement};
use crate::surface::TextMeasure;
use crate::viewport::Point;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Edge-inclusive containment.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.w && pt.y >= self.y && pt.y <= self.y + self.h
    }

    /// Grow by `pad` on every side.
    #[must_use]
    pub fn expand(&self, pad: f64) -> Self {
        Self { x: self.x - pad, y: self.y - pad, w: self.w + 2.0 * pad, h: self.h + 2.0 * pad }
    }
}

/// Measured box of an element.
#[must_use]
pub fn text_box(measure: &impl TextMeasure, el: &TextElement) -> Rect {
    let w = measure.text_width(&el.font_spec(), &el.text);
    Rect { x: el.x, y: el.y, w, h: f64::from(el.font_size) }
}

/// Highlight rectangle drawn around a selected element.
#[must_use]
pub fn selection_box(measure: &impl TextMeasure, el: &TextElement) -> Rect {
    text_box(measure, el).expand(SELECTION_PADDING)
}

/// Id of the first element in list order whose box contains `pt`.
#[must_use]
pub fn hit_test(measure: &impl TextMeasure, elements: &[TextElement], pt: Point) -> Option<ElementId> {
    elements
        .iter()
        .find(|el| text_box(measure, el).contains(pt))
        .map(|el| el.id)
}
