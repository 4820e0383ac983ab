#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::ElementStore;
use crate::surface::FontSpec;

/// Every character advances `size_px * ratio`; bold adds 10%.
struct FixedAdvance {
    ratio: f64,
}

impl TextMeasure for FixedAdvance {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, font: &FontSpec<'_>, text: &str) -> f64 {
        let per_char = f64::from(font.size_px) * self.ratio * if font.bold { 1.1 } else { 1.0 };
        text.chars().count() as f64 * per_char
    }
}

const HALF: FixedAdvance = FixedAdvance { ratio: 0.5 };

fn el(id: ElementId, text: &str, x: f64, y: f64, font_size: u32) -> TextElement {
    TextElement {
        id,
        text: text.to_owned(),
        x,
        y,
        font_size,
        color: "#FFFFFF".to_owned(),
        font: "Arial".to_owned(),
        bold: false,
    }
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect { x: 10.0, y: 10.0, w: 20.0, h: 5.0 };
    assert!(r.contains(Point::new(15.0, 12.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(30.0, 15.0)));
    assert!(!r.contains(Point::new(30.1, 12.0)));
    assert!(!r.contains(Point::new(15.0, 9.9)));
}

#[test]
fn rect_expand_grows_every_side() {
    let r = Rect { x: 10.0, y: 20.0, w: 30.0, h: 40.0 }.expand(5.0);
    assert_eq!(r, Rect { x: 5.0, y: 15.0, w: 40.0, h: 50.0 });
}

// =============================================================
// text_box / selection_box
// =============================================================

#[test]
fn text_box_uses_measured_width_and_font_size_height() {
    let b = text_box(&HALF, &el(1, "abcd", 50.0, 60.0, 40));
    assert_eq!(b, Rect { x: 50.0, y: 60.0, w: 80.0, h: 40.0 });
}

#[test]
fn text_box_measures_with_element_weight() {
    let mut bold = el(1, "abcd", 0.0, 0.0, 40);
    bold.bold = true;
    let plain = el(1, "abcd", 0.0, 0.0, 40);
    assert!(text_box(&HALF, &bold).w > text_box(&HALF, &plain).w);
}

#[test]
fn selection_box_pads_text_box_by_five() {
    let e = el(1, "Top Text", 50.0, 50.0, 48);
    let tb = text_box(&HALF, &e);
    let sb = selection_box(&HALF, &e);
    assert_eq!(sb.x, tb.x - 5.0);
    assert_eq!(sb.y, tb.y - 5.0);
    assert_eq!(sb.w, tb.w + 10.0);
    assert_eq!(sb.h, 48.0 + 10.0);
}

#[test]
fn empty_text_has_zero_width_box() {
    let b = text_box(&HALF, &el(1, "", 5.0, 5.0, 20));
    assert_eq!(b.w, 0.0);
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_inside_top_text() {
    let elements = vec![el(1, "Top Text", 50.0, 50.0, 48)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(60.0, 60.0)), Some(1));
}

#[test]
fn miss_far_from_top_text() {
    let elements = vec![el(1, "Top Text", 50.0, 50.0, 48)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(500.0, 500.0)), None);
}

#[test]
fn miss_just_below_box() {
    let elements = vec![el(1, "Top Text", 50.0, 50.0, 48)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(60.0, 98.5)), None);
}

#[test]
fn miss_in_selection_padding() {
    // The highlight is padded, the hit region is not.
    let elements = vec![el(1, "Top Text", 50.0, 50.0, 48)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(47.0, 60.0)), None);
}

#[test]
fn overlap_first_in_list_wins() {
    let elements = vec![el(7, "first", 0.0, 0.0, 40), el(3, "second", 0.0, 0.0, 40)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(10.0, 10.0)), Some(7));
}

#[test]
fn second_element_hit_when_first_misses() {
    let elements = vec![el(1, "a", 0.0, 0.0, 20), el(2, "bbbbbb", 100.0, 100.0, 20)];
    assert_eq!(hit_test(&HALF, &elements, Point::new(110.0, 110.0)), Some(2));
}

#[test]
fn hit_test_on_default_store() {
    let store = ElementStore::default();
    assert_eq!(hit_test(&HALF, store.elements(), Point::new(60.0, 510.0)), Some(2));
    assert_eq!(hit_test(&HALF, store.elements(), Point::new(60.0, 300.0)), None);
}

#[test]
fn hit_test_empty_list() {
    assert_eq!(hit_test(&HALF, &[], Point::new(0.0, 0.0)), None);
}

#[test]
fn hit_agrees_with_selection_box_interior() {
    let e = el(1, "Bottom Text", 50.0, 500.0, 48);
    let tb = text_box(&HALF, &e);
    let inside = Point::new(tb.x + tb.w - 0.5, tb.y + tb.h - 0.5);
    assert!(selection_box(&HALF, &e).contains(inside));
    assert_eq!(hit_test(&HALF, &[e], inside), Some(1));
}
