//! Rendering: draws the meme and poster scenes onto a [`Surface`].
//!
//! Both entry points receive read-only views of editor state and produce
//! pixels. They never mutate the element list or the poster record, and each
//! pass starts by resizing (and so clearing) the surface, so drawing the same
//! inputs twice yields the same output.
//!
//! All fallible surface calls propagate errors via `Result<(), JsValue>`.
//! The top-level callers ([`crate::engine::MemeEngine`] and
//! [`crate::engine::PosterEngine`]) handle the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;

use crate::consts::{
    FLAT_FILL, OUTLINE_COLOR, OUTLINE_WIDTH, POSTER_FONT_FAMILY, POSTER_HEIGHT, POSTER_TOP, POSTER_WIDTH,
    SELECTION_COLOR, SELECTION_LINE_WIDTH,
};
use crate::doc::{ElementId, PosterState, TextElement};
use crate::gradient::Background;
use crate::hit;
use crate::surface::{FontSpec, Surface, TextAnchor};
use crate::template::Template;

/// Draw a meme: background, every element in list order, then the
/// selection highlight.
///
/// A missing or not-yet-loaded background image falls back to a flat fill.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_meme(
    surface: &mut impl Surface,
    template: &Template,
    elements: &[TextElement],
    selected: Option<ElementId>,
) -> Result<(), JsValue> {
    let (w, h) = (f64::from(template.width), f64::from(template.height));
    surface.resize(template.width, template.height);

    let painted = match template.image {
        Some(src) => surface.draw_image(src, 0.0, 0.0, w, h)?,
        None => false,
    };
    if !painted {
        surface.fill_rect(0.0, 0.0, w, h, FLAT_FILL)?;
    }

    for el in elements {
        draw_element(surface, el)?;
    }

    if let Some(el) = selected.and_then(|id| elements.iter().find(|e| e.id == id)) {
        let b = hit::selection_box(&*surface, el);
        surface.stroke_rect(b.x, b.y, b.w, b.h, SELECTION_COLOR, SELECTION_LINE_WIDTH)?;
    }

    Ok(())
}

fn draw_element(surface: &mut impl Surface, el: &TextElement) -> Result<(), JsValue> {
    let font = el.font_spec();
    surface.stroke_text(&el.text, el.x, el.y, &font, TextAnchor::TopLeft, OUTLINE_COLOR, OUTLINE_WIDTH)?;
    surface.fill_text(&el.text, el.x, el.y, &font, TextAnchor::TopLeft, &el.color, 1.0)
}

// =============================================================
// Poster
// =============================================================

/// Which block of the poster a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSection {
    Heading,
    Subheading,
    Body,
}

impl PosterSection {
    const ALL: [Self; 3] = [Self::Heading, Self::Subheading, Self::Body];

    /// Vertical space inserted before the section's first line.
    fn gap_before(self) -> f64 {
        match self {
            Self::Heading => 0.0,
            Self::Subheading => 40.0,
            Self::Body => 60.0,
        }
    }

    /// Distance between consecutive baselines.
    fn line_advance(self) -> f64 {
        match self {
            Self::Heading => 80.0,
            Self::Subheading => 50.0,
            Self::Body => 35.0,
        }
    }

    #[must_use]
    pub fn font(self) -> FontSpec<'static> {
        let (bold, size_px) = match self {
            Self::Heading => (true, 64),
            Self::Subheading => (true, 32),
            Self::Body => (false, 20),
        };
        FontSpec { bold, size_px, family: POSTER_FONT_FAMILY }
    }

    #[must_use]
    pub fn alpha(self) -> f64 {
        match self {
            Self::Heading => 1.0,
            Self::Subheading => 0.9,
            Self::Body => 0.85,
        }
    }

    fn text(self, poster: &PosterState) -> &str {
        match self {
            Self::Heading => &poster.heading,
            Self::Subheading => &poster.subheading,
            Self::Body => &poster.body,
        }
    }
}

/// One centered line of poster text and its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterLine<'a> {
    pub section: PosterSection,
    pub text: &'a str,
    pub y: f64,
}

/// Lay out heading, subheading and body top to bottom.
///
/// Each section is split on explicit line breaks only; long lines are not
/// wrapped. An empty section still occupies one (blank) line.
#[must_use]
pub fn poster_layout(poster: &PosterState) -> Vec<PosterLine<'_>> {
    let mut lines = Vec::new();
    let mut y = POSTER_TOP;
    for section in PosterSection::ALL {
        y += section.gap_before();
        for text in section.text(poster).split('\n') {
            lines.push(PosterLine { section, text: text.trim_end_matches('\r'), y });
            y += section.line_advance();
        }
    }
    lines
}

/// Draw the poster at its canonical size.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_poster(surface: &mut impl Surface, poster: &PosterState) -> Result<(), JsValue> {
    let (w, h) = (f64::from(POSTER_WIDTH), f64::from(POSTER_HEIGHT));
    surface.resize(POSTER_WIDTH, POSTER_HEIGHT);

    match Background::parse(&poster.bg_color) {
        Background::Flat(color) => surface.fill_rect(0.0, 0.0, w, h, &color)?,
        Background::Linear(gradient) => surface.fill_rect_gradient(0.0, 0.0, w, h, &gradient)?,
    }

    let center_x = w / 2.0;
    for line in poster_layout(poster) {
        let font = line.section.font();
        surface.fill_text(
            line.text,
            center_x,
            line.y,
            &font,
            TextAnchor::CenterBaseline,
            &poster.text_color,
            line.section.alpha(),
        )?;
    }

    Ok(())
}
