//! Document model: meme text elements, the poster record, and the element store.
//!
//! This module defines what is on the meme canvas (`TextElement`), a typed
//! patch for single-field edits (`ElementPatch`), the runtime store that owns
//! the element list and the current selection (`ElementStore`), and the
//! non-positional poster record (`PosterState`, `PosterPatch`).
//!
//! Data flows into this layer from the editor controls (patches), from pointer
//! gestures (position updates), from decoded share tokens (`replace_all`) and
//! from caption results. The renderer and hit-tester read the element list in
//! order; list order is draw order and hit priority.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use captions::{PosterCategory, PosterText};
use serde::{Deserialize, Serialize};

use crate::consts::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::surface::FontSpec;

/// Identifier of a text element, unique within an editing session.
pub type ElementId = u32;

/// Font families offered by the editor. Free text is still accepted.
pub const FONT_SUGGESTIONS: [&str; 7] =
    ["Arial", "Verdana", "Times New Roman", "Courier New", "Georgia", "Comic Sans MS", "Impact"];

/// One positioned, styled string on the meme canvas.
///
/// `x`/`y` is the top-left corner of the text box in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: ElementId,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub color: String,
    pub font: String,
    pub bold: bool,
}

impl TextElement {
    /// Font settings used for both drawing and measuring this element.
    #[must_use]
    pub fn font_spec(&self) -> FontSpec<'_> {
        FontSpec { bold: self.bold, size_px: self.font_size, family: &self.font }
    }
}

/// Everything needed to create an element except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDraft {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub color: String,
    pub font: String,
    pub bold: bool,
}

impl Default for ElementDraft {
    fn default() -> Self {
        Self {
            text: "New Text".to_owned(),
            x: 50.0,
            y: 200.0,
            font_size: 36,
            color: "#FFFFFF".to_owned(),
            font: "Arial".to_owned(),
            bold: false,
        }
    }
}

impl ElementDraft {
    fn into_element(self, id: ElementId) -> TextElement {
        TextElement {
            id,
            text: self.text,
            x: self.x,
            y: self.y,
            font_size: self.font_size,
            color: self.color,
            font: self.font,
            bold: self.bold,
        }
    }
}

/// A single-field edit to a text element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementPatch {
    Text(String),
    /// Move the top-left corner.
    Position { x: f64, y: f64 },
    X(f64),
    Y(f64),
    /// Clamped to the editor's accepted range on apply.
    FontSize(u32),
    Color(String),
    Font(String),
    Bold(bool),
}

impl ElementPatch {
    fn apply(self, el: &mut TextElement) {
        match self {
            Self::Text(text) => el.text = text,
            Self::Position { x, y } => {
                el.x = x;
                el.y = y;
            }
            Self::X(x) => el.x = x,
            Self::Y(y) => el.y = y,
            Self::FontSize(size) => el.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            Self::Color(color) => el.color = color,
            Self::Font(font) => el.font = font,
            Self::Bold(bold) => el.bold = bold,
        }
    }
}

/// Result of [`ElementStore::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The element is the last one; the list is unchanged.
    RejectedLast,
    NotFound,
}

/// Ordered element list plus the current selection.
///
/// Invariants: the list is never empty, ids are unique, and `selected` always
/// names an element in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStore {
    elements: Vec<TextElement>,
    selected: ElementId,
}

impl Default for ElementStore {
    fn default() -> Self {
        let top = TextElement {
            id: 1,
            text: "Top Text".to_owned(),
            x: 50.0,
            y: 50.0,
            font_size: 48,
            color: "#FFFFFF".to_owned(),
            font: "Arial".to_owned(),
            bold: true,
        };
        let bottom = TextElement { id: 2, text: "Bottom Text".to_owned(), y: 500.0, ..top.clone() };
        Self { elements: vec![top, bottom], selected: 1 }
    }
}

impl ElementStore {
    /// Build a store from an existing list, selecting its first element.
    ///
    /// Returns `None` if the list is empty, contains duplicate ids, or uses
    /// the id `ElementId::MAX`.
    #[must_use]
    pub fn from_elements(elements: Vec<TextElement>) -> Option<Self> {
        if !ids_are_unique(&elements) || elements.iter().any(|e| e.id == ElementId::MAX) {
            return None;
        }
        let selected = elements.first()?.id;
        Some(Self { elements, selected })
    }

    /// Next unused id: max existing id + 1, or the lowest free id once the
    /// maximum is taken.
    #[must_use]
    pub fn next_id(&self) -> ElementId {
        let max = self.elements.iter().map(|e| e.id).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(id) => id,
            None => (1..ElementId::MAX).find(|id| self.get(*id).is_none()).unwrap_or(0),
        }
    }

    /// Append a new element, select it, and return its id.
    pub fn create(&mut self, draft: ElementDraft) -> ElementId {
        let id = self.next_id();
        self.elements.push(draft.into_element(id));
        self.selected = id;
        id
    }

    /// Apply a patch to the element with `id`. Returns false if it doesn't exist.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        patch.apply(el);
        true
    }

    /// Remove an element unless it is the last one.
    ///
    /// Deleting the selected element moves the selection to the first
    /// remaining element.
    pub fn delete(&mut self, id: ElementId) -> DeleteOutcome {
        let Some(idx) = self.elements.iter().position(|e| e.id == id) else {
            return DeleteOutcome::NotFound;
        };
        if self.elements.len() == 1 {
            return DeleteOutcome::RejectedLast;
        }
        self.elements.remove(idx);
        if self.selected == id {
            self.selected = self.elements[0].id;
        }
        DeleteOutcome::Deleted
    }

    /// Select an element. Returns false (and keeps the selection) if it doesn't exist.
    pub fn select(&mut self, id: ElementId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = id;
        true
    }

    /// Replace the whole list, e.g. from a decoded share token.
    ///
    /// Returns false and leaves the store untouched if `elements` would break
    /// the store invariants.
    pub fn replace_all(&mut self, elements: Vec<TextElement>) -> bool {
        match Self::from_elements(elements) {
            Some(store) => {
                *self = store;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn selected(&self) -> ElementId {
        self.selected
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&TextElement> {
        self.get(self.selected)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&TextElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut TextElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in draw order.
    #[must_use]
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All element texts joined the way the caption endpoint expects.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.elements.iter().map(|e| e.text.as_str()).collect::<Vec<_>>().join(" | ")
    }
}

fn ids_are_unique(elements: &[TextElement]) -> bool {
    let mut ids: Vec<ElementId> = elements.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.windows(2).all(|w| w[0] != w[1])
}

// =============================================================
// Poster
// =============================================================

/// Editable poster record. Layout is computed at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterState {
    pub heading: String,
    pub subheading: String,
    pub body: String,
    /// Flat CSS color or a `linear-gradient(...)` descriptor.
    pub bg_color: String,
    pub text_color: String,
    pub category: PosterCategory,
}

impl Default for PosterState {
    fn default() -> Self {
        Self {
            heading: "Your Heading Here".to_owned(),
            subheading: "Your Subheading".to_owned(),
            body: "Add your message or content here".to_owned(),
            bg_color: "#FFFFFF".to_owned(),
            text_color: "#000000".to_owned(),
            category: PosterCategory::General,
        }
    }
}

/// A single-field edit to the poster record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterPatch {
    Heading(String),
    Subheading(String),
    Body(String),
    BgColor(String),
    TextColor(String),
    /// Background and text color together, as picked from a preset.
    Colors { bg: String, text: String },
    Category(PosterCategory),
}

impl PosterState {
    pub fn apply(&mut self, patch: PosterPatch) {
        match patch {
            PosterPatch::Heading(v) => self.heading = v,
            PosterPatch::Subheading(v) => self.subheading = v,
            PosterPatch::Body(v) => self.body = v,
            PosterPatch::BgColor(v) => self.bg_color = v,
            PosterPatch::TextColor(v) => self.text_color = v,
            PosterPatch::Colors { bg, text } => {
                self.bg_color = bg;
                self.text_color = text;
            }
            PosterPatch::Category(c) => self.category = c,
        }
    }

    /// Overwrite the three text sections with a generated triple.
    pub fn apply_text(&mut self, text: PosterText) {
        self.heading = text.heading;
        self.subheading = text.subheading;
        self.body = text.body;
    }
}
