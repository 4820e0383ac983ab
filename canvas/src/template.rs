//! Template catalog for the meme editor and color presets for the poster editor.
//!
//! Both lists are immutable. A template's position in [`MEME_TEMPLATES`] is
//! its share-token index, so entries are only ever appended.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

/// A meme background and canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Display title; also the caption-table key.
    pub title: &'static str,
    /// Background image URL, or `None` for a flat fill.
    pub image: Option<&'static str>,
    pub width: u32,
    pub height: u32,
}

pub static MEME_TEMPLATES: [Template; 6] = [
    Template { title: "Drake Meme", image: Some("/templates/drake-meme.jpg"), width: 600, height: 600 },
    Template {
        title: "Distracted Boyfriend",
        image: Some("/templates/distracted-boyfriend.jpg"),
        width: 600,
        height: 450,
    },
    Template { title: "Loss Meme", image: Some("/templates/loss-meme.jpg"), width: 600, height: 600 },
    Template {
        title: "Motivational Poster",
        image: Some("/templates/motivational-poster.jpg"),
        width: 600,
        height: 800,
    },
    Template { title: "Event Poster", image: Some("/templates/event-poster.jpg"), width: 600, height: 800 },
    Template { title: "Blank Canvas", image: None, width: 600, height: 600 },
];

/// Template at `index`, falling back to the first template when out of range.
#[must_use]
pub fn template_by_index(index: usize) -> &'static Template {
    MEME_TEMPLATES.get(index).unwrap_or(&MEME_TEMPLATES[0])
}

/// Index of the template titled `title`, if any.
#[must_use]
pub fn index_of_title(title: &str) -> Option<usize> {
    MEME_TEMPLATES.iter().position(|t| t.title == title)
}

/// Template titled `title`, if any.
#[must_use]
pub fn template_by_title(title: &str) -> Option<&'static Template> {
    index_of_title(title).map(|i| &MEME_TEMPLATES[i])
}

/// Background/text color pairing offered by the poster editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

pub static COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset { name: "White", bg: "#FFFFFF", text: "#000000" },
    ColorPreset { name: "Navy Blue", bg: "#1a3a52", text: "#FFFFFF" },
    ColorPreset { name: "Coral", bg: "#FF6B6B", text: "#FFFFFF" },
    ColorPreset { name: "Sage Green", bg: "#6B8E6F", text: "#FFFFFF" },
    ColorPreset { name: "Purple", bg: "#6B4C9A", text: "#FFFFFF" },
    ColorPreset { name: "Gradient Gold", bg: "linear-gradient(135deg, #FFD700, #FFA500)", text: "#000000" },
    ColorPreset { name: "Deep Black", bg: "#1a1a1a", text: "#FFFFFF" },
    ColorPreset { name: "Mint", bg: "#98D8C8", text: "#1a1a1a" },
];

/// Preset named `name`, if any.
#[must_use]
pub fn preset_by_name(name: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS.iter().find(|p| p.name == name)
}
