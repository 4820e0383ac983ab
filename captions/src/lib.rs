//! Canned caption tables and the wire model shared by the server and the
//! browser editor.
//!
//! The "AI" captions are a lookup into fixed tables: pick the bucket for a
//! template and tone (or a poster category), then draw one entry uniformly at
//! random from an injected [`rand::Rng`]. Unknown keys fall back to a default
//! bucket and are never surfaced as errors.

pub mod tables;


use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tables::{DEFAULT_TEMPLATE, MEME_CAPTIONS, PosterEntry, TemplateCaptions, poster_bucket};

// =============================================================================
// TONE / CATEGORY
// =============================================================================

/// Caption style tag for meme captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Funny,
    Sarcastic,
    Professional,
    GenZ,
    Formal,
}

impl Tone {
    pub const ALL: [Self; 5] = [Self::Funny, Self::Sarcastic, Self::Professional, Self::GenZ, Self::Formal];

    /// Wire key, e.g. `"gen-z"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Funny => "funny",
            Self::Sarcastic => "sarcastic",
            Self::Professional => "professional",
            Self::GenZ => "gen-z",
            Self::Formal => "formal",
        }
    }

    /// Parse a wire key. Returns `None` for anything outside the enumeration.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }

    /// Parse a wire key, falling back to [`Tone::Funny`].
    #[must_use]
    pub fn parse_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Poster text bucket selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterCategory {
    Event,
    Workshop,
    Promotion,
    Announcement,
    #[default]
    General,
}

impl PosterCategory {
    pub const ALL: [Self; 5] = [Self::Event, Self::Workshop, Self::Promotion, Self::Announcement, Self::General];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Workshop => "workshop",
            Self::Promotion => "promotion",
            Self::Announcement => "announcement",
            Self::General => "general",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// Parse a wire key, falling back to [`PosterCategory::General`].
    #[must_use]
    pub fn parse_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }
}

impl std::fmt::Display for PosterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Meme caption endpoint.
pub const CAPTION_PATH: &str = "/api/generate-caption";

/// Poster text endpoint.
pub const POSTER_PATH: &str = "/api/generate-poster-full";

/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Heading, subheading and body for the poster editor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PosterText {
    pub heading: String,
    pub subheading: String,
    pub body: String,
}

impl From<&PosterEntry> for PosterText {
    fn from(entry: &PosterEntry) -> Self {
        Self {
            heading: entry.heading.to_owned(),
            subheading: entry.subheading.to_owned(),
            body: entry.body.to_owned(),
        }
    }
}

/// Body of `POST /api/generate-caption`.
///
/// `tone` stays a free-form string on the wire so unknown values fall back
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    pub template: String,
    #[serde(default)]
    pub current_text: String,
    #[serde(default = "default_tone_key")]
    pub tone: String,
}

fn default_tone_key() -> String {
    Tone::default().as_str().to_owned()
}

/// Successful response of `POST /api/generate-caption`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Body of `POST /api/generate-poster-full`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterTextRequest {
    #[serde(default = "default_category_key")]
    pub category: String,
}

fn default_category_key() -> String {
    PosterCategory::default().as_str().to_owned()
}

/// Successful response of `POST /api/generate-poster-full`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterTextResponse {
    pub text: PosterText,
}

/// Error body returned with a non-2xx status by both generation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Caption table row for `template`, falling back to the default template.
#[must_use]
pub fn template_captions(template: &str) -> &'static TemplateCaptions {
    MEME_CAPTIONS
        .iter()
        .find(|row| row.template == template)
        .or_else(|| MEME_CAPTIONS.iter().find(|row| row.template == DEFAULT_TEMPLATE))
        .unwrap_or(&MEME_CAPTIONS[0])
}

/// Whether `template` has its own caption row.
#[must_use]
pub fn is_known_template(template: &str) -> bool {
    MEME_CAPTIONS.iter().any(|row| row.template == template)
}

/// Pick one caption for a template title and tone key.
///
/// Unknown templates use the default template's row; unknown tones use the
/// `funny` bucket.
pub fn lookup_caption<R: Rng + ?Sized>(template: &str, tone: &str, rng: &mut R) -> &'static str {
    caption_for(template, Tone::parse_or_default(tone), rng)
}

/// Typed variant of [`lookup_caption`].
pub fn caption_for<R: Rng + ?Sized>(template: &str, tone: Tone, rng: &mut R) -> &'static str {
    let bucket = template_captions(template).bucket(tone);
    bucket[rng.random_range(0..bucket.len())]
}

/// Pick one poster text triple for a category key, falling back to `general`.
pub fn lookup_poster<R: Rng + ?Sized>(category: &str, rng: &mut R) -> PosterText {
    poster_for(PosterCategory::parse_or_default(category), rng)
}

/// Typed variant of [`lookup_poster`].
pub fn poster_for<R: Rng + ?Sized>(category: PosterCategory, rng: &mut R) -> PosterText {
    let bucket = poster_bucket(category);
    PosterText::from(&bucket[rng.random_range(0..bucket.len())])
}
