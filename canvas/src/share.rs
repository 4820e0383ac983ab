//! Share tokens: editor state packed into a URL query parameter.
//!
//! A token is URL-safe base64 (no padding) of a small JSON object tagged
//! `"v": 1`. Tokens minted before versioning carried no `v` and used the
//! browser's standard `btoa` alphabet; both forms decode.
//!
//! Meme: `{"v":1,"t":<template index>,"e":[<element>...]}`.
//! Poster: `{"v":1,"h":..,"s":..,"b":..,"c":..,"k":..}`.
//!
//! Decoding never touches editor state. Callers apply a decoded value only
//! on `Ok`, so a bad token leaves whatever was there before.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::doc::{ElementId, PosterState, TextElement};
use crate::template::MEME_TEMPLATES;

/// Current token format version.
pub const SHARE_VERSION: u32 = 1;

/// Query parameter carrying the token.
pub const SHARE_PARAM: &str = "share";

/// Meme editor page.
pub const MEME_SHARE_PATH: &str = "/create";

/// Poster editor page.
pub const POSTER_SHARE_PATH: &str = "/poster";

/// Why a token was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share token is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported share token version {0}")]
    UnsupportedVersion(u32),
    #[error("template index {0} is out of range")]
    UnknownTemplate(i64),
    #[error("share token has no text elements")]
    NoElements,
    #[error("element id {0} leaves no room for new elements")]
    IdOutOfRange(ElementId),
    #[error("duplicate element id {0}")]
    DuplicateId(ElementId),
    #[error("element {0} has a zero font size")]
    ZeroFontSize(ElementId),
    #[error("element {0} has a non-finite position")]
    NonFinitePosition(ElementId),
}

/// Decoded meme state.
#[derive(Debug, Clone, PartialEq)]
pub struct MemeShare {
    pub template_index: usize,
    pub elements: Vec<TextElement>,
}

/// Decoded poster fields. Absent fields keep the receiving editor's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosterShare {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub body: Option<String>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

impl PosterShare {
    /// Overwrite the fields present in the token.
    pub fn apply_to(self, poster: &mut PosterState) {
        if let Some(v) = self.heading {
            poster.heading = v;
        }
        if let Some(v) = self.subheading {
            poster.subheading = v;
        }
        if let Some(v) = self.body {
            poster.body = v;
        }
        if let Some(v) = self.bg_color {
            poster.bg_color = v;
        }
        if let Some(v) = self.text_color {
            poster.text_color = v;
        }
    }
}

// =============================================================
// Wire shapes
// =============================================================

#[derive(Deserialize)]
struct Envelope {
    v: Option<u32>,
}

#[derive(Serialize)]
struct MemeOut<'a> {
    v: u32,
    t: usize,
    e: &'a [TextElement],
}

/// Incoming meme payload. `t` is signed and nullable because unversioned
/// tokens were built from a parsed query parameter that may be `NaN`.
#[derive(Deserialize)]
struct MemeIn {
    #[serde(default)]
    t: Option<i64>,
    e: Vec<TextElement>,
}

#[derive(Serialize)]
struct PosterOut<'a> {
    v: u32,
    h: &'a str,
    s: &'a str,
    b: &'a str,
    c: &'a str,
    k: &'a str,
}

#[derive(Deserialize)]
struct PosterIn {
    #[serde(default)]
    h: Option<String>,
    #[serde(default)]
    s: Option<String>,
    #[serde(default)]
    b: Option<String>,
    #[serde(default)]
    c: Option<String>,
    #[serde(default)]
    k: Option<String>,
}

// =============================================================
// Meme
// =============================================================

/// Encode the meme editor state.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn encode_meme(template_index: usize, elements: &[TextElement]) -> Result<String, ShareError> {
    let json = serde_json::to_vec(&MemeOut { v: SHARE_VERSION, t: template_index, e: elements })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode and validate a meme token.
///
/// Versioned tokens must name a known template. Unversioned tokens fall back
/// to the first template when the index is missing, `null` or out of range.
///
/// # Errors
///
/// Returns a [`ShareError`] describing the first problem found.
pub fn decode_meme(token: &str) -> Result<MemeShare, ShareError> {
    let bytes = decode_bytes(token)?;
    let version = check_version(&bytes)?;
    let wire: MemeIn = serde_json::from_slice(&bytes)?;

    let known = wire.t.and_then(|t| usize::try_from(t).into_iter().find(|&i| i < MEME_TEMPLATES.len()));
    let template_index = match (version, wire.t, known) {
        (_, _, Some(index)) => index,
        (_, None, None) | (None, Some(_), None) => 0,
        (Some(_), Some(t), None) => return Err(ShareError::UnknownTemplate(t)),
    };
    validate_elements(&wire.e)?;
    Ok(MemeShare { template_index, elements: wire.e })
}

fn validate_elements(elements: &[TextElement]) -> Result<(), ShareError> {
    if elements.is_empty() {
        return Err(ShareError::NoElements);
    }
    let mut seen = Vec::with_capacity(elements.len());
    for el in elements {
        if el.id == ElementId::MAX {
            return Err(ShareError::IdOutOfRange(el.id));
        }
        if seen.contains(&el.id) {
            return Err(ShareError::DuplicateId(el.id));
        }
        seen.push(el.id);
        if el.font_size == 0 {
            return Err(ShareError::ZeroFontSize(el.id));
        }
        if !el.x.is_finite() || !el.y.is_finite() {
            return Err(ShareError::NonFinitePosition(el.id));
        }
    }
    Ok(())
}

// =============================================================
// Poster
// =============================================================

/// Encode the poster editor state.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn encode_poster(poster: &PosterState) -> Result<String, ShareError> {
    let wire = PosterOut {
        v: SHARE_VERSION,
        h: &poster.heading,
        s: &poster.subheading,
        b: &poster.body,
        c: &poster.bg_color,
        k: &poster.text_color,
    };
    let json = serde_json::to_vec(&wire)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a poster token.
///
/// In unversioned tokens an empty string counts as absent, so the receiving
/// editor keeps its value for that field.
///
/// # Errors
///
/// Returns a [`ShareError`] if the token is not decodable.
pub fn decode_poster(token: &str) -> Result<PosterShare, ShareError> {
    let bytes = decode_bytes(token)?;
    let version = check_version(&bytes)?;
    let wire: PosterIn = serde_json::from_slice(&bytes)?;

    let field = |value: Option<String>| match version {
        Some(_) => value,
        None => value.filter(|v| !v.is_empty()),
    };
    Ok(PosterShare {
        heading: field(wire.h),
        subheading: field(wire.s),
        body: field(wire.b),
        bg_color: field(wire.c),
        text_color: field(wire.k),
    })
}

// =============================================================
// Shared helpers
// =============================================================

/// Full share link: `{origin}{path}?share={token}`.
#[must_use]
pub fn share_url(origin: &str, path: &str, token: &str) -> String {
    format!("{}{path}?{SHARE_PARAM}={token}", origin.trim_end_matches('/'))
}

/// Accept both alphabets, with or without padding. A `+` that arrived as a
/// space through form-style query decoding is restored.
fn decode_bytes(token: &str) -> Result<Vec<u8>, ShareError> {
    let normalized: String = token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            ' ' => '+',
            other => other,
        })
        .collect();
    Ok(STANDARD_NO_PAD.decode(normalized)?)
}

/// The token's version, `None` for tokens minted before versioning.
fn check_version(bytes: &[u8]) -> Result<Option<u32>, ShareError> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    match envelope.v {
        None | Some(SHARE_VERSION) => Ok(envelope.v),
        Some(other) => Err(ShareError::UnsupportedVersion(other)),
    }
}
