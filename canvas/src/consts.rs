//! Shared numeric and color constants for the canvas crate.

// ── Meme text ───────────────────────────────────────────────────

/// Outline color drawn under every meme text element.
pub const OUTLINE_COLOR: &str = "#000000";

/// Outline stroke width in canvas pixels.
pub const OUTLINE_WIDTH: f64 = 3.0;

/// Smallest font size the editor accepts, in pixels.
pub const FONT_SIZE_MIN: u32 = 16;

/// Largest font size the editor accepts, in pixels.
pub const FONT_SIZE_MAX: u32 = 120;

// ── Selection ───────────────────────────────────────────────────

/// Selection highlight stroke color.
pub const SELECTION_COLOR: &str = "#3B82F6";

/// Selection highlight stroke width in canvas pixels.
pub const SELECTION_LINE_WIDTH: f64 = 2.0;

/// Gap between a text box and its selection highlight, on every side.
pub const SELECTION_PADDING: f64 = 5.0;

// ── Background ──────────────────────────────────────────────────

/// Fill used when a template has no image or the image is not drawable.
pub const FLAT_FILL: &str = "#f0f0f0";

// ── Poster ──────────────────────────────────────────────────────

/// Canonical poster surface width.
pub const POSTER_WIDTH: u32 = 800;

/// Canonical poster surface height.
pub const POSTER_HEIGHT: u32 = 1000;

/// Baseline of the first heading line.
pub const POSTER_TOP: f64 = 150.0;

/// Font family used by every poster section.
pub const POSTER_FONT_FAMILY: &str = "Arial";
