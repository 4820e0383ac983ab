//! PNG export file naming.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Download name for a meme: the template title with whitespace turned into
/// dashes, then the timestamp, e.g. `Drake-Meme-1700000000000.png`.
#[must_use]
pub fn export_file_name(template_title: &str, timestamp_ms: u64) -> String {
    let slug: String = template_title.chars().map(|c| if c.is_whitespace() { '-' } else { c }).collect();
    format!("{slug}-{timestamp_ms}.png")
}

/// Download name for a poster.
#[must_use]
pub fn poster_file_name(timestamp_ms: u64) -> String {
    format!("poster-{timestamp_ms}.png")
}
