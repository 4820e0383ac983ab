//! Poster backgrounds: flat colors and CSS `linear-gradient(...)` values.
//!
//! Background colors travel as CSS strings (that is what the color presets
//! and share tokens carry). [`Background::parse`] turns one into something the
//! [`Surface`](crate::surface::Surface) can paint.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;

/// One color stop; `offset` is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// A linear gradient using CSS angle semantics: 0deg points up, 90deg right.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub angle_deg: f64,
    pub stops: Vec<GradientStop>,
}

/// A paintable background.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Flat(String),
    Linear(LinearGradient),
}

impl Background {
    /// Interpret a CSS background value. Anything that is not a well-formed
    /// `linear-gradient(...)` is treated as a flat color.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let trimmed = css.trim();
        match parse_linear(trimmed) {
            Some(gradient) => Self::Linear(gradient),
            None => Self::Flat(trimmed.to_owned()),
        }
    }
}

impl LinearGradient {
    /// Start and end points of the gradient line for a `w` x `h` box at
    /// `(x, y)`, as `(x0, y0, x1, y1)`.
    ///
    /// The line passes through the box center and is long enough that the
    /// corners land exactly on the 0% and 100% stops.
    #[must_use]
    pub fn endpoints(&self, x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
        let angle = self.angle_deg.to_radians();
        let (sin, cos) = angle.sin_cos();
        let half = ((w * sin).abs() + (h * cos).abs()) / 2.0;
        let cx = x + w / 2.0;
        let cy = y + h / 2.0;
        let dx = sin * half;
        let dy = -cos * half;
        (cx - dx, cy - dy, cx + dx, cy + dy)
    }
}

fn parse_linear(css: &str) -> Option<LinearGradient> {
    let inner = css
        .strip_prefix("linear-gradient(")?
        .strip_suffix(')')?;
    let mut args = split_top_level(inner);
    if args.is_empty() {
        return None;
    }

    let angle_deg = match parse_direction(args[0]) {
        Some(angle) => {
            args.remove(0);
            angle
        }
        None => 180.0,
    };
    if args.len() < 2 {
        return None;
    }

    let mut raw: Vec<(String, Option<f64>)> = Vec::with_capacity(args.len());
    for arg in args {
        raw.push(parse_stop(arg)?);
    }
    Some(LinearGradient { angle_deg, stops: distribute(raw) })
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_u32;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = s[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

fn parse_direction(arg: &str) -> Option<f64> {
    if let Some(deg) = arg.strip_suffix("deg") {
        return match deg.trim().parse::<f64>() {
            Ok(d) if d.is_finite() => Some(d),
            _ => None,
        };
    }
    match arg {
        "to top" => Some(0.0),
        "to right" => Some(90.0),
        "to bottom" => Some(180.0),
        "to left" => Some(270.0),
        "to top right" | "to right top" => Some(45.0),
        "to bottom right" | "to right bottom" => Some(135.0),
        "to bottom left" | "to left bottom" => Some(225.0),
        "to top left" | "to left top" => Some(315.0),
        _ => None,
    }
}

fn parse_stop(arg: &str) -> Option<(String, Option<f64>)> {
    let (color, position) = match arg.rsplit_once(' ') {
        Some((color, pos)) if pos.ends_with('%') && !color.trim().is_empty() => {
            let Ok(pct) = pos.trim_end_matches('%').parse::<f64>() else {
                return None;
            };
            (color.trim(), Some((pct / 100.0).clamp(0.0, 1.0)))
        }
        _ => (arg, None),
    };
    if color.is_empty() {
        return None;
    }
    Some((color.to_owned(), position))
}

/// Fill in missing stop positions the way CSS does: first at 0, last at 1,
/// gaps spread evenly between their positioned neighbours.
#[allow(clippy::cast_precision_loss)]
fn distribute(raw: Vec<(String, Option<f64>)>) -> Vec<GradientStop> {
    let n = raw.len();
    let mut offsets: Vec<Option<f64>> = raw.iter().map(|(_, p)| *p).collect();
    if offsets[0].is_none() {
        offsets[0] = Some(0.0);
    }
    if offsets[n - 1].is_none() {
        offsets[n - 1] = Some(1.0);
    }

    let mut prev = 0;
    for i in 1..n {
        if let Some(end) = offsets[i] {
            let start = offsets[prev].unwrap_or(0.0);
            let span = (i - prev) as f64;
            for (step, offset) in offsets.iter_mut().enumerate().take(i).skip(prev + 1) {
                *offset = Some(start + (end - start) * (step - prev) as f64 / span);
            }
            prev = i;
        }
    }

    // Positions never decrease along the line.
    let mut floor = 0.0_f64;
    raw.into_iter()
        .zip(offsets)
        .map(|((color, _), offset)| {
            let value = offset.unwrap_or(floor).max(floor);
            floor = value;
            GradientStop { offset: value, color }
        })
        .collect()
}
