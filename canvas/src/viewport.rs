#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either CSS (displayed) or canvas (backing store) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Relationship between the canvas as displayed and its pixel buffer.
///
/// Pointer events arrive in CSS pixels relative to the canvas's top-left
/// corner. Element coordinates live in canvas pixels. The two coincide when
/// the canvas is shown at its natural size; they diverge when page layout
/// scales it down (e.g. `max-width: 100%` on a narrow screen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Displayed size in CSS pixels.
    pub css_width: f64,
    pub css_height: f64,
    /// Backing-store size in canvas pixels.
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Viewport {
    /// A viewport displayed at natural size.
    #[must_use]
    pub fn natural(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        Self { css_width: w, css_height: h, canvas_width: w, canvas_height: h }
    }

    /// Convert a CSS-pixel offset within the canvas to canvas pixels.
    ///
    /// An axis with unknown (zero) displayed size passes through unscaled.
    #[must_use]
    pub fn css_to_canvas(&self, css: Point) -> Point {
        Point {
            x: css.x * axis_scale(self.canvas_width, self.css_width),
            y: css.y * axis_scale(self.canvas_height, self.css_height),
        }
    }

    /// Convert a canvas-pixel point to a CSS-pixel offset within the canvas.
    #[must_use]
    pub fn canvas_to_css(&self, canvas: Point) -> Point {
        Point {
            x: canvas.x / axis_scale(self.canvas_width, self.css_width),
            y: canvas.y / axis_scale(self.canvas_height, self.css_height),
        }
    }
}

fn axis_scale(canvas: f64, css: f64) -> f64 {
    if css > 0.0 && canvas > 0.0 { canvas / css } else { 1.0 }
}
