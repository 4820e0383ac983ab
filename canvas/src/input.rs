//! Input model: mouse buttons, cursor affordance, and the drag gesture.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. A drag records where inside the element the pointer grabbed
//! it, so the element follows the pointer without jumping its corner to the
//! cursor.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ElementId;
use crate::hit::Rect;
use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value. Back/forward buttons map to `None`.
    #[must_use]
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Pointer affordance shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over a draggable text element.
    Move,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
        }
    }
}

/// Optional limits for drag positions.
///
/// When set, a dragged element's box is kept fully inside
/// `[0, width] x [0, height]`; a box larger than the area pins to the
/// top-left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub width: f64,
    pub height: f64,
}

impl DragBounds {
    /// Clamp a proposed top-left corner for a box of `size`.
    #[must_use]
    pub fn clamp(&self, pos: Point, size: Rect) -> Point {
        let max_x = (self.width - size.w).max(0.0);
        let max_y = (self.height - size.h).max(0.0);
        Point { x: pos.x.clamp(0.0, max_x), y: pos.y.clamp(0.0, max_y) }
    }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a text element.
    DraggingElement {
        /// Id of the element being dragged.
        id: ElementId,
        /// Pointer position minus the element's top-left at drag start.
        offset: Point,
    },
}

impl InputState {
    /// Start dragging `id`, grabbed at `pointer` while its corner is at `origin`.
    #[must_use]
    pub fn begin_drag(id: ElementId, pointer: Point, origin: Point) -> Self {
        Self::DraggingElement { id, offset: Point::new(pointer.x - origin.x, pointer.y - origin.y) }
    }

    /// New top-left for the dragged element, or `None` when idle.
    ///
    /// The result is unbounded: elements may be dragged past the canvas
    /// edges. Callers that want containment apply [`DragBounds::clamp`].
    #[must_use]
    pub fn update_drag(&self, pointer: Point) -> Option<(ElementId, Point)> {
        match *self {
            Self::Idle => None,
            Self::DraggingElement { id, offset } => Some((id, Point::new(pointer.x - offset.x, pointer.y - offset.y))),
        }
    }

    /// Finish the gesture, returning the element that was being dragged.
    pub fn end_drag(&mut self) -> Option<ElementId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::DraggingElement { id, .. } => Some(id),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingElement { .. })
    }
}
