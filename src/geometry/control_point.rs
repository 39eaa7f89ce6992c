use crate::math::Point2;
use crate::render::{CanvasBounds, Color, DrawSink};

use super::casteljau::Positioned;

slotmap::new_key_type! {
    /// Unique identifier for a control point in the point store.
    pub struct ControlPointId;
}

/// A user-placed, draggable point that shapes one or more curves.
#[derive(Debug, Clone)]
pub struct ControlPoint {
    position: Point2,
    radius: f64,
    color: Color,
    dragging: bool,
}

impl ControlPoint {
    /// Creates a control point at `position`, not being dragged.
    #[must_use]
    pub fn new(position: Point2, radius: f64, color: Color) -> Self {
        Self {
            position,
            radius,
            color,
            dragging: false,
        }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Moves the point to `position`, ignoring canvas bounds.
    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    /// Hit-test tolerance, also the drawn radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the point currently follows the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts or stops following the pointer.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Whether `pointer` lies within `radius` of the point (boundary included).
    #[must_use]
    pub fn hit(&self, pointer: Point2) -> bool {
        nalgebra::distance(&self.position, &pointer) <= self.radius
    }

    /// Follows the pointer, one axis at a time.
    ///
    /// An axis is updated only if the whole disc stays inside `bounds` on
    /// that axis; otherwise that coordinate keeps its previous value.
    pub fn drag_to(&mut self, pointer: Point2, bounds: &CanvasBounds) {
        if bounds.admits_x(pointer.x, self.radius) {
            self.position.x = pointer.x;
        }
        if bounds.admits_y(pointer.y, self.radius) {
            self.position.y = pointer.y;
        }
    }

    /// Draws the point as a filled disc in its own color.
    pub fn render(&self, sink: &mut impl DrawSink) {
        sink.begin_path();
        sink.arc(self.position, self.radius);
        sink.set_fill_color(self.color);
        sink.fill();
        sink.close_path();
    }
}

impl Positioned for ControlPoint {
    fn position(&self) -> Point2 {
        self.position
    }
}
