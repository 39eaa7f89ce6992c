use super::{Point2, Vector2};

/// A directed segment from an origin point to a tip point.
///
/// Only the origin and the displacement are stored; the tip is derived, so a
/// resized segment always keeps its origin exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    origin: Point2,
    displacement: Vector2,
}

impl Segment {
    /// Creates the segment going from `origin` to `tip`.
    #[must_use]
    pub fn new(origin: Point2, tip: Point2) -> Self {
        Self {
            origin,
            displacement: tip - origin,
        }
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Returns the displacement from origin to tip.
    #[must_use]
    pub fn displacement(&self) -> Vector2 {
        self.displacement
    }

    /// Returns the tip point.
    #[must_use]
    pub fn tip(&self) -> Point2 {
        self.origin + self.displacement
    }

    /// Returns a segment with the same origin whose displacement is scaled by `t`.
    ///
    /// `t` may be any real number, including negative values or values above 1.
    #[must_use]
    pub fn resize(&self, t: f64) -> Self {
        Self {
            origin: self.origin,
            displacement: self.displacement * t,
        }
    }

    /// Returns the point at fraction `t` along the segment.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.resize(t).tip()
    }
}
