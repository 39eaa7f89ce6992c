use crate::math::Point2;

/// Placement of the drawing surface in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

impl SurfaceRect {
    /// Creates a surface placed at `(left, top)` in client coordinates.
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// A pointer sample as delivered by the host, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client: Point2,
    pub target: SurfaceRect,
}

impl PointerEvent {
    /// Creates a pointer event at `client` over `target`.
    #[must_use]
    pub fn new(client: Point2, target: SurfaceRect) -> Self {
        Self { client, target }
    }

    /// Position relative to the target surface, i.e. in canvas pixels.
    #[must_use]
    pub fn local_position(&self) -> Point2 {
        Point2::new(
            self.client.x - self.target.left,
            self.client.y - self.target.top,
        )
    }
}

/// Input understood by the [`Viewer`](super::Viewer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    /// The "new curve" / "validate" control was activated.
    ToggleAuthoring,
}
