mod palette;
mod recorder;

pub use palette::Palette;
pub use recorder::{CommandRecorder, DrawCommand};

use std::fmt;

use crate::math::Point2;

/// Named stroke and fill colors understood by every drawing sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Purple,
    Pink,
    Orange,
    Brown,
    Black,
    Grey,
}

impl Color {
    /// Returns the CSS color keyword for this color.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Brown => "brown",
            Self::Black => "black",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immediate-mode 2D drawing target.
///
/// Coordinates are canvas pixels, the same space pointer positions are
/// reported in. Implementations wrap whatever surface the host provides.
pub trait DrawSink {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, point: Point2);
    fn line_to(&mut self, point: Point2);
    /// Adds a full circle of `radius` around `center` to the current path.
    fn arc(&mut self, center: Point2, radius: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn clear_rect(&mut self, origin: Point2, width: f64, height: f64);
    fn stroke_rect(&mut self, origin: Point2, width: f64, height: f64);
}

/// Size of the drawable canvas, with its origin at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Creates canvas bounds of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a disc of `radius` centered at `x` fits horizontally.
    #[must_use]
    pub fn admits_x(&self, x: f64, radius: f64) -> bool {
        x - radius >= 0.0 && x + radius <= self.width
    }

    /// Whether a disc of `radius` centered at `y` fits vertically.
    #[must_use]
    pub fn admits_y(&self, y: f64, radius: f64) -> bool {
        y - radius >= 0.0 && y + radius <= self.height
    }

    /// Clears the whole canvas and strokes its outline in black.
    pub fn draw_frame(&self, sink: &mut impl DrawSink) {
        let origin = Point2::origin();
        sink.clear_rect(origin, self.width, self.height);
        sink.begin_path();
        sink.set_stroke_color(Color::Black);
        sink.stroke_rect(origin, self.width, self.height);
        sink.close_path();
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_requires_full_radius_inside() {
        let bounds = CanvasBounds::new(100.0, 50.0);
        assert!(bounds.admits_x(8.0, 8.0));
        assert!(!bounds.admits_x(7.9, 8.0));
        assert!(bounds.admits_x(92.0, 8.0));
        assert!(!bounds.admits_x(92.1, 8.0));
        assert!(bounds.admits_y(42.0, 8.0));
        assert!(!bounds.admits_y(42.5, 8.0));
    }

    #[test]
    fn frame_clears_then_outlines() {
        let bounds = CanvasBounds::new(40.0, 30.0);
        let mut rec = CommandRecorder::new();
        bounds.draw_frame(&mut rec);
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::ClearRect {
                    origin: Point2::origin(),
                    width: 40.0,
                    height: 30.0
                },
                DrawCommand::BeginPath,
                DrawCommand::SetStrokeColor(Color::Black),
                DrawCommand::StrokeRect {
                    origin: Point2::origin(),
                    width: 40.0,
                    height: 30.0
                },
                DrawCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn color_names() {
        assert_eq!(Color::Grey.to_string(), "grey");
        assert_eq!(Color::Purple.name(), "purple");
    }
}
