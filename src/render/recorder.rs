use crate::math::Point2;

use super::{Color, DrawSink};

/// A single call made on a [`DrawSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo(Point2),
    LineTo(Point2),
    Arc { center: Point2, radius: f64 },
    SetStrokeColor(Color),
    SetFillColor(Color),
    Stroke,
    Fill,
    ClearRect { origin: Point2, width: f64, height: f64 },
    StrokeRect { origin: Point2, width: f64, height: f64 },
}

/// A drawing sink that records every call instead of rasterizing.
///
/// Useful for headless hosts and for inspecting a frame after the fact.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands recorded so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Removes and returns all recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the `(from, to)` pairs of every `MoveTo` directly followed by
    /// a `LineTo`, in recording order.
    #[must_use]
    pub fn line_segments(&self) -> Vec<(Point2, Point2)> {
        self.commands
            .windows(2)
            .filter_map(|pair| match pair {
                [DrawCommand::MoveTo(from), DrawCommand::LineTo(to)] => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Returns the stroke color in effect at each `Stroke` command.
    #[must_use]
    pub fn stroke_colors(&self) -> Vec<Option<Color>> {
        let mut current = None;
        let mut colors = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetStrokeColor(color) => current = Some(*color),
                DrawCommand::Stroke => colors.push(current),
                _ => {}
            }
        }
        colors
    }
}

impl DrawSink for CommandRecorder {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn arc(&mut self, center: Point2, radius: f64) {
        self.commands.push(DrawCommand::Arc { center, radius });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn clear_rect(&mut self, origin: Point2, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            origin,
            width,
            height,
        });
    }

    fn stroke_rect(&mut self, origin: Point2, width: f64, height: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            origin,
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_take_empties() {
        let mut rec = CommandRecorder::new();
        rec.begin_path();
        rec.move_to(Point2::new(1.0, 2.0));
        rec.line_to(Point2::new(3.0, 4.0));
        rec.stroke();
        assert_eq!(rec.commands().len(), 4);
        assert_eq!(
            rec.line_segments(),
            vec![(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0))]
        );
        let taken = rec.take();
        assert_eq!(taken[0], DrawCommand::BeginPath);
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn stroke_colors_track_last_set_color() {
        let mut rec = CommandRecorder::new();
        rec.stroke();
        rec.set_stroke_color(Color::Red);
        rec.stroke();
        rec.set_fill_color(Color::Blue);
        rec.stroke();
        assert_eq!(
            rec.stroke_colors(),
            vec![None, Some(Color::Red), Some(Color::Red)]
        );
    }
}
