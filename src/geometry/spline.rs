use crate::error::{GeometryError, Result};
use crate::render::{Color, DrawSink};
use crate::tessellation::SampleCurve;

use super::{ControlPointId, ControlPointStore};

/// Parameter increment used to discretize a curve, in `[f64::EPSILON, 1]`.
///
/// Steps below machine epsilon are rejected: adding them to a parameter near
/// 1 leaves it unchanged, so sampling would never reach the end of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingStep(f64);

impl SamplingStep {
    /// Creates a sampling step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not a finite value in `[f64::EPSILON, 1]`.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step < f64::EPSILON || step > 1.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: f64::EPSILON,
                max: 1.0,
            }
            .into());
        }
        Ok(Self(step))
    }

    /// Returns the raw parameter increment.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SamplingStep {
    fn default() -> Self {
        Self(0.01)
    }
}

/// A Bézier curve over an ordered sequence of shared control points.
///
/// The sequence is fixed at construction and its order is the control
/// polygon order. The points themselves live in a [`ControlPointStore`] and
/// may still move.
#[derive(Debug, Clone)]
pub struct Spline {
    points: Vec<ControlPointId>,
    step: SamplingStep,
    color: Color,
}

impl Spline {
    /// Creates a spline over `points`, sampled at `step` and drawn in `color`.
    #[must_use]
    pub fn new(points: Vec<ControlPointId>, step: SamplingStep, color: Color) -> Self {
        Self {
            points,
            step,
            color,
        }
    }

    /// The control point sequence, in polygon order.
    #[must_use]
    pub fn points(&self) -> &[ControlPointId] {
        &self.points
    }

    /// Returns the sampling step.
    #[must_use]
    pub fn step(&self) -> SamplingStep {
        self.step
    }

    /// Returns the curve color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the spline has enough points to describe a curve.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Draws the sampled curve in the spline's color, then its control
    /// polygon in grey.
    ///
    /// A spline with fewer than two points draws nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a control point is missing from `store`.
    pub fn render(&self, store: &ControlPointStore, sink: &mut impl DrawSink) -> Result<()> {
        if !self.is_renderable() {
            return Ok(());
        }
        let polygon = store.positions(&self.points)?;
        let chords = SampleCurve::new(&polygon, self.step).execute()?;

        sink.begin_path();
        for chord in &chords {
            sink.move_to(chord.start);
            sink.line_to(chord.end);
            sink.set_stroke_color(self.color);
            sink.stroke();
        }
        sink.close_path();

        sink.begin_path();
        for pair in polygon.windows(2) {
            sink.set_stroke_color(Color::Grey);
            sink.move_to(pair[0]);
            sink.line_to(pair[1]);
            sink.stroke();
        }
        sink.close_path();

        tracing::trace!(
            chords = chords.len(),
            points = polygon.len(),
            color = %self.color,
            "rendered spline"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::ControlPoint;
    use crate::math::Point2;
    use crate::render::{CommandRecorder, DrawCommand};

    fn store_with(points: &[(f64, f64)]) -> (ControlPointStore, Vec<ControlPointId>) {
        let mut store = ControlPointStore::new();
        let ids = points
            .iter()
            .map(|&(x, y)| store.add_point(ControlPoint::new(Point2::new(x, y), 8.0, Color::Red)))
            .collect();
        (store, ids)
    }

    #[test]
    fn step_must_be_in_unit_interval() {
        assert!(SamplingStep::new(0.0).is_err());
        assert!(SamplingStep::new(-0.1).is_err());
        assert!(SamplingStep::new(1.5).is_err());
        assert!(SamplingStep::new(f64::NAN).is_err());
        assert!(SamplingStep::new(f64::EPSILON).is_ok());
        assert!((SamplingStep::new(1.0).unwrap().value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn step_that_cannot_advance_the_parameter_is_rejected() {
        // Below half an ulp of 0.5, so `0.5 + tiny` rounds back to 0.5.
        let tiny = 1e-17;
        let err = SamplingStep::new(tiny).unwrap_err();
        assert!(matches!(
            err,
            crate::SketchError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "step",
                ..
            })
        ));
    }

    #[test]
    fn degenerate_spline_draws_nothing() {
        let (store, ids) = store_with(&[(10.0, 10.0)]);
        let mut rec = CommandRecorder::new();
        Spline::new(ids, SamplingStep::default(), Color::Red)
            .render(&store, &mut rec)
            .unwrap();
        Spline::new(Vec::new(), SamplingStep::default(), Color::Red)
            .render(&store, &mut rec)
            .unwrap();
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn render_draws_curve_then_polygon() {
        let (store, ids) = store_with(&[(0.0, 0.0), (40.0, 0.0), (40.0, 40.0)]);
        let spline = Spline::new(ids, SamplingStep::new(0.5).unwrap(), Color::Blue);
        let mut rec = CommandRecorder::new();
        spline.render(&store, &mut rec).unwrap();

        // t = 0, 0.5, 1.0 give three chords, then two polygon edges.
        let colors = rec.stroke_colors();
        assert_eq!(
            colors,
            vec![
                Some(Color::Blue),
                Some(Color::Blue),
                Some(Color::Blue),
                Some(Color::Grey),
                Some(Color::Grey)
            ]
        );
        let segments = rec.line_segments();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].0, Point2::new(0.0, 0.0));
        assert_eq!(segments[1].1, Point2::new(40.0, 40.0));
        assert_eq!(segments[3], (Point2::new(0.0, 0.0), Point2::new(40.0, 0.0)));
        assert_eq!(segments[4], (Point2::new(40.0, 0.0), Point2::new(40.0, 40.0)));
        assert_eq!(rec.commands()[0], DrawCommand::BeginPath);
    }

    #[test]
    fn render_follows_moved_points() {
        let (mut store, ids) = store_with(&[(0.0, 0.0), (10.0, 0.0)]);
        let spline = Spline::new(ids.clone(), SamplingStep::new(1.0).unwrap(), Color::Green);
        store
            .point_mut(ids[1])
            .unwrap()
            .set_position(Point2::new(20.0, 0.0));
        let mut rec = CommandRecorder::new();
        spline.render(&store, &mut rec).unwrap();
        let segments = rec.line_segments();
        assert_eq!(segments[0], (Point2::new(0.0, 0.0), Point2::new(20.0, 0.0)));
        assert_eq!(segments.last().unwrap().1, Point2::new(20.0, 0.0));
    }
}
