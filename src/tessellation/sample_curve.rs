use crate::error::Result;
use crate::geometry::{evaluate, SamplingStep};
use crate::math::Point2;

use super::Chord;

/// Samples a Bézier curve into chords at a fixed parameter step.
///
/// The parameter starts at 0 and is advanced by repeatedly adding the step
/// while it is at most 1. Each iteration yields the chord from `C(t)` to
/// `C(t + step)`, so the last chord can end past `t = 1` when the
/// accumulated parameter does not land on 1 exactly.
pub struct SampleCurve<'a> {
    points: &'a [Point2],
    step: SamplingStep,
}

impl<'a> SampleCurve<'a> {
    /// Creates a new `SampleCurve` operation over a control polygon.
    #[must_use]
    pub fn new(points: &'a [Point2], step: SamplingStep) -> Self {
        Self { points, step }
    }

    /// Executes the sampling, returning the chords in parameter order.
    ///
    /// Fewer than two control points describe no curve and give no chords.
    ///
    /// # Errors
    ///
    /// Returns an error if curve evaluation fails.
    pub fn execute(&self) -> Result<Vec<Chord>> {
        if self.points.len() < 2 {
            return Ok(Vec::new());
        }
        let step = self.step.value();
        let mut chords = Vec::new();
        let mut t = 0.0;
        while t <= 1.0 {
            let start = evaluate(t, self.points)?;
            t += step;
            let end = evaluate(t, self.points)?;
            chords.push(Chord { start, end });
        }
        Ok(chords)
    }
}
