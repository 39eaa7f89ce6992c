mod sample_curve;

pub use sample_curve::SampleCurve;

use crate::math::Point2;

/// A straight piece of a sampled curve, from `C(t)` to `C(t + step)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub start: Point2,
    pub end: Point2,
}
