//! Recursive de Casteljau evaluation of Bézier curves.
//!
//! A curve of degree `n - 1` is given by `n` ordered control points. Each
//! level replaces every adjacent pair by the point at fraction `t` along it,
//! until a single point remains.

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Segment};

/// Anything that has a position in the plane and can act as a control point.
pub trait Positioned {
    fn position(&self) -> Point2;
}

impl Positioned for Point2 {
    fn position(&self) -> Point2 {
        *self
    }
}

impl<P: Positioned + ?Sized> Positioned for &P {
    fn position(&self) -> Point2 {
        (**self).position()
    }
}

/// Result of a traced evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The curve point at the requested parameter.
    pub point: Point2,
    /// Number of reduction levels performed, `n - 1` for `n` input points.
    pub depth: usize,
}

/// Evaluates the Bézier curve defined by `points` at parameter `t`.
///
/// `t` is usually in `[0, 1]`, but any real value is accepted and
/// extrapolates the curve. The inputs are not modified.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPointSequence`] if `points` is empty.
pub fn evaluate<P: Positioned>(t: f64, points: &[P]) -> Result<Point2> {
    evaluate_traced(t, points).map(|evaluation| evaluation.point)
}

/// Like [`evaluate`], also reporting how many reduction levels were needed.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPointSequence`] if `points` is empty.
pub fn evaluate_traced<P: Positioned>(t: f64, points: &[P]) -> Result<Evaluation> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSequence.into());
    }
    let level: Vec<Point2> = points.iter().map(Positioned::position).collect();
    Ok(reduce(t, &level, 0))
}

/// Returns every level of the de Casteljau construction at `t`.
///
/// The first level is the input polygon and the last one holds the single
/// curve point, so `n` input points give `n` levels.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPointSequence`] if `points` is empty.
pub fn construction<P: Positioned>(t: f64, points: &[P]) -> Result<Vec<Vec<Point2>>> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSequence.into());
    }
    let mut levels = vec![points.iter().map(Positioned::position).collect::<Vec<_>>()];
    while let Some(last) = levels.last().filter(|level| level.len() > 1) {
        let next = interpolate_level(t, last);
        levels.push(next);
    }
    Ok(levels)
}

fn reduce(t: f64, level: &[Point2], depth: usize) -> Evaluation {
    match level {
        [point] => Evaluation {
            point: *point,
            depth,
        },
        _ => reduce(t, &interpolate_level(t, level), depth + 1),
    }
}

/// One reduction step: the point at `t` along each adjacent pair.
fn interpolate_level(t: f64, level: &[Point2]) -> Vec<Point2> {
    level
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]).point_at(t))
        .collect()
}
