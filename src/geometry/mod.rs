pub mod casteljau;
pub mod control_point;
pub mod spline;

pub use casteljau::{construction, evaluate, evaluate_traced, Evaluation, Positioned};
pub use control_point::{ControlPoint, ControlPointId};
pub use spline::{SamplingStep, Spline};

use slotmap::SlotMap;

use crate::error::StoreError;
use crate::math::Point2;

/// Arena that owns every control point of an editing session.
///
/// Curves and the editor refer to points by [`ControlPointId`], so a point
/// shared by several curves is a single entity and moving it moves it
/// everywhere. Two points at the same coordinates stay distinct.
#[derive(Debug, Default)]
pub struct ControlPointStore {
    points: SlotMap<ControlPointId, ControlPoint>,
}

impl ControlPointStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a control point and returns its ID.
    pub fn add_point(&mut self, point: ControlPoint) -> ControlPointId {
        self.points.insert(point)
    }

    /// Returns a reference to the control point.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn point(&self, id: ControlPointId) -> Result<&ControlPoint, StoreError> {
        self.points.get(id).ok_or(StoreError::PointNotFound)
    }

    /// Returns a mutable reference to the control point.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn point_mut(&mut self, id: ControlPointId) -> Result<&mut ControlPoint, StoreError> {
        self.points.get_mut(id).ok_or(StoreError::PointNotFound)
    }

    /// Resolves a sequence of IDs to their current positions, keeping order.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID is not in the store.
    pub fn positions(&self, ids: &[ControlPointId]) -> Result<Vec<Point2>, StoreError> {
        ids.iter()
            .map(|&id| self.point(id).map(ControlPoint::position))
            .collect()
    }

    /// Iterates over all points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ControlPointId, &ControlPoint)> {
        self.points.iter()
    }

    /// Iterates mutably over all points in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ControlPointId, &mut ControlPoint)> {
        self.points.iter_mut()
    }

    /// Number of points in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
