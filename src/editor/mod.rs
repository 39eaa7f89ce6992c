//! Interactive editing protocol: pointer events and the authoring toggle
//! mutate an [`EditorState`], which the render loop then draws.

mod config;
mod event;
mod viewer;

pub use config::EditorConfig;
pub use event::{InputEvent, PointerEvent, SurfaceRect};
pub use viewer::Viewer;

use crate::error::{Result, StoreError};
use crate::geometry::{ControlPoint, ControlPointId, ControlPointStore, Spline};
use crate::math::Point2;
use crate::render::{Color, DrawSink, Palette};

/// Whether pointer presses currently collect points for a new curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Authoring,
}

/// How the authoring toggle should present itself for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeIndicator {
    pub label: &'static str,
    pub color: Color,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Idle => Self::Authoring,
            Self::Authoring => Self::Idle,
        }
    }

    /// Label and color of the toggle control while in this mode.
    #[must_use]
    pub fn indicator(self) -> ModeIndicator {
        match self {
            Self::Idle => ModeIndicator {
                label: "New Curve",
                color: Color::Grey,
            },
            Self::Authoring => ModeIndicator {
                label: "Validate",
                color: Color::Red,
            },
        }
    }
}

/// All curves and control points of a session, plus the drag/authoring state.
///
/// Every control point lives once in the store. `finalized` lists the points
/// attached to finished curves (no duplicates), `in_progress` the sequence
/// collected for the curve being authored (a point may repeat, and may also
/// be finalized).
#[derive(Debug)]
pub struct EditorState {
    config: EditorConfig,
    store: ControlPointStore,
    finalized: Vec<ControlPointId>,
    in_progress: Vec<ControlPointId>,
    splines: Vec<Spline>,
    mode: Mode,
    palette: Palette,
}

impl EditorState {
    /// Creates an empty editor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }

    /// Creates an empty editor with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        Self {
            palette: config.palette.clone(),
            config,
            store: ControlPointStore::new(),
            finalized: Vec::new(),
            in_progress: Vec::new(),
            splines: Vec::new(),
            mode: Mode::Idle,
        }
    }

    /// Returns the configuration the editor was created with.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Finished curves, oldest first.
    #[must_use]
    pub fn splines(&self) -> &[Spline] {
        &self.splines
    }

    /// Points attached to at least one finished curve, in attachment order.
    #[must_use]
    pub fn finalized_points(&self) -> &[ControlPointId] {
        &self.finalized
    }

    /// Point sequence of the curve being authored, in press order.
    #[must_use]
    pub fn in_progress_points(&self) -> &[ControlPointId] {
        &self.in_progress
    }

    /// Returns a control point of this session.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this editor.
    pub fn point(&self, id: ControlPointId) -> std::result::Result<&ControlPoint, StoreError> {
        self.store.point(id)
    }

    /// The arena holding every control point of the session.
    #[must_use]
    pub fn points(&self) -> &ControlPointStore {
        &self.store
    }

    /// Switches between idle and authoring.
    ///
    /// Entering authoring starts an empty point sequence. Leaving it turns
    /// the collected sequence into a new spline with the next palette color
    /// and attaches its points to the finalized set. Returns the new mode.
    pub fn toggle_authoring(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        match self.mode {
            Mode::Authoring => {
                self.in_progress.clear();
                tracing::debug!("authoring started");
            }
            Mode::Idle => self.finish_spline(),
        }
        self.mode
    }

    fn finish_spline(&mut self) {
        let points = std::mem::take(&mut self.in_progress);
        for &id in &points {
            if !self.finalized.contains(&id) {
                self.finalized.push(id);
            }
        }
        let color = self.palette.take();
        tracing::debug!(
            points = points.len(),
            color = %color,
            splines = self.splines.len() + 1,
            "spline finalized"
        );
        self.splines
            .push(Spline::new(points, self.config.sampling_step, color));
    }

    /// Handles a pointer press at `position` (canvas coordinates).
    ///
    /// Every point under the pointer starts dragging; while authoring each of
    /// them is also appended to the curve in progress. If nothing is hit
    /// while authoring, a new point is created there and appended.
    pub fn pointer_down(&mut self, position: Point2) {
        let mut hit_any = false;
        for id in self.hit_candidates() {
            let Some(point) = self.store.point_mut(id).ok().filter(|p| p.hit(position)) else {
                continue;
            };
            point.set_dragging(true);
            hit_any = true;
            tracing::trace!(x = position.x, y = position.y, "drag started");
            if self.mode == Mode::Authoring {
                self.in_progress.push(id);
            }
        }

        if !hit_any && self.mode == Mode::Authoring {
            let point = ControlPoint::new(position, self.config.point_radius, self.palette.current());
            let id = self.store.add_point(point);
            self.in_progress.push(id);
            tracing::debug!(x = position.x, y = position.y, "control point created");
        }
    }

    /// Moves every dragged point towards `position`, axis by axis, keeping
    /// each point's disc inside the canvas.
    pub fn pointer_move(&mut self, position: Point2) {
        let canvas = self.config.canvas;
        for (_, point) in self.store.iter_mut() {
            if point.is_dragging() {
                point.drag_to(position, &canvas);
            }
        }
    }

    /// Ends every drag, whatever the mode.
    pub fn pointer_up(&mut self) {
        for (_, point) in self.store.iter_mut() {
            point.set_dragging(false);
        }
        tracing::trace!("drag released");
    }

    /// Draws one frame: canvas outline, every finished spline, then every
    /// control point so loose points stay visible.
    ///
    /// # Errors
    ///
    /// Returns an error if a spline refers to a point missing from the store.
    pub fn render(&self, sink: &mut impl DrawSink) -> Result<()> {
        self.config.canvas.draw_frame(sink);
        for spline in &self.splines {
            spline.render(&self.store, sink)?;
        }
        for id in self.hit_candidates() {
            self.store.point(id)?.render(sink);
        }
        Ok(())
    }

    /// Finalized points, then in-progress points not seen yet.
    fn hit_candidates(&self) -> Vec<ControlPointId> {
        let mut ids = self.finalized.clone();
        for &id in &self.in_progress {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
