use std::time::Duration;

use crate::error::Result;
use crate::render::DrawSink;

use super::{EditorState, InputEvent, Mode};

/// Drives an [`EditorState`] from host input and a frame clock.
///
/// The host delivers events and ticks one at a time; each runs to
/// completion before the next one starts.
#[derive(Debug)]
pub struct Viewer {
    state: EditorState,
    last_frame: Option<Duration>,
}

impl Viewer {
    /// Creates a viewer around an editor; the first tick always renders.
    #[must_use]
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            last_frame: None,
        }
    }

    /// Returns the driven editor state.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Applies one input event to the editor. Returns the mode after it.
    pub fn handle(&mut self, event: &InputEvent) -> Mode {
        match event {
            InputEvent::PointerDown(pointer) => self.state.pointer_down(pointer.local_position()),
            InputEvent::PointerMove(pointer) => self.state.pointer_move(pointer.local_position()),
            InputEvent::PointerUp(_) => self.state.pointer_up(),
            InputEvent::ToggleAuthoring => {
                self.state.toggle_authoring();
            }
        }
        self.state.mode()
    }

    /// Renders a frame if at least the configured frame interval has passed
    /// since the previous one. `now` is any monotonic timestamp.
    ///
    /// Returns whether a frame was drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn tick(&mut self, now: Duration, sink: &mut impl DrawSink) -> Result<bool> {
        let interval = self.state.config().frame_interval;
        let due = self
            .last_frame
            .is_none_or(|last| now.saturating_sub(last) >= interval);
        if !due {
            return Ok(false);
        }
        self.state.render(sink)?;
        self.last_frame = Some(now);
        tracing::trace!(?now, "frame rendered");
        Ok(true)
    }

    /// Ends the session, handing back the editor state.
    #[must_use]
    pub fn into_state(self) -> EditorState {
        self.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::editor::{PointerEvent, SurfaceRect};
    use crate::math::Point2;
    use crate::render::{CommandRecorder, DrawCommand};

    fn pointer(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(Point2::new(x, y), SurfaceRect::new(10.0, 20.0))
    }

    #[test]
    fn events_use_surface_local_coordinates() {
        let mut viewer = Viewer::new(EditorState::new());
        assert_eq!(viewer.handle(&InputEvent::ToggleAuthoring), Mode::Authoring);
        viewer.handle(&InputEvent::PointerDown(pointer(60.0, 70.0)));
        viewer.handle(&InputEvent::PointerUp(pointer(60.0, 70.0)));
        viewer.handle(&InputEvent::PointerDown(pointer(160.0, 70.0)));
        viewer.handle(&InputEvent::PointerUp(pointer(160.0, 70.0)));
        assert_eq!(viewer.handle(&InputEvent::ToggleAuthoring), Mode::Idle);

        let state = viewer.into_state();
        let spline = &state.splines()[0];
        assert_eq!(
            state.points().positions(spline.points()).unwrap(),
            vec![Point2::new(50.0, 50.0), Point2::new(150.0, 50.0)]
        );
    }

    #[test]
    fn new_point_is_not_dragged_until_pressed_again() {
        let mut viewer = Viewer::new(EditorState::new());
        viewer.handle(&InputEvent::ToggleAuthoring);
        viewer.handle(&InputEvent::PointerDown(pointer(60.0, 70.0)));
        viewer.handle(&InputEvent::PointerMove(pointer(90.0, 100.0)));
        viewer.handle(&InputEvent::PointerUp(pointer(90.0, 100.0)));
        viewer.handle(&InputEvent::ToggleAuthoring);

        let id = viewer.state().finalized_points()[0];
        assert_eq!(
            viewer.state().point(id).unwrap().position(),
            Point2::new(50.0, 50.0)
        );

        viewer.handle(&InputEvent::PointerDown(pointer(60.0, 70.0)));
        viewer.handle(&InputEvent::PointerMove(pointer(90.0, 100.0)));
        viewer.handle(&InputEvent::PointerUp(pointer(90.0, 100.0)));
        let point = viewer.state().point(id).unwrap();
        assert_eq!(point.position(), Point2::new(80.0, 80.0));
        assert!(!point.is_dragging());
    }

    #[test]
    fn tick_respects_frame_interval() {
        let mut viewer = Viewer::new(EditorState::new());
        let mut rec = CommandRecorder::new();

        assert!(viewer.tick(Duration::from_millis(0), &mut rec).unwrap());
        assert!(!viewer.tick(Duration::from_millis(10), &mut rec).unwrap());
        assert!(viewer.tick(Duration::from_millis(16), &mut rec).unwrap());
        assert!(!viewer.tick(Duration::from_millis(31), &mut rec).unwrap());
        assert!(viewer.tick(Duration::from_millis(40), &mut rec).unwrap());

        let clears = rec
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .count();
        assert_eq!(clears, 3);
    }
}
