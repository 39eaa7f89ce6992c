//! Scripted editing session rendered into a command recorder.
//!
//! ```text
//! cargo run --example session
//! RUST_LOG=bezier_sketch=trace cargo run --example session
//! ```
//!
//! Authors two curves sharing one control point, drags the shared point,
//! and prints a summary of the last frame.

use std::time::Duration;

use bezier_sketch::editor::{EditorState, InputEvent, PointerEvent, SurfaceRect, Viewer};
use bezier_sketch::geometry::construction;
use bezier_sketch::math::Point2;
use bezier_sketch::render::{CommandRecorder, DrawCommand};
use bezier_sketch::SketchError;

fn main() -> Result<(), SketchError> {
    // Default: WARN for everything, INFO for the editor core.
    // Override with RUST_LOG env var (e.g. RUST_LOG=bezier_sketch=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("bezier_sketch=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let surface = SurfaceRect::new(0.0, 0.0);
    let at = |x: f64, y: f64| PointerEvent::new(Point2::new(x, y), surface);
    let click = |x: f64, y: f64| [InputEvent::PointerDown(at(x, y)), InputEvent::PointerUp(at(x, y))];

    let mut script = vec![InputEvent::ToggleAuthoring];
    for (x, y) in [(100.0, 400.0), (150.0, 100.0), (400.0, 100.0), (450.0, 400.0)] {
        script.extend(click(x, y));
    }
    script.push(InputEvent::ToggleAuthoring);
    script.push(InputEvent::ToggleAuthoring);
    for (x, y) in [(450.0, 400.0), (600.0, 500.0), (700.0, 300.0)] {
        script.extend(click(x, y));
    }
    script.push(InputEvent::ToggleAuthoring);
    script.extend([
        InputEvent::PointerDown(at(450.0, 400.0)),
        InputEvent::PointerMove(at(480.0, 420.0)),
        InputEvent::PointerUp(at(480.0, 420.0)),
    ]);

    let mut viewer = Viewer::new(EditorState::new());
    let mut sink = CommandRecorder::new();
    let mut now = Duration::ZERO;
    for event in &script {
        viewer.handle(event);
        now += Duration::from_millis(20);
        if viewer.tick(now, &mut sink)? {
            sink.take();
        }
    }
    viewer.tick(now + Duration::from_secs(1), &mut sink)?;

    let state = viewer.state();
    for (index, spline) in state.splines().iter().enumerate() {
        let polygon = state.points().positions(spline.points())?;
        let levels = construction(0.5, &polygon)?;
        if let Some(mid) = levels.last().and_then(|level| level.first()) {
            tracing::info!(
                index,
                color = %spline.color(),
                points = polygon.len(),
                mid_x = mid.x,
                mid_y = mid.y,
                "curve"
            );
        }
    }

    let strokes = sink
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::Stroke))
        .count();
    tracing::info!(
        splines = state.splines().len(),
        points = state.finalized_points().len(),
        strokes,
        "last frame"
    );
    Ok(())
}
