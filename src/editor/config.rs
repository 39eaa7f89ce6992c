use std::time::Duration;

use crate::error::ConfigError;
use crate::geometry::SamplingStep;
use crate::render::{CanvasBounds, Palette};

/// Tunable parameters of an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Drawable area; dragged points must stay fully inside it.
    pub canvas: CanvasBounds,
    /// Radius given to newly created control points.
    pub point_radius: f64,
    /// Parameter step used to sample every finished curve.
    pub sampling_step: SamplingStep,
    /// Colors handed out to finished curves, in order.
    pub palette: Palette,
    /// Minimum time between two rendered frames.
    pub frame_interval: Duration,
}

impl EditorConfig {
    /// Checks that the configuration describes a usable editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is empty or the point radius is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let CanvasBounds { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidParameters(format!(
                "canvas must have a positive size, got {width} x {height}"
            )));
        }
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(ConfigError::InvalidParameters(format!(
                "point radius must be positive, got {}",
                self.point_radius
            )));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasBounds::default(),
            point_radius: 8.0,
            sampling_step: SamplingStep::default(),
            palette: Palette::default(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_canvas() {
        let config = EditorConfig {
            canvas: CanvasBounds::new(0.0, 100.0),
            ..EditorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_radius() {
        for radius in [0.0, -3.0, f64::INFINITY] {
            let config = EditorConfig {
                point_radius: radius,
                ..EditorConfig::default()
            };
            assert!(config.validate().is_err(), "radius {radius} accepted");
        }
    }
}
