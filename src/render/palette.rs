use crate::error::ConfigError;

use super::Color;

/// A finite, ordered list of colors handed out one per finished curve.
///
/// Colors are consumed in order; once the last one is taken the palette
/// wraps around to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    cursor: usize,
}

impl Palette {
    /// Creates a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::InvalidParameters(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(Self { colors, cursor: 0 })
    }

    /// Returns the color the next [`take`](Self::take) will hand out.
    #[must_use]
    pub fn current(&self) -> Color {
        self.colors[self.cursor]
    }

    /// Hands out the current color and advances to the next one.
    pub fn take(&mut self) -> Color {
        let color = self.current();
        self.cursor = (self.cursor + 1) % self.colors.len();
        if self.cursor == 0 {
            tracing::debug!(len = self.colors.len(), "palette exhausted, wrapping around");
        }
        color
    }

    /// Number of distinct entries before the palette repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; an empty palette cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Purple,
                Color::Pink,
                Color::Orange,
                Color::Brown,
                Color::Black,
            ],
            cursor: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_rejected() {
        assert!(Palette::new(Vec::new()).is_err());
    }

    #[test]
    fn take_consumes_in_order() {
        let mut palette = Palette::default();
        assert_eq!(palette.current(), Color::Red);
        assert_eq!(palette.take(), Color::Red);
        assert_eq!(palette.current(), Color::Blue);
        assert_eq!(palette.take(), Color::Blue);
    }

    #[test]
    fn take_cycles_when_exhausted() {
        let mut palette = Palette::new(vec![Color::Green, Color::Pink]).unwrap();
        let taken: Vec<_> = (0..5).map(|_| palette.take()).collect();
        assert_eq!(
            taken,
            vec![
                Color::Green,
                Color::Pink,
                Color::Green,
                Color::Pink,
                Color::Green
            ]
        );
        assert_eq!(palette.len(), 2);
    }
}
