//! Fonts and text measurement.
//!
//! The layout engine never rasterizes text. It only needs the size a run
//! would take, which comes from a [`TextMeasurer`].

use serde::{Deserialize, Serialize};

use super::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Regular,
    Italic,
}

impl FontStyle {
    pub fn toggled(self) -> Self {
        match self {
            FontStyle::Regular => FontStyle::Italic,
            FontStyle::Italic => FontStyle::Regular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// Em size in pixels.
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// The regular and italic faces used for card text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fonts {
    pub regular: FontSpec,
    pub italic: FontSpec,
}

impl Fonts {
    pub fn get(&self, style: FontStyle) -> &FontSpec {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Italic => &self.italic,
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            regular: FontSpec::new("Matrix", 12.0),
            italic: FontSpec::new("Matrix Italic", 12.0),
        }
    }
}

/// Measures the pixel size of a run of text.
///
/// Trailing spaces count towards the width.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Fixed-advance metrics, proportional to the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonospaceMeasurer {
    /// Advance per character as a fraction of the em size.
    pub advance: f32,
    /// Line height as a fraction of the em size.
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * font.size * self.advance, font.size * self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(FontStyle::Regular.toggled(), FontStyle::Italic);
        assert_eq!(FontStyle::Italic.toggled().toggled(), FontStyle::Italic);
    }

    #[test]
    fn test_monospace_counts_trailing_spaces() {
        let m = MonospaceMeasurer::default();
        let font = FontSpec::new("Test", 20.0);
        assert_eq!(m.measure("ab ", &font), Size::new(30.0, 25.0));
        assert_eq!(m.measure("", &font).width, 0.0);
    }

    #[test]
    fn test_fonts_by_style() {
        let fonts = Fonts::default();
        assert_eq!(fonts.get(FontStyle::Italic).family, "Matrix Italic");
    }
}
