//! Color handling for entity-block symbols
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for the style settings
//! and the SVG renderer.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_block_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The alpha value is between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#235676").is_ok());
        assert!(Color::new("darkgreen").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_alpha() {
        let opaque = Color::new("#fffff3").unwrap();
        assert!((opaque.alpha() - 1.0).abs() < 0.001);

        let translucent = Color::new("rgb(0 0 0 / 0.25)").unwrap();
        assert!((translucent.alpha() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("blue").unwrap();
        assert!(!color.to_string().is_empty());
    }
}
