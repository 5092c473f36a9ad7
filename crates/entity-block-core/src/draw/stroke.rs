//! Stroke definitions for outlines, glyphs and the divider line.
//!
//! - [`StrokeDefinition`]: color, width, cap and join of a stroke
//! - [`StrokeCap`] / [`StrokeJoin`]: SVG `stroke-linecap` / `stroke-linejoin` values
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to an SVG element
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `cap` | `stroke-linecap` |
//! | `join` | `stroke-linejoin` |

use crate::color::Color;

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Defines how line corners are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use entity_block_core::draw::{StrokeDefinition, StrokeCap};
/// use entity_block_core::color::Color;
///
/// let stroke = StrokeDefinition::rounded(Color::new("#235676").unwrap(), 2.0);
/// assert_eq!(stroke.cap(), StrokeCap::Round);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with butt caps and miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a stroke with round caps and round joins.
    ///
    /// Every outline of a symbol is drawn this way.
    pub fn rounded(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_cap(StrokeCap::Round);
        stroke.set_join(StrokeJoin::Round);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use entity_block_core::draw::StrokeDefinition;
/// use entity_block_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 100);
///
/// let line = entity_block_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value())
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_rounded() {
        let stroke = StrokeDefinition::rounded(Color::new("red").unwrap(), 3.0);
        assert_eq!(stroke.width(), 3.0);
        assert_eq!(stroke.cap(), StrokeCap::Round);
        assert_eq!(stroke.join(), StrokeJoin::Round);
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::rounded(Color::new("blue").unwrap(), 2.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke);
        let rendered = line.to_string();

        assert!(rendered.contains("stroke-width=\"2\""));
        assert!(rendered.contains("stroke-linecap=\"round\""));
        assert!(rendered.contains("stroke-linejoin=\"round\""));
    }
}
