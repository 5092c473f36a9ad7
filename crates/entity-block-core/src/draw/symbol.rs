//! Port direction glyphs.
//!
//! Each glyph is a filled, stroked 10 x 10 path centered on the body edge:
//!
//! | Direction | Glyph |
//! |-----------|-------|
//! | `in` | triangle pointing left |
//! | `out` | triangle pointing right |
//! | `inout` | diamond |
//! | `buffer`, `linkage` | square |
//!
//! Glyphs of the right-hand column are mirrored horizontally.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
    semantic::Direction,
};

/// Half of the glyph edge length.
const HALF: f32 = 5.0;

/// A direction glyph for a single port.
#[derive(Debug, Clone)]
pub struct PortSymbol<'a> {
    direction: Direction,
    mirrored: bool,
    fill: Color,
    stroke: &'a StrokeDefinition,
}

impl<'a> PortSymbol<'a> {
    /// Creates a glyph for a port on the left column.
    pub fn new(direction: Direction, fill: Color, stroke: &'a StrokeDefinition) -> Self {
        Self {
            direction,
            mirrored: false,
            fill,
            stroke,
        }
    }

    /// Mirrors the glyph for the right-hand column.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Returns the path data of the glyph centered on `center`.
    pub fn path_data(&self, center: Point) -> String {
        let (x, y) = (center.x(), center.y());
        let m = if self.mirrored { -HALF } else { HALF };
        match self.direction {
            Direction::In => format!(
                "M {} {} L {} {} L {} {} Z",
                x + m,
                y - HALF,
                x + m,
                y + HALF,
                x - m,
                y
            ),
            Direction::Out => format!(
                "M {} {} L {} {} L {} {} Z",
                x - m,
                y - HALF,
                x - m,
                y + HALF,
                x + m,
                y
            ),
            Direction::InOut => format!(
                "M {} {} L {} {} L {} {} L {} {} Z",
                x + HALF,
                y,
                x,
                y + HALF,
                x - HALF,
                y,
                x,
                y - HALF
            ),
            Direction::Buffer | Direction::Linkage => format!(
                "M {} {} L {} {} L {} {} L {} {} Z",
                x + HALF,
                y + HALF,
                x - HALF,
                y + HALF,
                x - HALF,
                y - HALF,
                x + HALF,
                y - HALF
            ),
        }
    }
}

impl Drawable for PortSymbol<'_> {
    /// `position` is the center of the glyph.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = svg_element::Path::new()
            .set("d", self.path_data(position))
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let path = crate::apply_stroke!(path, self.stroke);

        output.add_to_layer(RenderLayer::Symbol, Box::new(path));
        output
    }
}
