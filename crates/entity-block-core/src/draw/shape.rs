//! Body shapes of a symbol: rounded rectangles, the gradient header patch and
//! the divider line.
//!
//! All shapes are positioned by their top-left corner.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// A filled rectangle with rounded corners, optionally outlined.
///
/// Used for both the body and its drop shadow.
#[derive(Debug, Clone)]
pub struct RoundedRectangle<'a> {
    size: Size,
    radius: f32,
    fill: Color,
    stroke: Option<&'a StrokeDefinition>,
    layer: RenderLayer,
}

impl<'a> RoundedRectangle<'a> {
    pub fn new(size: Size, radius: f32, fill: Color, layer: RenderLayer) -> Self {
        Self {
            size,
            radius,
            fill,
            stroke: None,
            layer,
        }
    }

    /// Outlines the rectangle with the given stroke.
    pub fn with_stroke(mut self, stroke: &'a StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

impl Drawable for RoundedRectangle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.radius)
            .set("ry", self.radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        match self.stroke {
            Some(stroke) => {
                let rect = crate::apply_stroke!(rect, stroke);
                output.add_to_layer(self.layer, Box::new(rect));
            }
            None => output.add_to_layer(self.layer, Box::new(rect)),
        }

        output
    }
}

/// The title header: a patch with rounded top corners and square bottom
/// corners, filled with a horizontal two-color gradient.
#[derive(Debug, Clone)]
pub struct HeaderPatch<'a> {
    size: Size,
    radius: f32,
    left: Color,
    right: Color,
    stroke: &'a StrokeDefinition,
    gradient_id: &'a str,
}

impl<'a> HeaderPatch<'a> {
    /// Creates a header patch. `gradient_id` must be unique within the document.
    pub fn new(
        size: Size,
        radius: f32,
        (left, right): (Color, Color),
        stroke: &'a StrokeDefinition,
        gradient_id: &'a str,
    ) -> Self {
        Self {
            size,
            radius,
            left,
            right,
            stroke,
            gradient_id,
        }
    }

    /// Returns the outline path data of the patch placed at `position`.
    pub fn path_data(&self, position: Point) -> String {
        let bounds = position.to_bounds(self.size);
        let r = self.radius;
        format!(
            "M {} {} A {r} {r} 0 0 0 {} {} L {} {} L {} {} L {} {} A {r} {r} 0 0 0 {} {} Z",
            bounds.min_x() + r,
            bounds.min_y(),
            bounds.min_x(),
            bounds.min_y() + r,
            bounds.min_x(),
            bounds.max_y(),
            bounds.max_x(),
            bounds.max_y(),
            bounds.max_x(),
            bounds.min_y() + r,
            bounds.max_x() - r,
            bounds.min_y(),
        )
    }

    fn gradient(&self, position: Point) -> svg_element::Definitions {
        let bounds = position.to_bounds(self.size);
        let stop = |offset: f32, color: Color| {
            svg_element::Stop::new()
                .set("offset", offset)
                .set("stop-color", color.to_string())
                .set("stop-opacity", color.alpha())
        };

        let gradient = svg_element::LinearGradient::new()
            .set("id", self.gradient_id)
            .set("gradientUnits", "userSpaceOnUse")
            .set("x1", bounds.min_x())
            .set("y1", bounds.min_y())
            .set("x2", bounds.max_x())
            .set("y2", bounds.min_y())
            .add(stop(0.0, self.left))
            .add(stop(1.0, self.right));

        svg_element::Definitions::new().add(gradient)
    }
}

impl Drawable for HeaderPatch<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = svg_element::Path::new()
            .set("d", self.path_data(position))
            .set("fill", format!("url(#{})", self.gradient_id));
        let path = crate::apply_stroke!(path, self.stroke);

        output.add_to_layer(RenderLayer::Header, Box::new(self.gradient(position)));
        output.add_to_layer(RenderLayer::Header, Box::new(path));
        output
    }
}

/// A horizontal line of the given length.
#[derive(Debug, Clone)]
pub struct HorizontalLine<'a> {
    length: f32,
    stroke: &'a StrokeDefinition,
}

impl<'a> HorizontalLine<'a> {
    pub fn new(length: f32, stroke: &'a StrokeDefinition) -> Self {
        Self { length, stroke }
    }
}

impl Drawable for HorizontalLine<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", position.x() + self.length)
            .set("y2", position.y());
        let line = crate::apply_stroke!(line, self.stroke);

        output.add_to_layer(RenderLayer::Divider, Box::new(line));
        output
    }
}
