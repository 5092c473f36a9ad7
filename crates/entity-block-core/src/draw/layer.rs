//! Layer-based rendering for SVG output.
//!
//! Drawables push their SVG nodes onto a [`LayeredOutput`] tagged with a
//! [`RenderLayer`]. When rendered, the nodes are grouped per layer and emitted
//! bottom to top, so the shadow always sits under the body and text always
//! sits on top regardless of the order in which drawables were rendered.
//!
//! # Example
//!
//! ```
//! # use entity_block_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("clk")));
//! output.add_to_layer(RenderLayer::Shadow, Box::new(Rectangle::new()));
//!
//! // Shadow group first, then text group
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The rendering layers of a symbol.
///
/// Layers are rendered in declaration order: the first variant is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Drop shadow under the body
    Shadow,
    /// Rounded body rectangle
    Body,
    /// Gradient header patch and its gradient definition
    Header,
    /// Line separating ports from generics
    Divider,
    /// Port direction glyphs
    Symbol,
    /// Title, names, types and comments
    Text,
}

impl RenderLayer {
    /// Returns the name used in the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shadow => "shadow",
            Self::Body => "body",
            Self::Header => "header",
            Self::Divider => "divider",
            Self::Symbol => "symbol",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected per rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all nodes from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Groups
    /// are returned bottom to top.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Body, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Symbol, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_groups_same_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Symbol, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Symbol, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_renders_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Header, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Shadow, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|node| node.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"shadow\""));
        assert!(rendered[1].contains("data-layer=\"header\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }
}
