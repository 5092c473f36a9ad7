//! Drawing primitives for symbol rendering.
//!
//! All drawable components implement the [`Drawable`] trait and render to
//! layered SVG output (see [`RenderLayer`]), which is ordered when the final
//! document is assembled.

mod layer;
mod shape;
mod stroke;
mod symbol;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{HeaderPatch, HorizontalLine, RoundedRectangle};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use symbol::PortSymbol;
pub use text::{
    ApproximateTextMeasurer, SystemTextMeasurer, Text, TextAnchor, TextDefinition, TextMeasurer,
};

use crate::geometry::Point;

/// Trait for symbol elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Each implementation documents which point `position` refers to.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
