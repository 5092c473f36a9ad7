//! Text definitions, text runs and text measurement.
//!
//! - [`TextDefinition`] - font family, size and color of a text role
//! - [`Text`] - a renderable single-line text run
//! - [`TextMeasurer`] - the measurement seam used by the layout engine
//! - [`SystemTextMeasurer`] - measurement with real font metrics (cosmic-text)
//! - [`ApproximateTextMeasurer`] - font-independent advance-width estimate
//!
//! Font sizes are points. Measurements are pixels, using 1 pt = 1.33 px and a
//! line height of 1.15 times the pixel size.

use std::{
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, info};
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

const PX_PER_PT: f32 = 1.33;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const APPROXIMATE_ADVANCE_EM: f32 = 0.55;

/// Defines the visual style of a text role.
///
/// # Examples
///
/// ```
/// # use entity_block_core::draw::TextDefinition;
/// # use entity_block_core::color::Color;
/// let mut name = TextDefinition::new();
/// name.set_font_size(10);
/// name.set_color(Some(Color::new("black").unwrap()));
/// assert_eq!(name.font_size(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (a family name or one of `sans-serif`, `serif`, `monospace`).
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the fill color; `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Font size converted to pixels.
    pub fn font_size_px(&self) -> f32 {
        self.font_size as f32 * PX_PER_PT
    }

    /// Height of one line of text in pixels.
    pub fn line_height(&self) -> f32 {
        self.font_size_px() * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 10,
            color: None,
        }
    }
}

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A single-line text run.
///
/// The render position is the anchor point on the vertical middle of the line.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    anchor: TextAnchor,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            anchor: TextAnchor::default(),
        }
    }

    /// Returns this text run with the given horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn content(&self) -> &str {
        self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.content.is_empty() {
            return output;
        }

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.anchor.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", format!("{}pt", self.definition.font_size()));

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));
        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

/// Measures the rendered size of a text string in a given style.
pub trait TextMeasurer: fmt::Debug + Send + Sync {
    /// Returns the bounding box size of `text` in pixels. Empty text measures zero.
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size;
}

/// Text measurement with real font metrics and shaping.
///
/// Backed by a process-wide `FontSystem` that is loaded on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTextMeasurer;

impl TextMeasurer for SystemTextMeasurer {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(text, definition)
    }
}

/// Deterministic text measurement that does not depend on installed fonts.
///
/// Every character advances 0.55 em.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproximateTextMeasurer;

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        approximate_size(text, definition)
    }
}

fn approximate_size(text: &str, definition: &TextDefinition) -> Size {
    let width = text.chars().count() as f32 * definition.font_size_px() * APPROXIMATE_ADVANCE_EM;
    Size::new(width, definition.line_height())
}

/// Owns the shared `FontSystem`, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // A poisoned lock still holds a usable FontSystem
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(definition.font_size_px(), definition.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(family_of(definition.font_family()));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            debug!(text; "No layout runs, falling back to approximate text size");
            return approximate_size(text, definition);
        }

        for last in layout_runs.iter().map(|run| run.glyphs.last()) {
            if let Some(last) = last {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

fn family_of(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        _ => Family::Name(name),
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn definition(size: u16) -> TextDefinition {
        let mut def = TextDefinition::new();
        def.set_font_size(size);
        def
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_size(), 10);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_pixel_metrics() {
        let def = definition(10);
        assert_approx_eq!(f32, def.font_size_px(), 13.3, epsilon = 0.0001);
        assert_approx_eq!(f32, def.line_height(), 15.295, epsilon = 0.0001);
    }

    #[test]
    fn test_approximate_measurer_empty_text() {
        let size = ApproximateTextMeasurer.measure("", &definition(10));
        assert!(size.is_zero());
    }

    #[test]
    fn test_approximate_measurer_scales_with_length_and_size() {
        let measurer = ApproximateTextMeasurer;
        let short = measurer.measure("clk", &definition(10));
        let long = measurer.measure("clk_enable", &definition(10));
        let large = measurer.measure("clk", &definition(20));

        assert_approx_eq!(f32, short.width(), 3.0 * 13.3 * 0.55, epsilon = 0.0001);
        assert!(long.width() > short.width());
        assert!(large.width() > short.width());
        assert!(large.height() > short.height());
    }

    #[test]
    fn test_system_measurer_empty_text() {
        let size = SystemTextMeasurer.measure("", &definition(10));
        assert!(size.is_zero());
    }

    #[test]
    fn test_family_of_generic_names() {
        assert_eq!(family_of("sans-serif"), Family::SansSerif);
        assert_eq!(family_of("monospace"), Family::Monospace);
        assert_eq!(family_of("Helvetica"), Family::Name("Helvetica"));
    }

    #[test]
    fn test_text_render_anchor_and_font() {
        let mut def = definition(8);
        def.set_color(Some(Color::new("#008000").unwrap()));
        let text = Text::new(&def, "active low").with_anchor(TextAnchor::End);

        let rendered: Vec<String> = text
            .render_to_layers(Point::new(40.0, 12.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("text-anchor=\"end\""));
        assert!(rendered[0].contains("font-size=\"8pt\""));
        assert!(rendered[0].contains("dominant-baseline=\"central\""));
        assert!(rendered[0].contains("active low"));
    }

    #[test]
    fn test_text_render_empty_content() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "");
        assert!(text.render_to_layers(Point::default()).is_empty());
        assert_eq!(text.content(), "");
    }
}
