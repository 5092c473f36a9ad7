//! entity-block - render VHDL entity declarations as SVG block symbols.
//!
//! Parsing, port classification, layout and rendering of a single entity
//! declaration. The symbol shows input, reset and clock ports on the left,
//! outputs on the right and generics at the bottom of the body.

pub mod config;
pub mod style;

mod classify;
mod error;
mod export;
mod layout;

pub use entity_block_core::{color, draw, geometry, semantic};

pub use classify::{Buckets, classify};
pub use error::EntityBlockError;
pub use layout::{
    ColumnMetrics, GenericRow, PortRow, Side, SymbolLayout, TextMetrics, TextRole, compute_layout,
};

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use draw::{SystemTextMeasurer, TextMeasurer};
use export::Exporter;
use semantic::Entity;
use style::Style;

/// Builder for parsing and rendering entity symbols.
///
/// Text is measured with [`SystemTextMeasurer`] unless another measurer is
/// set with [`with_text_measurer`](Self::with_text_measurer).
///
/// # Examples
///
/// ```rust
/// use entity_block::{SymbolBuilder, config::AppConfig, draw::ApproximateTextMeasurer};
///
/// let source = "entity inverter is port (a : in bit; y : out bit); end inverter;";
///
/// let builder = SymbolBuilder::new(AppConfig::default())
///     .with_text_measurer(ApproximateTextMeasurer);
///
/// let entity = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&entity).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug)]
pub struct SymbolBuilder {
    config: AppConfig,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for SymbolBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SymbolBuilder {
    /// Create a new symbol builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measurer: Box::new(SystemTextMeasurer),
        }
    }

    /// Replace the text measurer used for layout.
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a VHDL document and extract its first entity declaration.
    ///
    /// # Errors
    ///
    /// Returns [`EntityBlockError::Parse`] when the document holds no entity
    /// declaration or the entity has no name.
    pub fn parse(&self, source: &str) -> Result<Entity, EntityBlockError> {
        info!(bytes = source.len(); "Parsing VHDL source");

        let entity = entity_block_parser::parse(source)
            .map_err(|err| EntityBlockError::new_parse_error(err, source))?;

        debug!(
            entity = entity.name(),
            generics = entity.generics().len(),
            ports = entity.ports().len();
            "Entity parsed successfully"
        );
        trace!(entity:?; "Parsed entity");

        Ok(entity)
    }

    /// Compute the symbol layout of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`EntityBlockError::Config`] when the style configuration is
    /// invalid.
    pub fn layout(&self, entity: &Entity) -> Result<SymbolLayout, EntityBlockError> {
        let style = self.style()?;
        Ok(compute_layout(entity, &style, self.measurer.as_ref()))
    }

    /// Render an entity to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`EntityBlockError::Config`] when the style configuration is
    /// invalid.
    pub fn render_svg(&self, entity: &Entity) -> Result<String, EntityBlockError> {
        let style = self.style()?;
        let layout = compute_layout(entity, &style, self.measurer.as_ref());

        let svg = export::svg::SvgBuilder::new(entity.name())
            .with_style(&style)
            .build()?;
        let rendered = svg.render_document(&layout).to_string();

        info!(entity = entity.name(); "SVG rendered successfully");
        Ok(rendered)
    }

    /// Render an entity and write the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EntityBlockError::Config`] for an invalid style and
    /// [`EntityBlockError::Export`] when the file cannot be written.
    pub fn write_svg(&self, entity: &Entity, path: &Path) -> Result<(), EntityBlockError> {
        let style = self.style()?;
        let layout = compute_layout(entity, &style, self.measurer.as_ref());

        let svg = export::svg::SvgBuilder::new(path)
            .with_style(&style)
            .build()?;
        svg.export_layout(&layout)?;

        Ok(())
    }

    fn style(&self) -> Result<Style, EntityBlockError> {
        self.config
            .style()
            .resolve()
            .map_err(EntityBlockError::Config)
    }
}
