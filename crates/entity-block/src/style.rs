//! The resolved, immutable style of a symbol.
//!
//! A [`Style`] is produced by [`StyleConfig::resolve`](crate::config::StyleConfig::resolve)
//! and passed by reference into layout and rendering.

use entity_block_core::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
};

/// Text definitions for each text role of the symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRoles {
    /// Port names.
    pub name: TextDefinition,
    /// Port types and generic declarations.
    pub port_type: TextDefinition,
    /// Port and generic comments.
    pub comment: TextDefinition,
    /// The entity name in the header.
    pub title: TextDefinition,
}

/// Validated style values.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub(crate) text: TextRoles,
    pub(crate) background: Color,
    pub(crate) shadow: Color,
    pub(crate) header: (Color, Color),
    pub(crate) border: StrokeDefinition,
    pub(crate) port_stroke: StrokeDefinition,
    pub(crate) port_color: Color,
    pub(crate) corner_radius: f32,
    pub(crate) spacing: f32,
    pub(crate) simplified: bool,
}

impl Style {
    pub fn text(&self) -> &TextRoles {
        &self.text
    }

    /// Fill of the body rectangle.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shadow(&self) -> Color {
        self.shadow
    }

    /// Left and right stop colors of the header gradient.
    pub fn header(&self) -> (Color, Color) {
        self.header
    }

    /// Outline of the body, header and divider.
    pub fn border(&self) -> &StrokeDefinition {
        &self.border
    }

    /// Outline of the port glyphs.
    pub fn port_stroke(&self) -> &StrokeDefinition {
        &self.port_stroke
    }

    /// Fill of the port glyphs.
    pub fn port_color(&self) -> Color {
        self.port_color
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// The spacing unit between columns.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Whether types, comments and generics are left out.
    pub fn simplified(&self) -> bool {
        self.simplified
    }
}
