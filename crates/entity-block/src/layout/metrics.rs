//! Text measurement in layout units.

use entity_block_core::{
    draw::{TextDefinition, TextMeasurer},
    geometry::Size,
};

use crate::style::TextRoles;

/// The text roles of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Name,
    PortType,
    Comment,
    Title,
}

/// Wraps a [`TextMeasurer`] with the text definitions of a style.
///
/// All results are rounded up to whole units so that the computed geometry is
/// integral.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics<'a> {
    measurer: &'a dyn TextMeasurer,
    roles: &'a TextRoles,
}

impl<'a> TextMetrics<'a> {
    pub fn new(measurer: &'a dyn TextMeasurer, roles: &'a TextRoles) -> Self {
        Self { measurer, roles }
    }

    pub fn definition(&self, role: TextRole) -> &'a TextDefinition {
        match role {
            TextRole::Name => &self.roles.name,
            TextRole::PortType => &self.roles.port_type,
            TextRole::Comment => &self.roles.comment,
            TextRole::Title => &self.roles.title,
        }
    }

    /// Measured size of `text`, rounded up.
    pub fn measure(&self, role: TextRole, text: &str) -> Size {
        self.measurer.measure(text, self.definition(role)).ceil()
    }

    pub fn width(&self, role: TextRole, text: &str) -> f32 {
        self.measure(role, text).width()
    }

    /// Height of one line in the role's font, rounded up.
    ///
    /// A row reserves a full line for each of its text runs, including empty
    /// ones, so the height does not depend on the text.
    pub fn line_height(&self, role: TextRole) -> f32 {
        self.definition(role).line_height().ceil()
    }
}
