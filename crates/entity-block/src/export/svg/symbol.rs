//! Drawing of the symbol body, ports and generics.

use log::trace;

use entity_block_core::{
    draw::{
        Drawable, HeaderPatch, HorizontalLine, LayeredOutput, PortSymbol, RenderLayer,
        RoundedRectangle, Text, TextAnchor,
    },
    geometry::Point,
};

use super::Svg;
use crate::layout::{GenericRow, PortRow, Side, SymbolLayout};

/// Offset of the drop shadow from the body.
const SHADOW_OFFSET: Point = Point::new(5.0, 3.0);

const GRADIENT_ID: &str = "header-gradient";

impl Svg {
    pub(super) fn render_symbol(&self, layout: &SymbolLayout) -> LayeredOutput {
        let mut output = self.render_body(layout);
        for row in layout.ports() {
            output.merge(self.render_port(row));
        }
        for row in layout.generics() {
            output.merge(self.render_generic(row));
        }
        output
    }

    fn render_body(&self, layout: &SymbolLayout) -> LayeredOutput {
        let style = &self.style;
        let body = layout.body();
        let radius = style.corner_radius();
        let mut output = LayeredOutput::new();

        let shadow = RoundedRectangle::new(body.to_size(), radius, style.shadow(), RenderLayer::Shadow);
        output.merge(shadow.render_to_layers(body.translate(SHADOW_OFFSET).min_point()));

        let rect = RoundedRectangle::new(body.to_size(), radius, style.background(), RenderLayer::Body)
            .with_stroke(style.border());
        output.merge(rect.render_to_layers(body.min_point()));

        let header = layout.header();
        let patch = HeaderPatch::new(
            header.to_size(),
            radius,
            style.header(),
            style.border(),
            GRADIENT_ID,
        );
        output.merge(patch.render_to_layers(header.min_point()));

        if let Some(start) = layout.divider() {
            let line = HorizontalLine::new(body.width(), style.border());
            output.merge(line.render_to_layers(start));
        }

        let title = Text::new(&style.text().title, layout.title()).with_anchor(TextAnchor::Middle);
        output.merge(title.render_to_layers(layout.title_at()));

        output
    }

    fn render_port(&self, row: &PortRow) -> LayeredOutput {
        let text = self.style.text();
        let mirrored = row.side() == Side::Right;
        let (outer, inner) = if mirrored {
            (TextAnchor::Start, TextAnchor::End)
        } else {
            (TextAnchor::End, TextAnchor::Start)
        };
        trace!(name = row.name(), direction:% = row.direction(), mirrored; "Rendering port");

        let mut output = LayeredOutput::new();
        let glyph = PortSymbol::new(row.direction(), self.style.port_color(), self.style.port_stroke())
            .mirrored(mirrored);
        output.merge(glyph.render_to_layers(row.symbol_at()));

        let name = Text::new(&text.name, row.name()).with_anchor(outer);
        output.merge(name.render_to_layers(row.name_at()));

        let type_text = Text::new(&text.port_type, row.type_text()).with_anchor(inner);
        output.merge(type_text.render_to_layers(row.type_at()));

        let comment = Text::new(&text.comment, row.comment()).with_anchor(inner);
        output.merge(comment.render_to_layers(row.comment_at()));

        output
    }

    fn render_generic(&self, row: &GenericRow) -> LayeredOutput {
        let text = self.style.text();
        let mut output = LayeredOutput::new();

        let declaration = Text::new(&text.port_type, row.text()).with_anchor(TextAnchor::Start);
        output.merge(declaration.render_to_layers(row.text_at()));

        let comment = Text::new(&text.comment, row.comment()).with_anchor(TextAnchor::Start);
        output.merge(comment.render_to_layers(row.comment_at()));

        output
    }
}
