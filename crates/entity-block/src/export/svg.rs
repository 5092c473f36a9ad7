//! SVG export of symbol layouts.

mod symbol;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{
    Document, Node,
    node::{self, element::Element},
};

use crate::{export, layout::SymbolLayout, style::Style};

/// Margin around the content on every side.
const MARGIN: f32 = 10.0;

const DESCRIPTION: &str = "Block converted from VHDL to svg with entity-block.";

/// SVG exporter for symbol layouts.
pub struct Svg {
    path: PathBuf,
    style: Style,
}

/// Builder for [`Svg`].
#[derive(Debug)]
pub struct SvgBuilder<'a> {
    path: PathBuf,
    style: Option<&'a Style>,
}

impl<'a> SvgBuilder<'a> {
    /// Starts an exporter writing to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: &'a Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn build(self) -> Result<Svg, export::Error> {
        let style = self
            .style
            .ok_or_else(|| export::Error::Render("SVG exporter needs a style".to_string()))?;

        Ok(Svg {
            path: self.path,
            style: style.clone(),
        })
    }
}

impl Svg {
    /// Renders a layout into a standalone SVG document.
    ///
    /// The document is the canvas plus a margin on every side, with a
    /// `viewBox` starting at the negative margin so that layout coordinates
    /// are used unchanged.
    pub fn render_document(&self, layout: &SymbolLayout) -> Document {
        let canvas = layout.canvas();
        let width = canvas.width() + 2.0 * MARGIN;
        let height = canvas.height() + 2.0 * MARGIN;

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("{} {} {width} {height}", -MARGIN, -MARGIN),
            )
            .set("width", width)
            .set("height", height)
            .add(text_element("title", layout.title()))
            .add(text_element("desc", DESCRIPTION));

        for node in self.render_symbol(layout).render() {
            doc = doc.add(node);
        }

        debug!(width, height; "SVG document rendered");
        doc
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        let path = self.path.display().to_string();

        info!(path; "Creating SVG file");
        let mut f = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        info!(path; "SVG exported successfully");
        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_layout(&self, layout: &SymbolLayout) -> Result<(), export::Error> {
        let doc = self.render_document(layout);
        self.write_document(doc)
    }
}

fn text_element(name: &str, content: &str) -> Element {
    let mut element = Element::new(name);
    element.append(node::Text::new(content));
    element
}

#[cfg(test)]
mod tests {
    use entity_block_core::{
        draw::ApproximateTextMeasurer,
        semantic::{Declaration, Direction, Entity},
    };

    use super::*;
    use crate::{config::StyleConfig, export::Exporter, layout::compute_layout};

    fn style() -> Style {
        StyleConfig::default().resolve().unwrap()
    }

    // Child nodes are written on their own lines
    fn compact(rendered: &str) -> String {
        rendered.replace('\n', "")
    }

    fn counter() -> Entity {
        Entity::new(
            "counter",
            vec![Declaration::new("WIDTH", Direction::In, "natural", Some("8".into()), "")],
            vec![
                Declaration::new("clk", Direction::In, "std_logic", None, "system clock"),
                Declaration::new("count", Direction::Out, "unsigned", None, ""),
            ],
        )
    }

    #[test]
    fn test_builder_requires_style() {
        let result = SvgBuilder::new("out.svg").build();
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_document_frame() {
        let style = style();
        let layout = compute_layout(&counter(), &style, &ApproximateTextMeasurer);
        let svg = SvgBuilder::new("out.svg").with_style(&style).build().unwrap();
        let rendered = compact(&svg.render_document(&layout).to_string());

        let width = layout.canvas().width() + 20.0;
        let height = layout.canvas().height() + 20.0;
        assert!(rendered.contains(&format!("viewBox=\"-10 -10 {width} {height}\"")));
        assert!(rendered.contains(&format!("width=\"{width}\"")));
        assert!(rendered.contains("<title>counter</title>"));
        assert!(rendered.contains(&format!("<desc>{DESCRIPTION}</desc>")));
    }

    #[test]
    fn test_document_content() {
        let style = style();
        let layout = compute_layout(&counter(), &style, &ApproximateTextMeasurer);
        let svg = SvgBuilder::new("out.svg").with_style(&style).build().unwrap();
        let rendered = compact(&svg.render_document(&layout).to_string());

        for text in [">clk<", ">count<", ">system clock<", ">WIDTH : natural := 8<"] {
            assert!(rendered.contains(text), "missing {text}");
        }
        for layer in ["shadow", "body", "header", "divider", "symbol", "text"] {
            assert!(rendered.contains(&format!("data-layer=\"{layer}\"")), "missing {layer}");
        }
        assert!(rendered.contains("linearGradient"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.svg");
        let style = style();
        let layout = compute_layout(&counter(), &style, &ApproximateTextMeasurer);

        let svg = SvgBuilder::new(&path)
            .with_style(&style)
            .build()
            .unwrap();
        svg.export_layout(&layout).unwrap();

        let written = compact(&std::fs::read_to_string(&path).unwrap());
        assert!(written.contains("<svg"));
        assert!(written.contains("<title>counter</title>"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_export_keeps_non_utf8_path() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.svg"));
        let style = style();
        let layout = compute_layout(&counter(), &style, &ApproximateTextMeasurer);

        let svg = SvgBuilder::new(&path).with_style(&style).build().unwrap();
        svg.export_layout(&layout).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("caf\u{fffd}.svg").exists());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("counter.svg");
        let style = style();
        let layout = compute_layout(&counter(), &style, &ApproximateTextMeasurer);

        let svg = SvgBuilder::new(&path)
            .with_style(&style)
            .build()
            .unwrap();
        assert!(matches!(svg.export_layout(&layout), Err(export::Error::Io(_))));
    }
}
