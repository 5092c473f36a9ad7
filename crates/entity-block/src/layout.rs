//! Symbol layout.
//!
//! [`compute_layout`] turns an [`Entity`] and a [`Style`] into a
//! [`SymbolLayout`]: column widths, row height, canvas size and the absolute
//! position of every element that the renderer draws. It is a pure single
//! pass; the same inputs always produce the same layout.
//!
//! The canvas is organised as follows, with `s` the spacing unit:
//!
//! ```text
//!  left outer | s | body (rect width)                      | s | right outer
//!             |   +-----------------------------------------+   |
//!             |   | header (title height)                   |   |
//!   in names  |  >|  types / comments     types / comments  |< | out names
//!   ...       |   |  ...                                    |   |
//!             |   |-----------------------------------------|   |
//!             |   |  generics                               |   |
//!             |   |  (title height)                         |   |
//!             |   +-----------------------------------------+   |
//! ```
//!
//! Text positions are anchor points on the vertical middle of their line.

mod metrics;

pub use metrics::{TextMetrics, TextRole};

use log::{debug, trace};

use entity_block_core::{
    draw::TextMeasurer,
    geometry::{Bounds, Point, Size},
    semantic::{Declaration, Direction, Entity},
};

use crate::{classify::classify, style::Style};

/// Which column of the symbol a port is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Measured column widths and row heights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnMetrics {
    /// Widest port name on the left.
    pub left_outer: f32,
    /// Widest type or comment on the left.
    pub left_inner: f32,
    /// Widest port name on the right.
    pub right_outer: f32,
    /// Widest type or comment on the right.
    pub right_inner: f32,
    /// Widest generic declaration or generic comment.
    pub generic_width: f32,
    pub title_width: f32,
    /// Height of one port or generic row: a name line plus a comment line.
    pub row_height: f32,
    pub name_height: f32,
    pub comment_height: f32,
    /// Header height, at least the corner radius.
    pub title_height: f32,
}

/// A positioned port row.
#[derive(Debug, Clone, PartialEq)]
pub struct PortRow {
    side: Side,
    direction: Direction,
    name: String,
    type_text: String,
    comment: String,
    top: f32,
    name_at: Point,
    type_at: Point,
    comment_at: Point,
    symbol_at: Point,
}

impl PortRow {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type with its default, empty in simplified mode.
    pub fn type_text(&self) -> &str {
        &self.type_text
    }

    /// The comment, empty in simplified mode.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Top edge of the row.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Outer end of the name: its right end on the left side, its left end
    /// on the right side.
    pub fn name_at(&self) -> Point {
        self.name_at
    }

    /// Inner start of the type: its left end on the left side, its right end
    /// on the right side.
    pub fn type_at(&self) -> Point {
        self.type_at
    }

    /// Aligned like [`type_at`](Self::type_at), one name line lower.
    pub fn comment_at(&self) -> Point {
        self.comment_at
    }

    /// Center of the direction glyph on the body edge.
    pub fn symbol_at(&self) -> Point {
        self.symbol_at
    }
}

/// A positioned generic row.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericRow {
    text: String,
    comment: String,
    top: f32,
    text_at: Point,
    comment_at: Point,
}

impl GenericRow {
    /// The `name : type [:= default]` text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// Left end of the declaration text.
    pub fn text_at(&self) -> Point {
        self.text_at
    }

    /// Left end of the comment.
    pub fn comment_at(&self) -> Point {
        self.comment_at
    }
}

/// The complete geometry of one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLayout {
    title: String,
    columns: ColumnMetrics,
    canvas: Size,
    body: Bounds,
    header: Bounds,
    title_at: Point,
    divider: Option<Point>,
    ports: Vec<PortRow>,
    generics: Vec<GenericRow>,
}

impl SymbolLayout {
    /// The entity name.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &ColumnMetrics {
        &self.columns
    }

    /// Size of the content, without the document margin.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The rounded body rectangle. The shadow is the same rectangle, offset.
    pub fn body(&self) -> Bounds {
        self.body
    }

    /// The header patch at the top of the body.
    pub fn header(&self) -> Bounds {
        self.header
    }

    /// Center of the title text.
    pub fn title_at(&self) -> Point {
        self.title_at
    }

    /// Left end of the line between ports and generics, if there are generics.
    /// The line spans the body width.
    pub fn divider(&self) -> Option<Point> {
        self.divider
    }

    /// Port rows, left column first, each column top to bottom.
    pub fn ports(&self) -> &[PortRow] {
        &self.ports
    }

    pub fn generics(&self) -> &[GenericRow] {
        &self.generics
    }
}

/// Widest name and widest type-or-comment of a column.
fn column_widths<'p>(
    metrics: &TextMetrics<'_>,
    ports: impl IntoIterator<Item = &'p Declaration>,
    simplified: bool,
) -> (f32, f32) {
    ports.into_iter().fold((0.0_f32, 0.0_f32), |(outer, inner), port| {
        let name = metrics.width(TextRole::Name, port.name());
        let details = if simplified {
            0.0
        } else {
            metrics
                .width(TextRole::PortType, &port.type_with_default())
                .max(metrics.width(TextRole::Comment, port.comment()))
        };
        (outer.max(name), inner.max(details))
    })
}

/// Positions of one row relative to its column edges.
struct RowGeometry {
    row_height: f32,
    name_height: f32,
    comment_height: f32,
}

impl RowGeometry {
    fn name_y(&self, top: f32) -> f32 {
        top + self.row_height / 2.0
    }

    fn type_y(&self, top: f32) -> f32 {
        top + self.name_height / 2.0
    }

    fn comment_y(&self, top: f32) -> f32 {
        top + self.name_height + self.comment_height / 2.0
    }
}

/// Computes the layout of `entity` drawn in `style`.
///
/// # Examples
///
/// ```
/// # use entity_block::{compute_layout, config::StyleConfig};
/// # use entity_block::draw::ApproximateTextMeasurer;
/// # use entity_block::semantic::Entity;
/// let style = StyleConfig::default().resolve().unwrap();
/// let entity = Entity::new("E", Vec::new(), Vec::new());
///
/// let layout = compute_layout(&entity, &style, &ApproximateTextMeasurer);
/// assert!(layout.ports().is_empty());
/// assert_eq!(layout.canvas().height(), 2.0 * layout.columns().title_height);
/// ```
pub fn compute_layout(
    entity: &Entity,
    style: &Style,
    measurer: &dyn TextMeasurer,
) -> SymbolLayout {
    let metrics = TextMetrics::new(measurer, style.text());
    let simplified = style.simplified();
    let spacing = style.spacing();

    let buckets = classify(entity.ports());
    let generics: &[Declaration] = if simplified { &[] } else { entity.generics() };
    let left_groups = buckets.left_groups();

    let has_rows = !buckets.is_empty() || !generics.is_empty();
    let name_height = if has_rows {
        metrics.line_height(TextRole::Name)
    } else {
        0.0
    };
    let comment_height = if has_rows && !simplified {
        metrics.line_height(TextRole::Comment)
    } else {
        0.0
    };
    let rows = RowGeometry {
        row_height: name_height + comment_height,
        name_height,
        comment_height,
    };

    let (left_outer, left_inner) = column_widths(
        &metrics,
        left_groups.iter().flat_map(|group| group.iter().copied()),
        simplified,
    );
    let (right_outer, right_inner) =
        column_widths(&metrics, buckets.outputs.iter().copied(), simplified);

    let generic_width = generics.iter().fold(0.0_f32, |width, generic| {
        width
            .max(metrics.width(TextRole::PortType, &generic.generic_text()))
            .max(metrics.width(TextRole::Comment, generic.comment()))
    });

    let title = metrics.measure(TextRole::Title, entity.name());
    let title_height = title.height().max(style.corner_radius());

    let non_empty_groups = left_groups.iter().filter(|group| !group.is_empty()).count();
    let left_rows = left_groups.iter().map(|group| group.len()).sum::<usize>()
        + non_empty_groups.saturating_sub(1);
    let port_rows = left_rows.max(buckets.outputs.len());

    let canvas_height = port_rows as f32 * rows.row_height
        + 2.0 * title_height
        + generics.len() as f32 * rows.row_height;
    let rect_width = (title.width() + 4.0 * spacing)
        .max(left_inner + right_inner + 6.0 * spacing)
        .max(generic_width + 4.0 * spacing);
    let canvas_width = left_outer + 2.0 * spacing + rect_width + right_outer;

    let columns = ColumnMetrics {
        left_outer,
        left_inner,
        right_outer,
        right_inner,
        generic_width,
        title_width: title.width(),
        row_height: rows.row_height,
        name_height,
        comment_height,
        title_height,
    };

    debug!(
        entity = entity.name(),
        width = canvas_width,
        height = canvas_height,
        left_rows,
        right_rows = buckets.outputs.len(),
        generics = generics.len();
        "Symbol layout computed"
    );

    let body_left = left_outer + spacing;
    let detail = |text: String| if simplified { String::new() } else { text };
    let mut ports = Vec::with_capacity(buckets.len());

    // Left column: inputs, resets, clocks with a gap row between groups
    let mut y = title_height;
    let mut first_group = true;
    for group in left_groups.iter().filter(|group| !group.is_empty()) {
        if !first_group {
            y += rows.row_height;
        }
        first_group = false;

        for port in group.iter() {
            let inner_x = left_outer + 2.0 * spacing;
            ports.push(PortRow {
                side: Side::Left,
                direction: port.direction(),
                name: port.name().to_string(),
                type_text: detail(port.type_with_default()),
                comment: detail(port.comment().to_string()),
                top: y,
                name_at: Point::new(left_outer, rows.name_y(y)),
                type_at: Point::new(inner_x, rows.type_y(y)),
                comment_at: Point::new(inner_x, rows.comment_y(y)),
                symbol_at: Point::new(body_left, rows.name_y(y)),
            });
            y += rows.row_height;
        }
    }
    let left_end = y;

    // Right column restarts below the header
    let mut y = title_height;
    let name_x = canvas_width - right_outer;
    let inner_x = name_x - 2.0 * spacing;
    for port in &buckets.outputs {
        ports.push(PortRow {
            side: Side::Right,
            direction: port.direction(),
            name: port.name().to_string(),
            type_text: detail(port.type_with_default()),
            comment: detail(port.comment().to_string()),
            top: y,
            name_at: Point::new(name_x, rows.name_y(y)),
            type_at: Point::new(inner_x, rows.type_y(y)),
            comment_at: Point::new(inner_x, rows.comment_y(y)),
            symbol_at: Point::new(name_x - spacing, rows.name_y(y)),
        });
        y += rows.row_height;
    }
    let right_end = y;

    let mut y = left_end.max(right_end);
    let generic_x = left_outer + 2.0 * spacing;
    let generic_rows = generics
        .iter()
        .map(|generic| {
            let row = GenericRow {
                text: generic.generic_text(),
                comment: generic.comment().to_string(),
                top: y,
                text_at: Point::new(generic_x, rows.type_y(y)),
                comment_at: Point::new(generic_x, rows.comment_y(y)),
            };
            y += rows.row_height;
            row
        })
        .collect();

    let divider = (!generics.is_empty()).then(|| {
        Point::new(
            body_left,
            canvas_height - title_height - generics.len() as f32 * rows.row_height,
        )
    });

    for row in &ports {
        trace!(name = row.name.as_str(), side:? = row.side, top = row.top; "Port row placed");
    }

    SymbolLayout {
        title: entity.name().to_string(),
        columns,
        canvas: Size::new(canvas_width, canvas_height),
        body: Bounds::new_from_top_left(
            Point::new(body_left, 0.0),
            Size::new(rect_width, canvas_height),
        ),
        header: Bounds::new_from_top_left(
            Point::new(body_left, 0.0),
            Size::new(rect_width, title_height),
        ),
        title_at: Point::new(body_left + rect_width / 2.0, title_height / 2.0),
        divider,
        ports,
        generics: generic_rows,
    }
}
