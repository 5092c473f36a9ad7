//! Configuration types for entity-block symbol rendering.
//!
//! This module provides the configuration structures that control how a symbol
//! is styled. All types implement [`serde::Deserialize`] for loading from TOML
//! files and [`serde::Serialize`] so that preferences given on the command
//! line can be persisted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Colors, corner radius, line weight, font family and the
//!   simplified-symbol switch. Every field is optional and falls back to the
//!   built-in default when resolved into a [`Style`].
//!
//! # Example
//!
//! ```
//! # use entity_block::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! let style = config.style().resolve().unwrap();
//! assert_eq!(style.corner_radius(), 10.0);
//! ```

use serde::{Deserialize, Serialize};

use entity_block_core::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
};

use crate::style::{Style, TextRoles};

const DEFAULT_COMMENT_COLOR: &str = "#008000";
const DEFAULT_PORT_NAME_COLOR: &str = "black";
const DEFAULT_PORT_TYPE_COLOR: &str = "#000080";
const DEFAULT_BACKGROUND_COLOR: &str = "#fffff3";
const DEFAULT_HEADER_LEFT_COLOR: &str = "#014040";
const DEFAULT_HEADER_RIGHT_COLOR: &str = "#7f7f7f";
const DEFAULT_TITLE_COLOR: &str = "white";
const DEFAULT_BORDER_COLOR: &str = "#235676";
const DEFAULT_PORT_COLOR: &str = "#235676";
const DEFAULT_SHADOW_COLOR: &str = "#808080";

const DEFAULT_CORNER_RADIUS: f32 = 10.0;
const DEFAULT_BORDER_WIDTH: f32 = 2.0;
const DEFAULT_SPACING: f32 = 10.0;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

const NAME_FONT_SIZE: u16 = 10;
const COMMENT_FONT_SIZE: u16 = 8;
const TITLE_FONT_SIZE: u16 = 12;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the style configuration for modification.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }
}

/// Visual styling configuration for rendered symbols.
///
/// Colors are CSS color strings such as `"#235676"`, `"rgb(1, 64, 64)"` or
/// `"white"`. Fields that are not set fall back to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port_name_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port_type_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_left_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_right_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corner_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    simplified: Option<bool>,
}

impl StyleConfig {
    pub fn set_comment_color(&mut self, color: impl Into<String>) {
        self.comment_color = Some(color.into());
    }

    pub fn set_port_name_color(&mut self, color: impl Into<String>) {
        self.port_name_color = Some(color.into());
    }

    pub fn set_port_type_color(&mut self, color: impl Into<String>) {
        self.port_type_color = Some(color.into());
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = Some(color.into());
    }

    pub fn set_header_left_color(&mut self, color: impl Into<String>) {
        self.header_left_color = Some(color.into());
    }

    pub fn set_header_right_color(&mut self, color: impl Into<String>) {
        self.header_right_color = Some(color.into());
    }

    pub fn set_title_color(&mut self, color: impl Into<String>) {
        self.title_color = Some(color.into());
    }

    pub fn set_border_color(&mut self, color: impl Into<String>) {
        self.border_color = Some(color.into());
    }

    pub fn set_port_color(&mut self, color: impl Into<String>) {
        self.port_color = Some(color.into());
    }

    pub fn set_shadow_color(&mut self, color: impl Into<String>) {
        self.shadow_color = Some(color.into());
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = Some(radius);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = Some(width);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = Some(family.into());
    }

    pub fn set_simplified(&mut self, simplified: bool) {
        self.simplified = Some(simplified);
    }

    /// Returns the configured simplified-symbol switch, `false` when unset.
    pub fn simplified(&self) -> bool {
        self.simplified.unwrap_or(false)
    }

    /// Overrides every field of `self` that is set in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use entity_block::config::StyleConfig;
    /// let mut stored = StyleConfig::default();
    /// stored.set_title_color("yellow");
    /// stored.set_corner_radius(4.0);
    ///
    /// let mut overrides = StyleConfig::default();
    /// overrides.set_corner_radius(6.0);
    ///
    /// stored.merge(overrides);
    /// let style = stored.resolve().unwrap();
    /// assert_eq!(style.corner_radius(), 6.0);
    /// ```
    pub fn merge(&mut self, other: StyleConfig) {
        fn take<T>(target: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *target = value;
            }
        }

        take(&mut self.comment_color, other.comment_color);
        take(&mut self.port_name_color, other.port_name_color);
        take(&mut self.port_type_color, other.port_type_color);
        take(&mut self.background_color, other.background_color);
        take(&mut self.header_left_color, other.header_left_color);
        take(&mut self.header_right_color, other.header_right_color);
        take(&mut self.title_color, other.title_color);
        take(&mut self.border_color, other.border_color);
        take(&mut self.port_color, other.port_color);
        take(&mut self.shadow_color, other.shadow_color);
        take(&mut self.corner_radius, other.corner_radius);
        take(&mut self.border_width, other.border_width);
        take(&mut self.font_family, other.font_family);
        take(&mut self.simplified, other.simplified);
    }

    /// Validates the configuration and resolves it into an immutable [`Style`].
    ///
    /// A negative corner radius is taken by absolute value.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if a color string cannot
    /// be parsed, or if the corner radius or border width is not a finite
    /// number, or if the border width is negative.
    pub fn resolve(&self) -> Result<Style, String> {
        let comment = color("comment_color", &self.comment_color, DEFAULT_COMMENT_COLOR)?;
        let port_name = color("port_name_color", &self.port_name_color, DEFAULT_PORT_NAME_COLOR)?;
        let port_type = color("port_type_color", &self.port_type_color, DEFAULT_PORT_TYPE_COLOR)?;
        let background = color("background_color", &self.background_color, DEFAULT_BACKGROUND_COLOR)?;
        let header_left = color("header_left_color", &self.header_left_color, DEFAULT_HEADER_LEFT_COLOR)?;
        let header_right =
            color("header_right_color", &self.header_right_color, DEFAULT_HEADER_RIGHT_COLOR)?;
        let title = color("title_color", &self.title_color, DEFAULT_TITLE_COLOR)?;
        let border = color("border_color", &self.border_color, DEFAULT_BORDER_COLOR)?;
        let port = color("port_color", &self.port_color, DEFAULT_PORT_COLOR)?;
        let shadow = color("shadow_color", &self.shadow_color, DEFAULT_SHADOW_COLOR)?;

        let corner_radius = self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS);
        if !corner_radius.is_finite() {
            return Err(format!("Invalid corner_radius in config: {corner_radius}"));
        }

        let border_width = self.border_width.unwrap_or(DEFAULT_BORDER_WIDTH);
        if !border_width.is_finite() || border_width < 0.0 {
            return Err(format!(
                "Invalid border_width in config: {border_width} (must be a non-negative number)"
            ));
        }

        let family = self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY);
        let text = TextRoles {
            name: text_definition(family, NAME_FONT_SIZE, port_name),
            port_type: text_definition(family, NAME_FONT_SIZE, port_type),
            comment: text_definition(family, COMMENT_FONT_SIZE, comment),
            title: text_definition(family, TITLE_FONT_SIZE, title),
        };

        Ok(Style {
            text,
            background,
            shadow,
            header: (header_left, header_right),
            border: StrokeDefinition::rounded(border, border_width),
            port_stroke: StrokeDefinition::rounded(port, border_width),
            port_color: port,
            corner_radius: corner_radius.abs(),
            spacing: DEFAULT_SPACING,
            simplified: self.simplified(),
        })
    }
}

fn color(field: &str, value: &Option<String>, default: &str) -> Result<Color, String> {
    Color::new(value.as_deref().unwrap_or(default))
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

fn text_definition(family: &str, size: u16, color: Color) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(family);
    definition.set_font_size(size);
    definition.set_color(Some(color));
    definition
}
