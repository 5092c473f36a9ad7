//! Command-line argument definitions for the entity-block CLI.
//!
//! Besides input/output paths, configuration file selection and logging
//! verbosity, every style setting can be overridden on the command line.
//! Overrides are merged over the loaded configuration and persisted with
//! `--save`.

use clap::Parser;

use entity_block::config::StyleConfig;

/// Convert a VHDL entity declaration into an SVG block symbol
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input VHDL file
    #[arg(help = "Path to the input VHDL file")]
    pub input: String,

    /// Path to the output SVG file, `<entity name>.svg` when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Store the merged style options in the configuration file
    #[arg(long)]
    pub save: bool,

    /// Color of port and generic comments
    #[arg(short = 'c', long)]
    pub comment_color: Option<String>,

    /// Color of port names
    #[arg(short = 'n', long)]
    pub port_name_color: Option<String>,

    /// Color of port types and generics
    #[arg(short = 't', long)]
    pub port_type_color: Option<String>,

    /// Fill color of the symbol body
    #[arg(short = 'b', long)]
    pub background_color: Option<String>,

    /// Left color of the header gradient
    #[arg(short = 'l', long)]
    pub header_left_color: Option<String>,

    /// Right color of the header gradient
    #[arg(short = 'r', long)]
    pub header_right_color: Option<String>,

    /// Color of the entity name in the header
    #[arg(short = 'e', long)]
    pub entity_title_color: Option<String>,

    /// Color of the body outline
    #[arg(short = 'B', long)]
    pub border_color: Option<String>,

    /// Fill color of the port glyphs
    #[arg(short = 'p', long)]
    pub port_color: Option<String>,

    /// Color of the drop shadow
    #[arg(short = 's', long)]
    pub shadow_color: Option<String>,

    /// Corner radius of the body
    #[arg(short = 'R', long, allow_negative_numbers = true)]
    pub corner_radius: Option<f32>,

    /// Line weight of outlines and port glyphs
    #[arg(short = 'w', long)]
    pub line_weight: Option<f32>,

    /// Draw names only, without types, comments and generics
    #[arg(short = 'S', long, overrides_with = "no_simplified_symbol")]
    pub simplified_symbol: bool,

    /// Draw the full symbol even when the configuration asks for a simplified one
    #[arg(long, overrides_with = "simplified_symbol")]
    pub no_simplified_symbol: bool,
}

impl Args {
    /// Collects the style options given on the command line.
    ///
    /// Options that were not given are left unset, so merging the result
    /// keeps the configured values.
    pub fn style_overrides(&self) -> StyleConfig {
        let mut style = StyleConfig::default();

        if let Some(color) = &self.comment_color {
            style.set_comment_color(color);
        }
        if let Some(color) = &self.port_name_color {
            style.set_port_name_color(color);
        }
        if let Some(color) = &self.port_type_color {
            style.set_port_type_color(color);
        }
        if let Some(color) = &self.background_color {
            style.set_background_color(color);
        }
        if let Some(color) = &self.header_left_color {
            style.set_header_left_color(color);
        }
        if let Some(color) = &self.header_right_color {
            style.set_header_right_color(color);
        }
        if let Some(color) = &self.entity_title_color {
            style.set_title_color(color);
        }
        if let Some(color) = &self.border_color {
            style.set_border_color(color);
        }
        if let Some(color) = &self.port_color {
            style.set_port_color(color);
        }
        if let Some(color) = &self.shadow_color {
            style.set_shadow_color(color);
        }
        if let Some(radius) = self.corner_radius {
            style.set_corner_radius(radius);
        }
        if let Some(width) = self.line_weight {
            style.set_border_width(width);
        }
        if self.simplified_symbol {
            style.set_simplified(true);
        } else if self.no_simplified_symbol {
            style.set_simplified(false);
        }

        style
    }
}
