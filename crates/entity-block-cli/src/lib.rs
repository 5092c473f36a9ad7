//! CLI logic for the entity-block tool.
//!
//! Reads a VHDL file, extracts its first entity declaration and writes the
//! block symbol as an SVG file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use entity_block::{EntityBlockError, SymbolBuilder, config::AppConfig};

const SVG_EXTENSION: &str = ".svg";

/// Run the entity-block CLI application
///
/// Style options given on the command line are merged over the loaded
/// configuration, which is stored back when `--save` is set. With `--save`, a
/// `--config` path that does not exist yet starts from the defaults and is
/// created. Nothing is
/// written when the input holds no usable entity declaration.
///
/// Returns the path of the written SVG file.
///
/// # Errors
///
/// Returns `EntityBlockError` for:
/// - File I/O errors
/// - Configuration loading, validation or saving errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<PathBuf, EntityBlockError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing entity"
    );

    let mut app_config = match args.config.as_deref() {
        Some(path) if args.save && !Path::new(path).exists() => {
            info!(path; "Configuration file does not exist yet, starting from defaults");
            AppConfig::default()
        }
        explicit => config::load_config(explicit)?,
    };
    app_config.style_mut().merge(args.style_overrides());

    if args.save {
        config::store_config(&app_config, args.config.as_ref())?;
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = SymbolBuilder::new(app_config);
    let entity = builder.parse(&source)?;

    let output = output_path(args.output.as_deref(), entity.name());
    builder.write_svg(&entity, &output)?;

    info!(output_file = output.display().to_string(); "SVG exported successfully");

    Ok(output)
}

/// Resolves the output file: the given path or `<entity name>.svg`, with the
/// `.svg` extension appended when missing (checked case-insensitively).
pub fn output_path(output: Option<&str>, entity_name: &str) -> PathBuf {
    let name = output.unwrap_or(entity_name);
    if has_svg_extension(name) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{SVG_EXTENSION}"))
    }
}

fn has_svg_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(&SVG_EXTENSION[1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_to_entity_name() {
        assert_eq!(output_path(None, "counter"), PathBuf::from("counter.svg"));
    }

    #[test]
    fn test_output_extension_appended() {
        assert_eq!(output_path(Some("out/symbol"), "e"), PathBuf::from("out/symbol.svg"));
        assert_eq!(output_path(Some("symbol.png"), "e"), PathBuf::from("symbol.png.svg"));
    }

    #[test]
    fn test_output_extension_case_insensitive() {
        assert_eq!(output_path(Some("symbol.SVG"), "e"), PathBuf::from("symbol.SVG"));
        assert_eq!(output_path(Some("symbol.svg"), "e"), PathBuf::from("symbol.svg"));
    }
}
