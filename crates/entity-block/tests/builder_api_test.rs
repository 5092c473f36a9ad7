//! Integration tests for the SymbolBuilder API

use entity_block::{
    EntityBlockError, Side, SymbolBuilder,
    config::{AppConfig, StyleConfig},
    draw::ApproximateTextMeasurer,
    semantic::Direction,
};

const COUNTER: &str = r#"
library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

entity counter is
    generic (
        WIDTH : natural := 8 -- counter width
    );
    port (
        clk    : in  std_logic; -- system clock
        rst_n  : in  std_logic;
        enable : in  std_logic;
        count  : out unsigned(WIDTH - 1 downto 0)
    );
end entity counter;

architecture rtl of counter is
begin
end architecture rtl;
"#;

fn builder() -> SymbolBuilder {
    SymbolBuilder::default().with_text_measurer(ApproximateTextMeasurer)
}

fn builder_with(configure: impl FnOnce(&mut StyleConfig)) -> SymbolBuilder {
    let mut config = AppConfig::default();
    configure(config.style_mut());
    SymbolBuilder::new(config).with_text_measurer(ApproximateTextMeasurer)
}

#[test]
fn test_parse_counter() {
    let entity = builder().parse(COUNTER).expect("Failed to parse entity");

    assert_eq!(entity.name(), "counter");
    assert_eq!(
        entity.libraries(),
        ["use ieee.std_logic_1164.all;", "use ieee.numeric_std.all;"]
    );
    assert_eq!(entity.generics().len(), 1);
    assert_eq!(entity.generics()[0].comment(), "counter width");

    let ports: Vec<(&str, Direction)> = entity
        .ports()
        .iter()
        .map(|port| (port.name(), port.direction()))
        .collect();
    assert_eq!(
        ports,
        vec![
            ("clk", Direction::In),
            ("rst_n", Direction::In),
            ("enable", Direction::In),
            ("count", Direction::Out),
        ]
    );
}

#[test]
fn test_layout_groups_ports() {
    let builder = builder();
    let entity = builder.parse(COUNTER).unwrap();
    let layout = builder.layout(&entity).unwrap();

    let left: Vec<&str> = layout
        .ports()
        .iter()
        .filter(|row| row.side() == Side::Left)
        .map(|row| row.name())
        .collect();
    assert_eq!(left, vec!["enable", "rst_n", "clk"]);
    assert_eq!(layout.generics().len(), 1);
    assert!(layout.divider().is_some());
}

#[test]
fn test_render_counter() {
    let builder = builder();
    let entity = builder.parse(COUNTER).unwrap();
    let svg = builder.render_svg(&entity).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("counter"));
    assert!(svg.contains("linearGradient"));
}

#[test]
fn test_render_is_deterministic() {
    let builder = builder();
    let entity = builder.parse(COUNTER).unwrap();
    let first = builder.render_svg(&entity).unwrap();
    let second = builder.render_svg(&entity).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_simplified_symbol() {
    let builder = builder_with(|style| style.set_simplified(true));
    let entity = builder.parse(COUNTER).unwrap();
    let svg = builder.render_svg(&entity).unwrap();

    assert!(svg.contains("rst_n"));
    assert!(!svg.contains("std_logic"));
    assert!(!svg.contains("system clock"));
    assert!(!svg.contains("WIDTH"));
}

#[test]
fn test_custom_colors() {
    let builder = builder_with(|style| {
        style.set_background_color("orange");
        style.set_border_color("red");
    });
    let entity = builder.parse(COUNTER).unwrap();
    let svg = builder.render_svg(&entity).unwrap();
    assert!(svg.contains("fill=\"orange\""));
    assert!(svg.contains("stroke=\"red\""));
}

#[test]
fn test_invalid_color_is_config_error() {
    let builder = builder_with(|style| style.set_port_color("not-a-color"));
    let entity = builder.parse(COUNTER).unwrap();
    let result = builder.render_svg(&entity);
    assert!(matches!(result, Err(EntityBlockError::Config(_))));
}

#[test]
fn test_parse_without_entity_returns_error() {
    let result = builder().parse("architecture rtl of nothing is begin end rtl;");
    match result {
        Err(EntityBlockError::Parse { err, src }) => {
            assert!(err.to_string().contains("E100"));
            assert!(src.starts_with("architecture"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_write_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counter.svg");

    let builder = builder();
    let entity = builder.parse(COUNTER).unwrap();
    builder.write_svg(&entity, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, builder.render_svg(&entity).unwrap());
}

#[test]
fn test_write_svg_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("counter.svg");

    let builder = builder();
    let entity = builder.parse(COUNTER).unwrap();
    let result = builder.write_svg(&entity, &path);
    assert!(matches!(result, Err(EntityBlockError::Export(_))));
    assert!(!path.exists());
}

#[test]
fn test_builder_reusability() {
    let builder = builder();

    let first = builder
        .parse("entity a is port (x : in bit); end a;")
        .unwrap();
    let second = builder
        .parse("entity b is port (y : out bit); end b;")
        .unwrap();

    assert!(builder.render_svg(&first).unwrap().contains("<svg"));
    assert!(builder.render_svg(&second).unwrap().contains("<svg"));
}
