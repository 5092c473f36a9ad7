//! Field parsing of single generic and port declarations.
//!
//! A raw declaration has the shape `name : [direction] type [:= default]`.
//! Malformed declarations never fail: missing parts come out empty and the
//! direction falls back to `in`. A declaration without a name is skipped.

use log::{trace, warn};
use winnow::{
    Parser as _,
    ascii::multispace1,
    combinator::{alt, eof, opt, preceded, terminated},
    error::ModalResult,
    token::{take_till, take_until, take_while},
};

use entity_block_core::semantic::{Declaration, Direction};

use crate::clause::{RawDeclaration, simplify};

/// Which clause a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeclarationKind {
    Generic,
    Port,
}

/// The textual fields of a declaration, before simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields<'s> {
    name: &'s str,
    type_text: Option<&'s str>,
    default: Option<&'s str>,
}

fn remainder<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., |_: char| true).parse_next(input)
}

fn default_value<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(":=", remainder).parse_next(input)
}

/// `name [: type] [:= default]`
fn fields<'s>(input: &mut &'s str) -> ModalResult<Fields<'s>> {
    let name = take_till(0.., ':').parse_next(input)?;

    if input.is_empty() {
        return Ok(Fields {
            name,
            type_text: None,
            default: None,
        });
    }

    if let Some(default) = opt(default_value).parse_next(input)? {
        return Ok(Fields {
            name,
            type_text: Some(""),
            default: Some(default),
        });
    }

    ':'.parse_next(input)?;
    let type_text = alt((take_until(0.., ":="), remainder)).parse_next(input)?;
    let default = opt(default_value).parse_next(input)?;

    Ok(Fields {
        name,
        type_text: Some(type_text),
        default,
    })
}

/// A direction keyword that forms the whole first word of the type text.
fn direction<'s>(input: &mut &'s str) -> ModalResult<Direction> {
    terminated(
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
        alt((multispace1.void(), eof.void())),
    )
    .verify_map(Direction::from_keyword)
    .parse_next(input)
}

/// Splits an optional leading direction keyword off the type text.
fn split_direction(type_text: &str) -> (Direction, &str) {
    let mut input = type_text;
    match opt(direction).parse_next(&mut input) {
        Ok(Some(direction)) => (direction, input),
        _ => (Direction::default(), type_text),
    }
}

/// Strips a leading `signal` word from a port name.
fn strip_signal(name: &str) -> &str {
    match name.split_once(' ') {
        Some((first, rest)) if first.eq_ignore_ascii_case("signal") => rest.trim_start(),
        _ => name,
    }
}

/// Converts a raw declaration into a [`Declaration`], or `None` when it has
/// no name.
pub(crate) fn parse_declaration(raw: &RawDeclaration, kind: DeclarationKind) -> Option<Declaration> {
    let code = simplify(&raw.code);
    let mut input = code.as_str();

    let parsed = fields.parse_next(&mut input).unwrap_or(Fields {
        name: code.as_str(),
        type_text: None,
        default: None,
    });

    let mut name = simplify(parsed.name);
    if kind == DeclarationKind::Port {
        name = strip_signal(&name).to_string();
    }

    if name.is_empty() {
        warn!(declaration = code.as_str(), kind:?; "Declaration without a name, skipping");
        return None;
    }

    if parsed.type_text.is_none() {
        warn!(declaration = code.as_str(); "Declaration without `:`, no type or direction");
    }

    let type_text = simplify(parsed.type_text.unwrap_or_default());
    let (direction, type_expression) = match kind {
        DeclarationKind::Generic => (Direction::In, type_text),
        DeclarationKind::Port => {
            let (direction, rest) = split_direction(&type_text);
            (direction, rest.to_string())
        }
    };

    let default = parsed.default.map(simplify);

    trace!(name = name.as_str(), direction:%, kind:?; "Parsed declaration");

    Some(Declaration::new(
        name,
        direction,
        type_expression,
        default,
        raw.comment.clone(),
    ))
}

/// Parses every raw declaration of a clause.
pub(crate) fn parse_declarations(raw: &[RawDeclaration], kind: DeclarationKind) -> Vec<Declaration> {
    raw.iter()
        .filter_map(|declaration| parse_declaration(declaration, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &str, comment: &str) -> RawDeclaration {
        RawDeclaration {
            code: code.to_string(),
            comment: comment.to_string(),
        }
    }

    fn port(code: &str) -> Declaration {
        parse_declaration(&raw(code, ""), DeclarationKind::Port).unwrap()
    }

    fn generic(code: &str) -> Declaration {
        parse_declaration(&raw(code, "a comment"), DeclarationKind::Generic).unwrap()
    }

    #[test]
    fn test_port_with_signal_prefix_and_default() {
        let decl = port("  signal rst_n :   in  std_logic := '1'");
        assert_eq!(decl.name(), "rst_n");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.type_expression(), "std_logic");
        assert_eq!(decl.default(), Some("'1'"));
    }

    #[test]
    fn test_port_directions() {
        assert_eq!(port("a : out bit").direction(), Direction::Out);
        assert_eq!(port("a : INOUT bit").direction(), Direction::InOut);
        assert_eq!(port("a : buffer bit").direction(), Direction::Buffer);
        assert_eq!(port("a : Linkage bit").direction(), Direction::Linkage);
        assert_eq!(port("a : in bit").type_expression(), "bit");
    }

    #[test]
    fn test_port_without_direction() {
        let decl = port("data : std_logic_vector(7 downto 0)");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.type_expression(), "std_logic_vector(7 downto 0)");
    }

    #[test]
    fn test_direction_must_be_a_whole_word() {
        let decl = port("x : integer range 0 to 3");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.type_expression(), "integer range 0 to 3");

        let decl = port("y : outer_type");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.type_expression(), "outer_type");
    }

    #[test]
    fn test_direction_alone() {
        let decl = port("z : out");
        assert_eq!(decl.direction(), Direction::Out);
        assert_eq!(decl.type_expression(), "");
    }

    #[test]
    fn test_empty_default_is_not_absent() {
        let decl = port("x : out std_logic :=");
        assert_eq!(decl.direction(), Direction::Out);
        assert_eq!(decl.type_expression(), "std_logic");
        assert_eq!(decl.default(), Some(""));

        let decl = port("x : out std_logic");
        assert_eq!(decl.default(), None);
    }

    #[test]
    fn test_default_directly_after_name() {
        let decl = generic("COUNT := 4");
        assert_eq!(decl.name(), "COUNT");
        assert_eq!(decl.type_expression(), "");
        assert_eq!(decl.default(), Some("4"));
    }

    #[test]
    fn test_missing_colon() {
        let decl = port("  lonely  name ");
        assert_eq!(decl.name(), "lonely name");
        assert_eq!(decl.type_expression(), "");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.default(), None);
    }

    #[test]
    fn test_generic_keeps_type_text_and_in_direction() {
        let decl = generic("MODE : out_mode_t := fast");
        assert_eq!(decl.name(), "MODE");
        assert_eq!(decl.direction(), Direction::In);
        assert_eq!(decl.type_expression(), "out_mode_t");
        assert_eq!(decl.default(), Some("fast"));
        assert_eq!(decl.comment(), "a comment");

        // generics never consume a direction word
        let decl = generic("G : out bit");
        assert_eq!(decl.type_expression(), "out bit");
    }

    #[test]
    fn test_signal_prefix_only_for_ports() {
        assert_eq!(generic("signal x : bit").name(), "signal x");
        assert_eq!(port("signal x : in bit").name(), "x");
        assert_eq!(port("signal : in bit").name(), "signal");
    }

    #[test]
    fn test_unnamed_declarations_are_skipped() {
        assert!(parse_declaration(&raw(": in bit", ""), DeclarationKind::Port).is_none());
        assert!(parse_declaration(&raw("  := 3", ""), DeclarationKind::Generic).is_none());

        let parsed = parse_declarations(
            &[raw(": in bit", "lost"), raw("a : out bit", "kept")],
            DeclarationKind::Port,
        );
        let names: Vec<&str> = parsed.iter().map(Declaration::name).collect();
        assert_eq!(names, vec!["a"]);
        assert_eq!(parsed[0].comment(), "kept");
    }

    #[test]
    fn test_comma_separated_names_stay_together() {
        let decl = port("a, b : in std_logic");
        assert_eq!(decl.name(), "a, b");
    }

    #[test]
    fn test_default_containing_colon_equals() {
        let decl = generic("INIT : string := \"a:=b\"");
        assert_eq!(decl.type_expression(), "string");
        assert_eq!(decl.default(), Some("\"a:=b\""));
    }
}
