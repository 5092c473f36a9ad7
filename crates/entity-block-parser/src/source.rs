//! Entity extraction from a whole source document.

use log::{debug, info};

use entity_block_core::semantic::Entity;

use crate::{
    clause::{find_clause, simplify, split_declarations},
    declaration::{DeclarationKind, parse_declarations},
    error::{Diagnostic, ErrorCode, ParseError},
    lines::{LineTable, find_word},
    span::Span,
};

const ENTITY: &str = "entity";
const IS: &str = "is";
const END: &str = "end";

/// Collects the `use` clauses of the document, whitespace-simplified.
fn libraries(table: &LineTable<'_>) -> Vec<String> {
    table
        .lines()
        .iter()
        .map(|line| simplify(line.text()))
        .filter(|line| find_word(line, "use") == Some(0))
        .collect()
}

/// Returns the byte range of the first entity declaration: from the `entity`
/// keyword through the first `;` after the `end` keyword.
fn entity_range(table: &LineTable<'_>) -> Option<(usize, usize)> {
    let source = table.source();
    let start = table.find_keyword(ENTITY)?;

    let end = table
        .find_keyword_from(start + ENTITY.len(), END)
        .and_then(|end| table.find_from(end + END.len(), ";"))
        .map_or(source.len(), |semicolon| semicolon + 1);

    Some((start, end))
}

/// Parses the text of one entity declaration.
///
/// `text` runs from the `entity` keyword to the end of the declaration. The
/// parse never fails: a missing name leaves [`Entity::name`] empty, and
/// malformed clauses and declarations produce best-effort values.
///
/// # Examples
///
/// ```
/// # use entity_block_parser::parse_entity;
/// let entity = parse_entity("entity E is end E;");
/// assert_eq!(entity.name(), "E");
/// assert!(entity.ports().is_empty());
/// assert!(entity.generics().is_empty());
/// ```
pub fn parse_entity(text: &str) -> Entity {
    let table = LineTable::new(text);

    let mut name = String::new();
    let mut clauses_from = 0;
    if let Some(entity_at) = table.find_keyword(ENTITY) {
        let name_start = entity_at + ENTITY.len();
        if let Some(is_at) = table.find_keyword_from(name_start, IS) {
            name = simplify(&table.code_between(name_start, is_at));
            clauses_from = is_at + IS.len();
        }
    }

    let generics = find_clause(&table, "generic", clauses_from)
        .map(|clause| {
            clauses_from = clause.end;
            parse_declarations(&split_declarations(clause.body), DeclarationKind::Generic)
        })
        .unwrap_or_default();

    let ports = find_clause(&table, "port", clauses_from)
        .map(|clause| parse_declarations(&split_declarations(clause.body), DeclarationKind::Port))
        .unwrap_or_default();

    debug!(
        name = name.as_str(),
        generics = generics.len(),
        ports = ports.len();
        "Parsed entity"
    );

    Entity::new(name, generics, ports)
}

/// Parses the first entity declaration of a source document.
///
/// Library `use` clauses anywhere in the document are attached to the entity.
///
/// # Errors
///
/// Returns a [`ParseError`] with code [`ErrorCode::E100`] when the document has
/// no `entity` keyword outside comments, or [`ErrorCode::E101`] when the
/// entity has no name.
///
/// # Examples
///
/// ```
/// # use entity_block_parser::parse;
/// let source = "library ieee;\nuse ieee.std_logic_1164.all;\n\
///               entity inverter is\n  port (a : in bit; y : out bit);\nend inverter;";
/// let entity = parse(source).unwrap();
/// assert_eq!(entity.name(), "inverter");
/// assert_eq!(entity.libraries(), ["use ieee.std_logic_1164.all;"]);
/// assert_eq!(entity.ports().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Entity, ParseError> {
    let table = LineTable::new(source);

    let Some((start, end)) = entity_range(&table) else {
        return Err(Diagnostic::error("no entity declaration found")
            .with_code(ErrorCode::E100)
            .with_help("the input must contain `entity <name> is ... end <name>;`")
            .into());
    };

    let entity = parse_entity(&source[start..end]).with_libraries(libraries(&table));

    if !entity.is_named() {
        return Err(Diagnostic::error("entity has no name")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(start..start + ENTITY.len()), "entity declared here")
            .with_help("write `entity <name> is`")
            .into());
    }

    info!(
        entity = entity.name(),
        generics = entity.generics().len(),
        ports = entity.ports().len();
        "Entity extracted"
    );

    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_libraries_are_word_bounded() {
        let table = LineTable::new("  use   ieee.numeric_std.all;\nuser_lib;\nUSE work.pkg.all;");
        assert_eq!(
            libraries(&table),
            vec!["use ieee.numeric_std.all;", "USE work.pkg.all;"]
        );
    }

    #[test]
    fn test_entity_range_stops_at_end_semicolon() {
        let source = "-- entity decoy\nentity e is\nend entity e;\narchitecture rtl of e is";
        let table = LineTable::new(source);
        let (start, end) = entity_range(&table).unwrap();
        assert_eq!(&source[start..end], "entity e is\nend entity e;");
    }

    #[test]
    fn test_entity_range_skips_end_in_string() {
        let source = "entity e is generic (M : string := \"the end\"); end e; -- tail";
        let table = LineTable::new(source);
        let (start, end) = entity_range(&table).unwrap();
        assert!(source[start..end].ends_with("end e;"));
    }

    #[test]
    fn test_entity_range_unterminated() {
        let source = "entity e is port (a : in bit";
        let table = LineTable::new(source);
        assert_eq!(entity_range(&table), Some((0, source.len())));
    }

    #[test]
    fn test_name_spanning_lines_ignores_comments() {
        let entity = parse_entity("entity -- comment is here\n  my_block\nis end;");
        assert_eq!(entity.name(), "my_block");
    }

    #[test]
    fn test_parse_entity_without_is() {
        let entity = parse_entity("entity broken port (a : in bit);");
        assert!(!entity.is_named());
        assert_eq!(entity.ports().len(), 1);
    }

    #[test]
    fn test_parse_no_entity() {
        let err = parse("library ieee;\n-- entity in comment only\n").unwrap_err();
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_parse_unnamed_entity() {
        let err = parse("\n\nentity is end;").unwrap_err();
        let diag = err.diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.label().unwrap().span(), Span::new(2..8));
    }
}
