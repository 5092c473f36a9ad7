//! Semantic model of a parsed entity declaration.
//!
//! An [`Entity`] is built once per conversion by the parser and consumed
//! read-only by the classifier, layout engine and renderer. Ports and generics
//! share the [`Declaration`] type; generics always carry [`Direction::In`].

use std::{fmt, str::FromStr};

/// Electrical direction of a port.
///
/// Generics carry [`Direction::In`] as a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

impl Direction {
    /// Parses a direction keyword, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use entity_block_core::semantic::Direction;
    /// assert_eq!(Direction::from_keyword("INOUT"), Some(Direction::InOut));
    /// assert_eq!(Direction::from_keyword("std_logic"), None);
    /// ```
    pub fn from_keyword(word: &str) -> Option<Self> {
        [
            Self::In,
            Self::Out,
            Self::InOut,
            Self::Buffer,
            Self::Linkage,
        ]
        .into_iter()
        .find(|direction| direction.keyword().eq_ignore_ascii_case(word))
    }

    /// Returns the lowercase keyword spelling of this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
            Self::Buffer => "buffer",
            Self::Linkage => "linkage",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| {
            format!("invalid direction `{s}`, valid values: in, out, inout, buffer, linkage")
        })
    }
}

/// A single port or generic declaration.
///
/// `default` distinguishes a missing `:=` (`None`) from an empty right-hand
/// side (`Some("")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    direction: Direction,
    type_expression: String,
    default: Option<String>,
    comment: String,
}

impl Declaration {
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        type_expression: impl Into<String>,
        default: Option<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            type_expression: type_expression.into(),
            default,
            comment: comment.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn type_expression(&self) -> &str {
        &self.type_expression
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the type text shown next to a port, with a non-empty default in parentheses.
    ///
    /// # Examples
    ///
    /// ```
    /// # use entity_block_core::semantic::{Declaration, Direction};
    /// let port = Declaration::new("rst_n", Direction::In, "std_logic", Some("'1'".into()), "");
    /// assert_eq!(port.type_with_default(), "std_logic ('1')");
    /// ```
    pub fn type_with_default(&self) -> String {
        match self.default() {
            Some(default) if !default.is_empty() => {
                format!("{} ({default})", self.type_expression)
            }
            _ => self.type_expression.clone(),
        }
    }

    /// Returns the generic row text: `name : type` plus ` := default` when one is set.
    pub fn generic_text(&self) -> String {
        let mut text = format!("{} : {}", self.name, self.type_expression);
        if let Some(default) = self.default().filter(|default| !default.is_empty()) {
            text.push_str(" := ");
            text.push_str(default);
        }
        text
    }
}

/// A parsed entity: name, `use` clauses, generics and ports in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    name: String,
    libraries: Vec<String>,
    generics: Vec<Declaration>,
    ports: Vec<Declaration>,
}

impl Entity {
    pub fn new(name: impl Into<String>, generics: Vec<Declaration>, ports: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            libraries: Vec::new(),
            generics,
            ports,
        }
    }

    /// Attaches the library `use` clauses found in front of the entity.
    pub fn with_libraries(mut self, libraries: Vec<String>) -> Self {
        self.libraries = libraries;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn generics(&self) -> &[Declaration] {
        &self.generics
    }

    pub fn ports(&self) -> &[Declaration] {
        &self.ports
    }

    /// Returns true when an entity name was found.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_keyword_ignores_case() {
        assert_eq!(Direction::from_keyword("in"), Some(Direction::In));
        assert_eq!(Direction::from_keyword("Out"), Some(Direction::Out));
        assert_eq!(Direction::from_keyword("BUFFER"), Some(Direction::Buffer));
        assert_eq!(Direction::from_keyword("linkage"), Some(Direction::Linkage));
        assert_eq!(Direction::from_keyword("input"), None);
        assert_eq!(Direction::from_keyword(""), None);
    }

    #[test]
    fn test_direction_display_and_parse() {
        assert_eq!(Direction::InOut.to_string(), "inout");
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));

        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(err.contains("sideways"));
    }

    #[test]
    fn test_direction_default_is_in() {
        assert_eq!(Direction::default(), Direction::In);
    }

    #[test]
    fn test_type_with_default() {
        let plain = Declaration::new("data", Direction::Out, "std_logic_vector(7 downto 0)", None, "");
        assert_eq!(plain.type_with_default(), "std_logic_vector(7 downto 0)");

        let empty_default = Declaration::new("x", Direction::Out, "std_logic", Some(String::new()), "");
        assert_eq!(empty_default.type_with_default(), "std_logic");
        assert_eq!(empty_default.default(), Some(""));
    }

    #[test]
    fn test_generic_text() {
        let width = Declaration::new("WIDTH", Direction::In, "natural", Some("8".into()), "bus width");
        assert_eq!(width.generic_text(), "WIDTH : natural := 8");

        let depth = Declaration::new("DEPTH", Direction::In, "positive", None, "");
        assert_eq!(depth.generic_text(), "DEPTH : positive");
    }

    #[test]
    fn test_entity_is_named() {
        assert!(Entity::new("counter", vec![], vec![]).is_named());
        assert!(!Entity::default().is_named());
        assert!(!Entity::new("  ", vec![], vec![]).is_named());
    }

    #[test]
    fn test_entity_with_libraries() {
        let entity = Entity::new("E", vec![], vec![])
            .with_libraries(vec!["use ieee.std_logic_1164.all;".to_string()]);
        assert_eq!(entity.libraries().len(), 1);
        assert!(entity.generics().is_empty());
        assert!(entity.ports().is_empty());
    }
}
