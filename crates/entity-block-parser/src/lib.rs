//! # Entity Block Parser
//!
//! Tolerant parser for VHDL entity declarations. It extracts the first
//! entity of a source document together with its generic and port clauses,
//! the line comments attached to each declaration, and the library `use`
//! clauses of the document.
//!
//! Only two conditions are errors: a document without an entity and an entity
//! without a name. Everything else degrades to best-effort values.
//!
//! ## Usage
//!
//! ```
//! # use entity_block_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         entity counter is
//!             generic (WIDTH : natural := 8);
//!             port (
//!                 clk   : in  std_logic;                 -- system clock
//!                 count : out unsigned(WIDTH-1 downto 0)
//!             );
//!         end counter;
//!     "#;
//!
//!     let entity = parse(source)?;
//!     assert_eq!(entity.name(), "counter");
//!     assert_eq!(entity.ports()[0].comment(), "system clock");
//!     Ok(())
//! }
//! ```

mod clause;
mod declaration;
pub mod error;
mod lines;
mod source;
mod span;

pub use error::ParseError;
pub use lines::{Line, LineTable, find, find_unmatched_close};
pub use source::{parse, parse_entity};
pub use span::Span;
