//! # astgen Schema
//!
//! Definition table model for AST node generation.
//!
//! This crate provides:
//! - Node and field definitions (`NodeSpec`, `FieldSpec`)
//! - The ordered `DefinitionTable`
//! - Parsing of `Name: type name, ...` entries and definitions files
//! - Identifier and type validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_definitions, parse_definitions_file, parse_entry, parse_table};
pub use types::{DefinitionTable, FieldSpec, NodeSpec};
pub use validation::{CPP_KEYWORDS, is_identifier, is_keyword, is_type_name};
