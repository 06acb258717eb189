//! # astgen Codegen
//!
//! C++ header generation from AST node definitions.
//!
//! This crate provides:
//! - Derived node declarations with const fields, a mirroring constructor
//!   and a member initializer list
//! - Document assembly (comment block, include guard, namespace, base type)
//! - Optional visitor scaffolding
//! - Atomic file output

pub mod cpp;
pub mod document;
pub mod error;
pub mod generator;
pub mod options;
pub mod sink;

pub use document::{DocumentMeta, EmittedDocument};
pub use error::CodegenError;
pub use generator::{Generator, assemble};
pub use options::{GeneratorOptions, GeneratorOptionsBuilder, VisitorOptions};

use std::path::Path;

/// Generates a header from an ordered list of `Name: type name, ...` entries.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_entries<S: AsRef<str>>(
    entries: &[S],
    options: &GeneratorOptions,
) -> Result<EmittedDocument, CodegenError> {
    let table = astgen_schema::parse_table(entries)?;
    Generator::new(&table, options).generate()
}

/// Generates a header from definitions file contents.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_str(
    text: &str,
    options: &GeneratorOptions,
) -> Result<EmittedDocument, CodegenError> {
    let table = astgen_schema::parse_definitions(text)?;
    Generator::new(&table, options).generate()
}

/// Generates a header from a definitions file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &Path,
    options: &GeneratorOptions,
) -> Result<EmittedDocument, CodegenError> {
    let table = astgen_schema::parse_definitions_file(path)?;
    Generator::new(&table, options).generate()
}

/// Generates a header from a definitions file and writes it to `output`.
///
/// The document is assembled in memory first; `output` is only touched
/// once generation has succeeded.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation, or writing fails.
pub fn generate_to_file(
    input: &Path,
    output: &Path,
    options: &GeneratorOptions,
) -> Result<EmittedDocument, CodegenError> {
    let document = generate_from_file(input, options)?;
    document.write_to(output)?;
    Ok(document)
}
