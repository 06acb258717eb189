//! Prelude module for convenient imports.
//!
//! ```ignore
//! use astgen::prelude::*;
//! ```

// Definition table
pub use astgen_schema::{
    DefinitionTable, FieldSpec, NodeSpec, ParseError, SchemaError, parse_definitions,
    parse_definitions_file, parse_entry, parse_table,
};

// Generation
pub use astgen_codegen::{
    CodegenError, DocumentMeta, EmittedDocument, Generator, GeneratorOptions,
    GeneratorOptionsBuilder, VisitorOptions, assemble, generate_from_entries, generate_from_file,
    generate_from_str, generate_to_file,
};
