//! # astgen
//!
//! Generates C++ AST node declarations from a declarative definition table.
//!
//! Each entry `Name: type1 name1, type2 name2, ...` becomes a struct
//! deriving from a common base, with const fields, a constructor whose
//! parameters mirror the fields, and a member initializer list.
//!
//! ## Quick Start
//!
//! ```ignore
//! use astgen::prelude::*;
//!
//! let table = parse_table(&["Binary: Expr* left, Token op, Expr* right"])?;
//! let document = assemble(&table, "Expr", &DocumentMeta::default())?;
//! document.write_to(Path::new("Expr.h"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Definition table model, parser and validation
//! - [`codegen`] - Declaration emission, document assembly, file output
//! - [`dargon`] - The built-in Dargon expression table

pub mod dargon;
pub mod prelude;

/// Definition table model, parser and validation.
pub mod schema {
    pub use astgen_schema::*;
}

/// C++ declaration generation.
pub mod codegen {
    pub use astgen_codegen::*;
}
