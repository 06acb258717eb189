//! C++ code generation modules.

pub mod declaration;
pub mod preamble;
pub mod visitor;

pub use declaration::DeclarationEmitter;

/// One level of indentation inside a generated struct.
pub const INDENT: &str = "    ";
