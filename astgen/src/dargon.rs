//! Built-in definitions for the Dargon expression tree.

use astgen_codegen::{GeneratorOptions, GeneratorOptionsBuilder};
use astgen_schema::{DefinitionTable, ParseError, parse_table};

/// Expression node entries, in declaration order.
pub const EXPR_ENTRIES: &[&str] = &[
    "Binary: Expr* left, Token op, Expr* right",
    "Grouping: Expr* expression",
    "Literal: std::string value",
    "Unary: Token op, Expr* right",
];

/// Headers the expression nodes depend on.
pub const EXPR_INCLUDES: &[&str] = &["<string>", "\"../lex/Token.h\""];

/// Parses [`EXPR_ENTRIES`].
///
/// # Errors
/// Returns `ParseError` if an entry is invalid.
pub fn expr_table() -> Result<DefinitionTable, ParseError> {
    parse_table(EXPR_ENTRIES)
}

/// Options builder preset for the expression header.
#[must_use]
pub fn expr_options() -> GeneratorOptionsBuilder {
    GeneratorOptions::builder()
        .base("Expr")
        .namespace("dargon")
        .includes(EXPR_INCLUDES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_codegen::Generator;

    #[test]
    fn test_expr_table_parses() {
        let table = expr_table().expect("Failed to parse");
        assert_eq!(table.len(), EXPR_ENTRIES.len());
        assert_eq!(table.get("Binary").map(|n| n.field_count()), Some(3));
        assert_eq!(table.get("Literal").map(|n| n.field_count()), Some(1));
    }

    #[test]
    fn test_expr_header() {
        let table = expr_table().expect("Failed to parse");
        let options = expr_options().build().expect("valid options");
        let text = Generator::new(&table, &options)
            .generate()
            .expect("Failed to generate")
            .to_string();

        assert!(text.contains("#include \"../lex/Token.h\"\n"));
        assert!(text.contains("    Unary(Token op, Expr* right)\n    : op(op), right(right){}\n"));
        assert!(text.contains("    const std::string value;\n"));
    }
}
