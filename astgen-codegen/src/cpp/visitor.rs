//! Visitor scaffolding: forward declarations, the visitor interface, and
//! the `Accept` overrides wired into every node.

use super::INDENT;
use crate::options::VisitorOptions;
use astgen_schema::{DefinitionTable, NodeSpec};

/// Name of the visitor interface for a base type (`Expr` -> `ExprVisitor`).
#[must_use]
pub fn visitor_name(base: &str) -> String {
    format!("{base}Visitor")
}

/// `struct Name;` for every node, in table order.
#[must_use]
pub fn forward_declarations(table: &DefinitionTable) -> Vec<String> {
    table
        .iter()
        .map(|node| format!("struct {};", node.name()))
        .collect()
}

/// The abstract visitor with one `Visit<Name>` method per node.
#[must_use]
pub fn interface(base: &str, table: &DefinitionTable, options: &VisitorOptions) -> Vec<String> {
    let name = visitor_name(base);
    let mut lines = vec![
        "/**".to_string(),
        format!(" * @brief Visitor over every {base} node."),
        " */".to_string(),
        format!("struct {name} {{"),
        format!("{INDENT}virtual ~{name}() {{}}"),
    ];

    for node in table {
        lines.push(format!(
            "{INDENT}virtual {} Visit{}({}& node) = 0;",
            options.return_type,
            node.name(),
            node.name()
        ));
    }

    lines.push("};".to_string());
    lines
}

/// Body lines of the base type: destructor and pure `Accept`.
#[must_use]
pub fn base_members(base: &str, options: &VisitorOptions) -> Vec<String> {
    vec![
        format!("{INDENT}virtual ~{base}() {{}}"),
        format!(
            "{INDENT}virtual {} Accept({}& visitor) = 0;",
            options.return_type,
            visitor_name(base)
        ),
    ]
}

/// The `Accept` override dispatching to `Visit<Name>`.
#[must_use]
pub fn accept_override(base: &str, node: &NodeSpec, options: &VisitorOptions) -> Vec<String> {
    let call = format!("visitor.Visit{}(*this);", node.name());
    let body = if options.returns_void() {
        call
    } else {
        format!("return {call}")
    };

    vec![
        format!(
            "{INDENT}{} Accept({}& visitor) override {{",
            options.return_type,
            visitor_name(base)
        ),
        format!("{INDENT}{INDENT}{body}"),
        format!("{INDENT}}}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::parse_table;

    fn table() -> DefinitionTable {
        parse_table(&["Binary: Expr* left, Token op, Expr* right", "Unary: Token op, Expr* right"])
            .expect("Failed to parse")
    }

    #[test]
    fn test_forward_declarations() {
        assert_eq!(forward_declarations(&table()), ["struct Binary;", "struct Unary;"]);
    }

    #[test]
    fn test_interface() {
        let lines = interface("Expr", &table(), &VisitorOptions::new("Register&"));
        assert_eq!(
            &lines[3..],
            [
                "struct ExprVisitor {",
                "    virtual ~ExprVisitor() {}",
                "    virtual Register& VisitBinary(Binary& node) = 0;",
                "    virtual Register& VisitUnary(Unary& node) = 0;",
                "};",
            ]
        );
    }

    #[test]
    fn test_base_members() {
        assert_eq!(
            base_members("Stmt", &VisitorOptions::default()),
            [
                "    virtual ~Stmt() {}",
                "    virtual void Accept(StmtVisitor& visitor) = 0;",
            ]
        );
    }

    #[test]
    fn test_accept_override_returns_value() {
        let t = table();
        let node = t.get("Unary").expect("node present");
        assert_eq!(
            accept_override("Expr", node, &VisitorOptions::new("std::string")),
            [
                "    std::string Accept(ExprVisitor& visitor) override {",
                "        return visitor.VisitUnary(*this);",
                "    }",
            ]
        );
    }
}
