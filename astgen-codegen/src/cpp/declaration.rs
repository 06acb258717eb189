//! Derived node struct generation.

use super::INDENT;
use super::visitor;
use crate::options::VisitorOptions;
use astgen_schema::NodeSpec;

/// Generator for one derived node declaration.
///
/// For `Binary: Expr* left, Token op, Expr* right` with base `Expr`:
///
/// ```text
/// struct Binary : public Expr {
/// public:
///     const Expr* left;
///     const Token op;
///     const Expr* right;
///     Binary(Expr* left, Token op, Expr* right)
///     : left(left), op(op), right(right){}
/// };
/// ```
pub struct DeclarationEmitter<'a> {
    base: &'a str,
    visitor: Option<&'a VisitorOptions>,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates an emitter for nodes deriving from `base`.
    #[must_use]
    pub fn new(base: &'a str) -> Self {
        Self {
            base,
            visitor: None,
        }
    }

    /// Adds an `Accept` override to every emitted node.
    #[must_use]
    pub fn with_visitor(mut self, visitor: Option<&'a VisitorOptions>) -> Self {
        self.visitor = visitor;
        self
    }

    /// Emits the declaration lines for `node`.
    #[must_use]
    pub fn emit(&self, node: &NodeSpec) -> Vec<String> {
        let mut lines = Vec::with_capacity(node.field_count() + 8);

        lines.push(format!("struct {} : public {} {{", node.name(), self.base));
        lines.push("public:".to_string());

        for field in node.fields() {
            lines.push(format!(
                "{INDENT}const {} {};",
                field.type_name(),
                field.name()
            ));
        }

        // Parameters shadow the fields they initialize.
        lines.push(format!(
            "{INDENT}{}({})",
            node.name(),
            parameter_list(node)
        ));
        lines.push(format!("{INDENT}: {}{{}}", initializer_list(node)));

        if let Some(options) = self.visitor {
            lines.extend(visitor::accept_override(self.base, node, options));
        }

        lines.push("};".to_string());

        tracing::debug!(
            "Emitted {} : {} with {} field(s)",
            node.name(),
            self.base,
            node.field_count()
        );

        lines
    }
}

/// Emits the declaration of `node` deriving from `base`.
#[must_use]
pub fn emit(base: &str, node: &NodeSpec) -> Vec<String> {
    DeclarationEmitter::new(base).emit(node)
}

/// `type1 name1, type2 name2, ...`
fn parameter_list(node: &NodeSpec) -> String {
    node.fields()
        .iter()
        .map(|field| format!("{} {}", field.type_name(), field.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name1(name1), name2(name2), ...`
fn initializer_list(node: &NodeSpec) -> String {
    node.fields()
        .iter()
        .map(|field| format!("{0}({0})", field.name()))
        .collect::<Vec<_>>()
        .join(", ")
}
