//! Document assembly.
//!
//! Wraps the per-node declarations in the header comment, include guard,
//! includes, namespace and base type to produce one complete header.

use crate::cpp::{DeclarationEmitter, preamble, visitor};
use crate::document::{DocumentMeta, EmittedDocument};
use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use astgen_schema::DefinitionTable;

/// Header generator for a definition table.
pub struct Generator<'a> {
    table: &'a DefinitionTable,
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(table: &'a DefinitionTable, options: &'a GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Checks that no generated name collides with another declaration.
    ///
    /// # Errors
    /// Returns `CodegenError::NameConflict` on the first collision.
    pub fn check(&self) -> Result<(), CodegenError> {
        let base = self.options.base();
        let visitor_name = self.options.visitor().map(|_| visitor::visitor_name(base));

        for node in self.table {
            if node.name() == base {
                return Err(CodegenError::NameConflict {
                    name: node.name().to_string(),
                    with: "base type",
                });
            }
            if visitor_name.as_deref() == Some(node.name()) {
                return Err(CodegenError::NameConflict {
                    name: node.name().to_string(),
                    with: "visitor interface",
                });
            }
            if let Some(field) = node.fields().iter().find(|f| f.name() == node.name()) {
                return Err(CodegenError::NameConflict {
                    name: field.name().to_string(),
                    with: "enclosing node",
                });
            }
        }

        Ok(())
    }

    /// Assembles the complete document.
    ///
    /// # Errors
    /// Returns `CodegenError::NameConflict` if [`check`](Self::check) fails.
    /// Nothing is emitted in that case.
    pub fn generate(&self) -> Result<EmittedDocument, CodegenError> {
        self.check()?;

        let options = self.options;
        let base = options.base();
        let guard = options.include_guard();
        let mut lines = Vec::new();

        lines.extend(preamble::header_comment(options.meta()));
        lines.extend(preamble::guard_open(&guard));
        lines.push(String::new());

        if !options.includes().is_empty() {
            lines.extend(preamble::includes(options.includes()));
            lines.push(String::new());
        }

        if !options.namespace().is_empty() {
            lines.push(format!("namespace {} {{", options.namespace()));
            lines.push(String::new());
        }

        if let Some(visitor_options) = options.visitor() {
            if !self.table.is_empty() {
                lines.extend(visitor::forward_declarations(self.table));
                lines.push(String::new());
            }
            lines.extend(visitor::interface(base, self.table, visitor_options));
            lines.push(String::new());
        }

        lines.extend(preamble::base_declaration(base, options.visitor()));
        lines.push(String::new());

        let emitter = DeclarationEmitter::new(base).with_visitor(options.visitor());
        for node in self.table {
            lines.extend(emitter.emit(node));
            lines.push(String::new());
        }

        if !options.namespace().is_empty() {
            lines.push(format!("}} // namespace {}", options.namespace()));
        }
        lines.push(preamble::guard_close(&guard));

        tracing::debug!(
            "Assembled {} with {} node(s), {} line(s)",
            options.meta().file_name,
            self.table.len(),
            lines.len()
        );

        Ok(EmittedDocument::from_lines(lines))
    }
}

/// Assembles a document with default options for the given base and metadata.
///
/// # Errors
/// Returns `CodegenError` if `base` is not a usable type name or a node
/// name collides with it.
pub fn assemble(
    table: &DefinitionTable,
    base: &str,
    meta: &DocumentMeta,
) -> Result<EmittedDocument, CodegenError> {
    let options = GeneratorOptions::builder()
        .base(base)
        .meta(meta.clone())
        .build()?;
    Generator::new(table, &options).generate()
}
