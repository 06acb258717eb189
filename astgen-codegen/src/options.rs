//! Generator configuration.

use crate::document::DocumentMeta;
use crate::error::CodegenError;
use astgen_schema::{is_identifier, is_type_name};

/// Settings for the optional visitor scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorOptions {
    /// Return type of `Accept` and every `Visit*` method.
    pub return_type: String,
}

impl VisitorOptions {
    /// Creates visitor options with the given return type.
    #[must_use]
    pub fn new(return_type: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
        }
    }

    /// Returns true if the visitor methods return nothing.
    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }
}

impl Default for VisitorOptions {
    fn default() -> Self {
        Self::new("void")
    }
}

/// Validated generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    base: String,
    namespace: String,
    includes: Vec<String>,
    meta: DocumentMeta,
    visitor: Option<VisitorOptions>,
}

impl GeneratorOptions {
    /// Starts a builder with default settings.
    #[must_use]
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::new()
    }

    /// Name of the base type every node derives from.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Enclosing namespace; empty for none.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Include directives in emission order, brackets or quotes included.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Header comment metadata.
    #[must_use]
    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    /// Visitor settings, if visitor scaffolding is enabled.
    #[must_use]
    pub fn visitor(&self) -> Option<&VisitorOptions> {
        self.visitor.as_ref()
    }

    /// Include guard macro, e.g. `DARGON_EXPR_H`.
    ///
    /// Leading and repeated underscores are dropped since those names are
    /// reserved, and a guard that would start with a digit gets a
    /// `HEADER_` prefix.
    #[must_use]
    pub fn include_guard(&self) -> String {
        let source = if self.namespace.is_empty() {
            self.meta.file_name.clone()
        } else {
            format!("{}_{}", self.namespace, self.meta.file_name)
        };

        let mut guard = String::with_capacity(source.len());
        for c in source.chars() {
            if c.is_ascii_alphanumeric() {
                guard.push(c.to_ascii_uppercase());
            } else if !guard.is_empty() && !guard.ends_with('_') {
                guard.push('_');
            }
        }

        if guard.is_empty() {
            guard.push_str("HEADER");
        } else if guard.starts_with(|c: char| c.is_ascii_digit()) {
            guard.insert_str(0, "HEADER_");
        }
        guard
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptionsBuilder::new().into_options()
    }
}

/// Builder for [`GeneratorOptions`].
#[derive(Debug, Clone)]
pub struct GeneratorOptionsBuilder {
    base: String,
    namespace: String,
    includes: Vec<String>,
    meta: DocumentMeta,
    visitor: Option<VisitorOptions>,
}

impl GeneratorOptionsBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: "Expr".to_string(),
            namespace: "dargon".to_string(),
            includes: vec!["<string>".to_string()],
            meta: DocumentMeta::default(),
            visitor: None,
        }
    }

    /// Sets the base type name.
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Sets the enclosing namespace. An empty string disables it.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Appends an include directive (`<string>` or `"Token.h"`).
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// Replaces the include list.
    #[must_use]
    pub fn includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the header comment metadata.
    #[must_use]
    pub fn meta(mut self, meta: DocumentMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Enables visitor scaffolding.
    #[must_use]
    pub fn visitor(mut self, visitor: VisitorOptions) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// Validates the settings and builds the options.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidOption` if a name is not an
    /// identifier, an include is not bracketed or quoted, a metadata value
    /// would break the comment block, or the visitor return type is not a
    /// type reference.
    pub fn build(self) -> Result<GeneratorOptions, CodegenError> {
        if !is_identifier(&self.base) {
            return Err(CodegenError::invalid_option("base", self.base));
        }
        if !self.namespace.is_empty() && !is_identifier(&self.namespace) {
            return Err(CodegenError::invalid_option("namespace", self.namespace));
        }
        if let Some(bad) = self.includes.iter().find(|i| !is_include(i)) {
            return Err(CodegenError::invalid_option("include", bad.clone()));
        }
        for (option, value) in self.meta.entries() {
            if value.contains(['\n', '\r']) || value.contains("*/") {
                return Err(CodegenError::invalid_option(option, value));
            }
        }
        if self.meta.file_name.trim().is_empty() {
            return Err(CodegenError::invalid_option("file_name", ""));
        }
        if let Some(visitor) = &self.visitor {
            if !is_type_name(&visitor.return_type) {
                return Err(CodegenError::invalid_option(
                    "visitor_return",
                    visitor.return_type.clone(),
                ));
            }
        }
        Ok(self.into_options())
    }

    fn into_options(self) -> GeneratorOptions {
        GeneratorOptions {
            base: self.base,
            namespace: self.namespace,
            includes: self.includes,
            meta: self.meta,
            visitor: self.visitor,
        }
    }
}

impl Default for GeneratorOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_include(include: &str) -> bool {
    let bracketed = include.starts_with('<') && include.ends_with('>');
    let quoted = include.starts_with('"') && include.ends_with('"');
    (bracketed || quoted) && include.len() > 2 && !include.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.base(), "Expr");
        assert_eq!(options.namespace(), "dargon");
        assert_eq!(options.includes(), ["<string>"]);
        assert!(options.visitor().is_none());
        assert_eq!(options.include_guard(), "DARGON_EXPR_H");
    }

    #[test]
    fn test_builder_overrides() {
        let options = GeneratorOptions::builder()
            .base("Stmt")
            .namespace("")
            .include("\"../lex/Token.h\"")
            .meta(DocumentMeta::default().with_file_name("stmt-nodes.hpp"))
            .visitor(VisitorOptions::new("Register&"))
            .build()
            .expect("valid options");
        assert_eq!(options.base(), "Stmt");
        assert_eq!(options.includes(), ["<string>", "\"../lex/Token.h\""]);
        assert_eq!(options.include_guard(), "STMT_NODES_HPP");
        assert_eq!(
            options.visitor().map(|v| v.return_type.as_str()),
            Some("Register&")
        );
    }

    #[test]
    fn test_include_guard_is_a_valid_macro() {
        let guard = |namespace: &str, file_name: &str| {
            GeneratorOptions::builder()
                .namespace(namespace)
                .meta(DocumentMeta::default().with_file_name(file_name))
                .build()
                .expect("valid options")
                .include_guard()
        };
        assert_eq!(guard("", "2d.h"), "HEADER_2D_H");
        assert_eq!(guard("", "_x.h"), "X_H");
        assert_eq!(guard("", "a--b.h"), "A_B_H");
        assert_eq!(guard("_impl", "Expr.h"), "IMPL_EXPR_H");
        assert_eq!(guard("", "++"), "HEADER");
        assert_eq!(guard("dargon", "Expr.h"), "DARGON_EXPR_H");
    }

    #[test]
    fn test_includes_replaces_list() {
        let options = GeneratorOptions::builder()
            .includes(["<vector>", "<memory>"])
            .build()
            .expect("valid options");
        assert_eq!(options.includes(), ["<vector>", "<memory>"]);
    }

    #[test]
    fn test_rejects_bad_base() {
        let err = GeneratorOptions::builder().base("my base").build().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "base", .. }));
    }

    #[test]
    fn test_rejects_bad_namespace() {
        let err = GeneratorOptions::builder()
            .namespace("dargon::ast")
            .build()
            .unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "namespace", .. }));
    }

    #[test]
    fn test_rejects_keyword_base_and_namespace() {
        let err = GeneratorOptions::builder().base("class").build().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "base", .. }));

        let err = GeneratorOptions::builder().namespace("namespace").build().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "namespace", .. }));
    }

    #[test]
    fn test_rejects_bare_include() {
        let err = GeneratorOptions::builder().include("string").build().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "include", .. }));
        assert!(GeneratorOptions::builder().include("<>").build().is_err());
    }

    #[test]
    fn test_rejects_comment_terminator_in_meta() {
        let meta = DocumentMeta {
            description: "Ends */ early".to_string(),
            ..DocumentMeta::default()
        };
        let err = GeneratorOptions::builder().meta(meta).build().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "description", .. }));
    }

    #[test]
    fn test_rejects_bad_visitor_return() {
        let err = GeneratorOptions::builder()
            .visitor(VisitorOptions::new("const Register&"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { option: "visitor_return", .. }));
    }

    #[test]
    fn test_visitor_returns_void() {
        assert!(VisitorOptions::default().returns_void());
        assert!(!VisitorOptions::new("int").returns_void());
    }
}
