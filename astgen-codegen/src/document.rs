//! Generated document and its header metadata.

use crate::error::CodegenError;
use crate::sink;
use std::fmt;
use std::path::Path;

/// Metadata rendered into the header comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    /// Project title, first line of the comment block.
    pub title: String,
    /// Copyright / license line.
    pub copyright: String,
    /// File name shown in the block and used for the include guard.
    pub file_name: String,
    /// Short description of the file contents.
    pub description: String,
    /// Version the file first appeared in.
    pub version: String,
}

impl DocumentMeta {
    /// Returns a copy with a different file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Returns `(option name, value)` pairs for validation.
    pub(crate) fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("copyright", self.copyright.as_str()),
            ("file_name", self.file_name.as_str()),
            ("description", self.description.as_str()),
            ("version", self.version.as_str()),
        ]
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: "Dargon Programming Language".to_string(),
            copyright: "(C) Kyle Morris 2023 - See LICENSE.txt for license information"
                .to_string(),
            file_name: "Expr.h".to_string(),
            description: "Expressions.".to_string(),
            version: "v0.1".to_string(),
        }
    }
}

/// A fully assembled output document.
///
/// Built once by the generator and handed to the caller by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDocument {
    lines: Vec<String>,
}

impl EmittedDocument {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Document lines without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the document, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Writes the document to `path`, replacing any existing file atomically.
    ///
    /// # Errors
    /// Returns `CodegenError::SinkWrite` if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<(), CodegenError> {
        sink::write_atomic(path, self.to_string().as_bytes())
    }
}

impl fmt::Display for EmittedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_terminates_every_line() {
        let doc = EmittedDocument::from_lines(vec!["a".to_string(), String::new(), "b".to_string()]);
        assert_eq!(doc.to_string(), "a\n\nb\n");
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_default_meta() {
        let meta = DocumentMeta::default();
        assert_eq!(meta.file_name, "Expr.h");
        assert_eq!(meta.version, "v0.1");

        let meta = meta.with_file_name("Stmt.h");
        assert_eq!(meta.file_name, "Stmt.h");
        assert_eq!(meta.entries()[2], ("file_name", "Stmt.h"));
    }
}
