//! Error types for definition parsing and validation.

use thiserror::Error;

/// Error type for structural validation of node definitions.
///
/// These errors carry no source position; the parser wraps them in
/// [`ParseError`] together with the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A node was declared without any fields.
    #[error("node '{node}' declares no fields")]
    EmptyFieldList {
        /// Node name.
        node: String,
    },

    /// A node or field name is not a valid identifier.
    #[error("invalid {role} name '{name}'")]
    InvalidIdentifier {
        /// What the name was used for (`node`, `field`, ...).
        role: &'static str,
        /// The rejected name.
        name: String,
    },

    /// A field type reference contains characters a type cannot have.
    #[error("invalid type '{type_name}' for field '{field}'")]
    InvalidTypeName {
        /// Field name.
        field: String,
        /// The rejected type.
        type_name: String,
    },

    /// The same field name appears twice in one node.
    #[error("duplicate field '{field}' in node '{node}'")]
    DuplicateField {
        /// Node name.
        node: String,
        /// Field name.
        field: String,
    },

    /// Two nodes share a name.
    #[error("duplicate node definition: '{name}'")]
    DuplicateName {
        /// Node name.
        name: String,
    },
}

/// Error type for parsing definition entries.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Entry is missing the `Name:` prefix.
    #[error("line {line}: malformed entry '{entry}', expected 'Name: type name, ...'")]
    MalformedEntry {
        /// 1-based line (or position in the entry list).
        line: usize,
        /// Offending entry text.
        entry: String,
    },

    /// A field token did not split into exactly a type and a name.
    #[error("line {line}: malformed field #{field_index} '{token}' in entry '{entry}'")]
    MalformedField {
        /// 1-based line (or position in the entry list).
        line: usize,
        /// Offending entry text.
        entry: String,
        /// 0-based index of the field within the entry.
        field_index: usize,
        /// The field token as written.
        token: String,
    },

    /// Entry has a name but nothing after the colon.
    #[error("line {line}: entry '{entry}' declares no fields")]
    EmptyFieldList {
        /// 1-based line (or position in the entry list).
        line: usize,
        /// Offending entry text.
        entry: String,
    },

    /// Node name already used by an earlier entry.
    #[error("line {line}: duplicate node '{name}', first defined on line {first_line}")]
    DuplicateName {
        /// Node name.
        name: String,
        /// 1-based line of the duplicate.
        line: usize,
        /// 1-based line of the first definition.
        first_line: usize,
    },

    /// Entry parsed but failed validation.
    #[error("line {line}: {source} in entry '{entry}'")]
    Invalid {
        /// 1-based line (or position in the entry list).
        line: usize,
        /// Offending entry text.
        entry: String,
        /// Underlying validation failure.
        source: SchemaError,
    },

    /// IO error while reading a definitions file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a malformed entry error.
    pub fn malformed_entry(line: usize, entry: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line,
            entry: entry.into(),
        }
    }

    /// Creates a malformed field error.
    pub fn malformed_field(
        line: usize,
        entry: impl Into<String>,
        field_index: usize,
        token: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            line,
            entry: entry.into(),
            field_index,
            token: token.into(),
        }
    }

    /// Wraps a validation error with its entry context.
    pub fn invalid(line: usize, entry: impl Into<String>, source: SchemaError) -> Self {
        Self::Invalid {
            line,
            entry: entry.into(),
            source,
        }
    }

    /// Returns the line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedEntry { line, .. }
            | Self::MalformedField { line, .. }
            | Self::EmptyFieldList { line, .. }
            | Self::DuplicateName { line, .. }
            | Self::Invalid { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_display() {
        let err = ParseError::malformed_field(3, "Bad: int", 0, "int");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("#0"));
        assert!(msg.contains("'Bad: int'"));
    }

    #[test]
    fn test_invalid_wraps_source() {
        let err = ParseError::invalid(
            1,
            "1st: int x",
            SchemaError::InvalidIdentifier {
                role: "node",
                name: "1st".to_string(),
            },
        );
        assert_eq!(err.line(), Some(1));
        assert_eq!(
            err.to_string(),
            "line 1: invalid node name '1st' in entry '1st: int x'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_has_no_line() {
        let err = ParseError::from(std::io::Error::other("boom"));
        assert_eq!(err.line(), None);
    }
}
