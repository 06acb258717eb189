//! Definition entry parser.
//!
//! Each entry has the shape `Name: type1 name1, type2 name2, ...`. The
//! name is everything before the first colon; the remainder is a
//! comma-separated list of fields, each exactly one type token and one
//! name token separated by whitespace.

use crate::error::ParseError;
use crate::types::{DefinitionTable, FieldSpec, NodeSpec};
use std::collections::HashMap;
use std::path::Path;

/// Marks a comment line in a definitions file.
pub const COMMENT_PREFIX: char = '#';

/// Parses a single entry into a node definition.
///
/// # Arguments
/// * `line` - 1-based position used in error reports
/// * `entry` - Entry text
///
/// # Errors
/// Returns `ParseError` if the entry is malformed, declares no fields, or
/// fails validation.
pub fn parse_entry(line: usize, entry: &str) -> Result<NodeSpec, ParseError> {
    let entry = entry.trim();

    let Some((name, body)) = entry.split_once(':') else {
        return Err(ParseError::malformed_entry(line, entry));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::malformed_entry(line, entry));
    }
    if body.trim().is_empty() {
        return Err(ParseError::EmptyFieldList {
            line,
            entry: entry.to_string(),
        });
    }

    let mut fields = Vec::new();
    for (field_index, token) in body.split(',').enumerate() {
        let mut parts = token.split_whitespace();
        let (Some(type_name), Some(field_name), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::malformed_field(
                line,
                entry,
                field_index,
                token.trim(),
            ));
        };
        let field = FieldSpec::new(type_name, field_name)
            .map_err(|e| ParseError::invalid(line, entry, e))?;
        fields.push(field);
    }

    NodeSpec::new(name, fields).map_err(|e| ParseError::invalid(line, entry, e))
}

/// Parses an ordered list of entries into a definition table.
///
/// Entry positions (1-based) are reported as line numbers.
///
/// # Errors
/// Returns the first `ParseError` found; no partial table is returned.
pub fn parse_table<S: AsRef<str>>(entries: &[S]) -> Result<DefinitionTable, ParseError> {
    parse_lines(
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx + 1, entry.as_ref())),
    )
}

/// Parses the contents of a definitions file.
///
/// One entry per line. Blank lines and lines starting with `#` are
/// skipped; errors report source line numbers.
///
/// # Errors
/// Returns the first `ParseError` found.
pub fn parse_definitions(text: &str) -> Result<DefinitionTable, ParseError> {
    parse_lines(text.lines().enumerate().filter_map(|(idx, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            None
        } else {
            Some((idx + 1, raw))
        }
    }))
}

/// Reads and parses a definitions file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any parse error.
pub fn parse_definitions_file(path: &Path) -> Result<DefinitionTable, ParseError> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!("Read definitions from {}", path.display());
    parse_definitions(&text)
}

fn parse_lines<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
) -> Result<DefinitionTable, ParseError> {
    let mut table = DefinitionTable::new();
    let mut first_lines: HashMap<String, usize> = HashMap::new();

    for (line, entry) in lines {
        let node = parse_entry(line, entry)?;

        if let Some(&first_line) = first_lines.get(node.name()) {
            return Err(ParseError::DuplicateName {
                name: node.name().to_string(),
                line,
                first_line,
            });
        }
        first_lines.insert(node.name().to_string(), line);

        tracing::debug!(
            "Parsed node {} with {} field(s) on line {}",
            node.name(),
            node.field_count(),
            line
        );
        table
            .push(node)
            .map_err(|e| ParseError::invalid(line, entry.trim(), e))?;
    }

    Ok(table)
}
