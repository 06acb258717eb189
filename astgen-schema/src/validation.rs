//! Validation rules for node definitions.
//!
//! Names must be C++ identifiers and must not be reserved words. Type
//! references are looser: they may carry scope qualifiers and declarator
//! punctuation (`std::string`, `Expr*`, `Token&`) but never whitespace.

use crate::error::SchemaError;
use crate::types::FieldSpec;
use std::collections::HashSet;

/// C++ keywords and alternative operator tokens (C++20).
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "co_await", "co_return",
    "co_yield", "compl", "concept", "const", "const_cast", "consteval", "constexpr", "constinit",
    "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private", "protected", "public", "register", "reinterpret_cast",
    "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
    "struct", "switch", "template", "this", "thread_local", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
    "while", "xor", "xor_eq",
];

/// Returns true if `name` is a C++ reserved word.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Returns true if `name` is a valid C++ identifier that is not a keyword.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !is_keyword(name)
}

/// Returns true if `type_name` is an acceptable type reference.
#[must_use]
pub fn is_type_name(type_name: &str) -> bool {
    let Some(first) = type_name.chars().next() else {
        return false;
    };
    if !(first == '_' || first == ':' || first.is_ascii_alphabetic()) {
        return false;
    }
    type_name.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '*' | '&' | '<' | '>' | '[' | ']')
    })
}

/// Validates a name used in the given role.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if `name` is not an identifier.
pub fn validate_identifier(role: &'static str, name: &str) -> Result<(), SchemaError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            role,
            name: name.to_string(),
        })
    }
}

/// Validates a single field.
///
/// # Errors
/// Returns `SchemaError` if the name or type is invalid.
pub fn validate_field(type_name: &str, name: &str) -> Result<(), SchemaError> {
    validate_identifier("field", name)?;
    if !is_type_name(type_name) {
        return Err(SchemaError::InvalidTypeName {
            field: name.to_string(),
            type_name: type_name.to_string(),
        });
    }
    Ok(())
}

/// Validates a node name together with its field list.
///
/// # Errors
/// Returns `SchemaError` if the name is invalid, the field list is empty,
/// or a field name repeats.
pub fn validate_node(name: &str, fields: &[FieldSpec]) -> Result<(), SchemaError> {
    validate_identifier("node", name)?;

    if fields.is_empty() {
        return Err(SchemaError::EmptyFieldList {
            node: name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name()) {
            return Err(SchemaError::DuplicateField {
                node: name.to_string(),
                field: field.name().to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("left"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("Binary"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("std::string"));
    }

    #[test]
    fn test_keywords_are_not_identifiers() {
        for name in ["class", "struct", "int", "const", "namespace", "return", "this", "and"] {
            assert!(is_keyword(name), "{name}");
            assert!(!is_identifier(name), "{name}");
        }
        assert!(is_identifier("classes"));
        assert!(is_identifier("Class"));
        assert!(is_identifier("value"));
    }

    #[test]
    fn test_validate_field_rejects_keyword_name() {
        let err = validate_field("float", "struct").unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidIdentifier {
                role: "field",
                name: "struct".to_string()
            }
        );
        assert!(validate_field("int", "count").is_ok());
    }

    #[test]
    fn test_is_type_name() {
        assert!(is_type_name("Expr*"));
        assert!(is_type_name("std::string"));
        assert!(is_type_name("::Token"));
        assert!(is_type_name("std::vector<Expr*>"));
        assert!(is_type_name("Token&"));
        assert!(!is_type_name(""));
        assert!(!is_type_name("*Expr"));
        assert!(!is_type_name("Expr;"));
    }

    #[test]
    fn test_validate_field_rejects_bad_name() {
        let err = validate_field("int", "2x").unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidIdentifier {
                role: "field",
                name: "2x".to_string()
            }
        );
    }

    #[test]
    fn test_validate_field_rejects_bad_type() {
        let err = validate_field("int;", "x").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidTypeName { .. }));
    }

    #[test]
    fn test_validate_node_empty() {
        let err = validate_node("Empty", &[]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::EmptyFieldList {
                node: "Empty".to_string()
            }
        );
    }

    #[test]
    fn test_validate_node_duplicate_field() {
        let fields = vec![
            FieldSpec::new("int", "x").expect("valid field"),
            FieldSpec::new("float", "x").expect("valid field"),
        ];
        let err = validate_node("Point", &fields).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "x"));
    }

    #[test]
    fn test_validate_node_ok() {
        let fields = vec![
            FieldSpec::new("Expr*", "left").expect("valid field"),
            FieldSpec::new("Token", "op").expect("valid field"),
        ];
        assert!(validate_node("Binary", &fields).is_ok());
    }
}
