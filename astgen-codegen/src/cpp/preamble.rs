//! Fixed document sections: header comment, include guard, includes,
//! namespace and the base type.

use super::visitor;
use crate::document::DocumentMeta;
use crate::options::VisitorOptions;

/// The copyright / description comment block.
#[must_use]
pub fn header_comment(meta: &DocumentMeta) -> Vec<String> {
    vec![
        "/*".to_string(),
        format!(" * {}", meta.title),
        format!(" * {}", meta.copyright),
        " *".to_string(),
        format!(" * FILE: {}", meta.file_name),
        " *".to_string(),
        format!(" * DESCRIPTION: {}", meta.description),
        " *".to_string(),
        format!(" * SINCE: {}", meta.version),
        " *".to_string(),
        " */".to_string(),
    ]
}

/// `#ifndef` / `#define` pair.
#[must_use]
pub fn guard_open(guard: &str) -> Vec<String> {
    vec![format!("#ifndef {guard}"), format!("#define {guard}")]
}

/// Closing `#endif`.
#[must_use]
pub fn guard_close(guard: &str) -> String {
    format!("#endif // {guard}")
}

/// One `#include` per entry.
#[must_use]
pub fn includes(includes: &[String]) -> Vec<String> {
    includes
        .iter()
        .map(|include| format!("#include {include}"))
        .collect()
}

/// The base marker type. With a visitor it also gets a virtual destructor
/// and a pure `Accept`.
#[must_use]
pub fn base_declaration(base: &str, visitor: Option<&VisitorOptions>) -> Vec<String> {
    let mut lines = vec![
        "/**".to_string(),
        format!(" * @brief The base class of all {base} nodes."),
        " */".to_string(),
    ];

    match visitor {
        None => lines.push(format!("struct {base} {{ }};")),
        Some(options) => {
            lines.push(format!("struct {base} {{"));
            lines.extend(visitor::base_members(base, options));
            lines.push("};".to_string());
        }
    }

    lines
}
