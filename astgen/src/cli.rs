//! Command-line arguments.

use astgen::codegen::{CodegenError, DocumentMeta, GeneratorOptions, VisitorOptions};
use astgen::dargon;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "astgen")]
#[command(about = "Generate C++ AST node declarations from a definition table", long_about = None)]
pub struct Cli {
    /// Definitions file, one `Name: type name, ...` entry per line.
    /// Defaults to the built-in Dargon expression table.
    #[arg(long)]
    pub defs: Option<PathBuf>,

    /// Output header.
    #[arg(short = 'o', long, default_value = "Expr.h")]
    pub out: PathBuf,

    /// Print the header to stdout instead of writing `--out`.
    #[arg(long)]
    pub stdout: bool,

    /// Base type every node derives from.
    #[arg(long, default_value = "Expr")]
    pub base: String,

    /// Enclosing namespace; pass an empty string for none.
    #[arg(long, default_value = "dargon")]
    pub namespace: String,

    /// Extra include, e.g. `<vector>` or `"Token.h"`. Repeatable.
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Title line of the header comment.
    #[arg(long)]
    pub title: Option<String>,

    /// Copyright line of the header comment.
    #[arg(long)]
    pub copyright: Option<String>,

    /// Description line of the header comment.
    #[arg(long)]
    pub description: Option<String>,

    /// Version the header first appeared in.
    #[arg(long)]
    pub since: Option<String>,

    /// Emit visitor scaffolding (visitor interface and `Accept` overrides).
    #[arg(long)]
    pub visitor: bool,

    /// Return type of `Accept` and the `Visit*` methods.
    #[arg(long, default_value = "void", requires = "visitor")]
    pub visitor_return: String,
}

impl Cli {
    /// Builds generator options from the arguments.
    pub fn options(&self) -> Result<GeneratorOptions, CodegenError> {
        let mut meta = DocumentMeta::default();
        if let Some(file_name) = self.out.file_name() {
            meta.file_name = file_name.to_string_lossy().into_owned();
        }
        if let Some(title) = &self.title {
            meta.title = title.clone();
        }
        if let Some(copyright) = &self.copyright {
            meta.copyright = copyright.clone();
        }
        if let Some(description) = &self.description {
            meta.description = description.clone();
        }
        if let Some(since) = &self.since {
            meta.version = since.clone();
        }

        let mut builder = if self.defs.is_none() {
            dargon::expr_options()
        } else {
            GeneratorOptions::builder()
        };
        builder = builder
            .base(&self.base)
            .namespace(&self.namespace)
            .meta(meta);
        for include in &self.includes {
            builder = builder.include(include);
        }
        if self.visitor {
            builder = builder.visitor(VisitorOptions::new(&self.visitor_return));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_dargon_preset() {
        let cli = Cli::try_parse_from(["astgen"]).expect("parse args");
        assert!(cli.defs.is_none());
        assert!(!cli.stdout);

        let options = cli.options().expect("valid options");
        assert_eq!(options.base(), "Expr");
        assert_eq!(options.includes(), dargon::EXPR_INCLUDES);
        assert_eq!(options.meta().file_name, "Expr.h");
        assert!(options.visitor().is_none());
    }

    #[test]
    fn test_custom_arguments() {
        let cli = Cli::try_parse_from([
            "astgen",
            "--defs",
            "stmt.defs",
            "-o",
            "out/Stmt.h",
            "--base",
            "Stmt",
            "--include",
            "<vector>",
            "--description",
            "Statements.",
            "--visitor",
            "--visitor-return",
            "Register&",
        ])
        .expect("parse args");

        let options = cli.options().expect("valid options");
        assert_eq!(options.base(), "Stmt");
        assert_eq!(options.includes(), ["<string>", "<vector>"]);
        assert_eq!(options.meta().file_name, "Stmt.h");
        assert_eq!(options.meta().description, "Statements.");
        assert_eq!(options.include_guard(), "DARGON_STMT_H");
        assert_eq!(
            options.visitor().map(|v| v.return_type.as_str()),
            Some("Register&")
        );
    }

    #[test]
    fn test_visitor_return_requires_visitor() {
        assert!(Cli::try_parse_from(["astgen", "--visitor-return", "int"]).is_err());
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let cli = Cli::try_parse_from(["astgen", "--base", "not valid"]).expect("parse args");
        assert!(matches!(
            cli.options(),
            Err(CodegenError::InvalidOption { option: "base", .. })
        ));
    }
}
