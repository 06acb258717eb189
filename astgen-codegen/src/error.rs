//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Definition parsing error.
    #[error("definition parse error: {0}")]
    Parse(#[from] astgen_schema::ParseError),

    /// The output sink could not be written. The target is left untouched.
    #[error("cannot write output '{}': {source}", .path.display())]
    SinkWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// A generator option has an unusable value.
    #[error("invalid value '{value}' for option '{option}'")]
    InvalidOption {
        /// Option name.
        option: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A generated name would collide with another declaration.
    #[error("name '{name}' conflicts with the {with}")]
    NameConflict {
        /// Colliding name.
        name: String,
        /// What it collides with.
        with: &'static str,
    },
}

impl CodegenError {
    /// Creates an invalid option error.
    pub fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            value: value.into(),
        }
    }
}
