//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::columns::ColumnIssue;

/// Why a single `name:type[?|*default]` token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnParseError {
    /// Blank token, e.g. from a trailing comma
    #[error("empty column definition")]
    Empty,

    /// No `:` between name and type
    #[error("expected name:type")]
    MissingSeparator,

    /// Nothing before the `:`
    #[error("missing column name")]
    MissingName,

    /// Name contains characters outside `[A-Za-z0-9_]`
    #[error("invalid column name '{0}': use letters, digits and underscores")]
    InvalidName(String),

    /// Nothing after the `:`
    #[error("missing column type")]
    MissingType,

    /// Type is not in the supported vocabulary
    #[error("unknown column type '{0}'")]
    UnknownType(String),

    /// Trailing text that is neither `?` nor `*default`
    #[error("unexpected modifier '{0}': expected '?' or '*default'")]
    BadModifier(String),
}

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Model name is not a `PascalCase` identifier
    #[error("Invalid model name '{0}': must be PascalCase (e.g. Post, BlogPost)")]
    InvalidModelName(String),

    /// `--columns` was given but empty
    #[error("The columns option cannot be empty.")]
    EmptyColumns,

    /// One or more column definitions failed validation
    #[error("{} invalid column definition(s)", .0.len())]
    InvalidColumns(Vec<ColumnIssue>),

    /// Stub file could not be found
    #[error("Stub file not found: {}", .0.display())]
    MissingStub(PathBuf),

    /// Stub failed to render
    #[error("Failed to render stub '{name}': {source}")]
    Render {
        /// Stub name
        name: String,
        /// Underlying template error
        #[source]
        source: minijinja::Error,
    },

    /// A file the scaffolder expects to modify does not exist
    #[error("Expected file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Filesystem error
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
