//! Artifact generators
//!
//! Each generator turns a [`ModelContext`] into one [`GeneratedFile`] by
//! filling a stub's placeholder map. Generators never touch the disk; the
//! [`crate::scaffold::ArtifactWriter`] applies their output.

pub mod controller;
pub mod migration;
pub mod model;
pub mod resource;
pub mod route;
pub mod support;

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::columns::ColumnSpec;
use crate::config::ScaffoldConfig;
use crate::helpers::TemplateHelpers;

/// Kind of artifact produced by a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Shared support classes
    Support,
    /// Eloquent model
    Model,
    /// Create-table migration
    Migration,
    /// JSON API resource
    Resource,
    /// API controller
    Controller,
    /// Route registration line
    Route,
    /// Published stub template
    Stub,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Support => "support",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Resource => "resource",
            Self::Controller => "controller",
            Self::Route => "route",
            Self::Stub => "stub",
        })
    }
}

/// How a generated file is applied to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or replace the file
    Overwrite,
    /// Create the file only if it does not exist yet
    CreateIfMissing,
    /// Append to a file that must already exist
    Append,
}

/// Represents a generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Artifact this file belongs to
    pub kind: ArtifactKind,
    /// Relative path from project root
    pub path: PathBuf,
    /// File content (or the text to append)
    pub content: String,
    /// File description for user feedback
    pub description: String,
    /// How the content is written
    pub mode: WriteMode,
}

/// Everything a generator needs to know about the model being scaffolded
#[derive(Debug, Clone, Copy)]
pub struct ModelContext<'a> {
    /// Model class name (e.g. "`BlogPost`")
    pub model_name: &'a str,
    /// Parsed columns in input order
    pub columns: &'a [ColumnSpec],
    /// Project configuration
    pub config: &'a ScaffoldConfig,
    /// Timestamp used for the migration file name
    pub timestamp: NaiveDateTime,
}

impl<'a> ModelContext<'a> {
    /// Create a context
    #[must_use]
    pub const fn new(
        model_name: &'a str,
        columns: &'a [ColumnSpec],
        config: &'a ScaffoldConfig,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            model_name,
            columns,
            config,
            timestamp,
        }
    }

    /// Database table name
    #[must_use]
    pub fn table_name(&self) -> String {
        TemplateHelpers::to_table_name(self.model_name)
    }

    /// Request-facing attributes paired with the column they come from
    ///
    /// Framework-managed columns are skipped and morph columns contribute
    /// both of their attributes.
    pub fn attributes(&self) -> impl Iterator<Item = (String, &'a ColumnSpec)> + 'a {
        self.columns.iter().flat_map(|column| {
            column
                .attribute_names()
                .into_iter()
                .map(move |name| (name, column))
        })
    }
}

/// Join rendered lines, each indented and newline-terminated
pub(crate) fn indented_lines<I>(lines: I, indent: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .map(|line| format!("{pad}{line}\n"))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::columns::parse_columns;
    use chrono::NaiveDate;

    pub fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|date| date.and_hms_opt(9, 30, 5))
            .expect("valid fixed timestamp")
    }

    pub fn columns(spec: &str) -> Vec<ColumnSpec> {
        parse_columns(spec).expect("test columns are valid")
    }
}
