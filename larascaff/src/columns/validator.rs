//! Column list validation
//!
//! Checks every comma-separated token and collects one [`ColumnIssue`] per
//! malformed token instead of stopping at the first failure.

use std::fmt;

use super::column::ColumnSpec;
use crate::error::ColumnParseError;

/// A malformed token in a column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIssue {
    /// Zero-based position of the token
    pub index: usize,
    /// The offending token, trimmed
    pub token: String,
    /// Why the token was rejected
    pub reason: ColumnParseError,
}

impl ColumnIssue {
    /// Create a new issue
    pub fn new(index: usize, token: impl Into<String>, reason: ColumnParseError) -> Self {
        Self {
            index,
            token: token.into(),
            reason,
        }
    }
}

impl fmt::Display for ColumnIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Column at index {} ('{}') has an invalid format: {}.",
            self.index, self.token, self.reason
        )
    }
}

/// Validate a raw column list
///
/// Returns an empty list when every token conforms.
///
/// # Examples
///
/// ```
/// # use larascaff::validate_columns;
/// assert!(validate_columns("title:string,age:integer?").is_empty());
///
/// let issues = validate_columns("title:string,age:intger,body");
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues[0].index, 1);
/// assert_eq!(issues[1].index, 2);
/// ```
#[must_use]
pub fn validate_columns(columns: &str) -> Vec<ColumnIssue> {
    columns
        .split(',')
        .enumerate()
        .filter_map(|(index, token)| {
            ColumnSpec::parse(token)
                .err()
                .map(|reason| ColumnIssue::new(index, token.trim(), reason))
        })
        .collect()
}
