//! Column list grammar
//!
//! A column list is a comma-separated list of
//! `name:type[?|*default]` tokens:
//!
//! - `?` marks the column nullable
//! - `*value` gives the column a default (`*` alone defaults to `null`)
//! - `type` is one of the [`ColumnType`] tokens
//!
//! Validation ([`validate_columns`]) and parsing ([`parse_columns`]) share the
//! same per-token grammar in [`ColumnSpec::parse`].

pub mod column;
pub mod column_type;
pub mod parser;
pub mod validator;

pub use column::ColumnSpec;
pub use column_type::ColumnType;
pub use parser::parse_columns;
pub use validator::{validate_columns, ColumnIssue};
