//! larascaff library
//!
//! CRUD scaffolding for Laravel applications. Given a model name and a column
//! specification such as `title:string,age:integer?,status:string*draft`, the
//! [`Scaffolder`] renders stub templates into a model, a migration, an API
//! resource, a controller and a route registration.
//!
//! # Example
//!
//! ```rust,no_run
//! use larascaff::{ScaffoldConfig, Scaffolder};
//!
//! # fn main() -> Result<(), larascaff::ScaffoldError> {
//! let root = std::path::PathBuf::from(".");
//! let config = ScaffoldConfig::load(&root)?;
//! let report = Scaffolder::new(root, config).run("BlogPost", Some("title:string,body:text?"))?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod columns;
pub mod config;
pub mod error;
pub mod generators;
pub mod helpers;
pub mod observability;
pub mod scaffold;
pub mod template;

pub use columns::{parse_columns, validate_columns, ColumnIssue, ColumnSpec, ColumnType};
pub use config::{RouteCase, ScaffoldConfig};
pub use error::{ColumnParseError, ScaffoldError};
pub use generators::{ArtifactKind, GeneratedFile, ModelContext, WriteMode};
pub use helpers::TemplateHelpers;
pub use scaffold::{ArtifactOutcome, ArtifactWriter, ScaffoldReport, Scaffolder, WriteStatus};
pub use template::{PlaceholderMap, StubLoader, StubRenderer};
