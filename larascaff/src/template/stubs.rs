//! Built-in stub catalogue
//!
//! Every stub ships inside the binary so generation works without any files
//! besides the target project.

use std::fmt;

/// A stub known to the scaffolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stub {
    /// Eloquent model
    Model,
    /// Create-table migration
    Migration,
    /// API controller
    Controller,
    /// JSON API resource
    Resource,
    /// `apiResource` route line
    Route,
    /// Shared CRUD base controller
    BaseController,
    /// JSON response envelope helper
    ApiResponse,
    /// Pagination meta helper
    MetaHelper,
    /// Filtering/sorting trait used by models
    HandlesQuery,
}

impl Stub {
    /// Every stub, in publishing order
    pub const ALL: &'static [Self] = &[
        Self::Model,
        Self::Migration,
        Self::Controller,
        Self::Resource,
        Self::Route,
        Self::BaseController,
        Self::ApiResponse,
        Self::MetaHelper,
        Self::HandlesQuery,
    ];

    /// Stub name without extension
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::Resource => "resource",
            Self::Route => "route",
            Self::BaseController => "base-controller",
            Self::ApiResponse => "api-response",
            Self::MetaHelper => "meta-helper",
            Self::HandlesQuery => "handles-query",
        }
    }

    /// File name on disk
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.stub", self.name())
    }

    /// Contents of the built-in stub
    #[must_use]
    pub const fn builtin(self) -> &'static str {
        match self {
            Self::Model => include_str!("../../stubs/model.stub"),
            Self::Migration => include_str!("../../stubs/migration.stub"),
            Self::Controller => include_str!("../../stubs/controller.stub"),
            Self::Resource => include_str!("../../stubs/resource.stub"),
            Self::Route => include_str!("../../stubs/route.stub"),
            Self::BaseController => include_str!("../../stubs/base-controller.stub"),
            Self::ApiResponse => include_str!("../../stubs/api-response.stub"),
            Self::MetaHelper => include_str!("../../stubs/meta-helper.stub"),
            Self::HandlesQuery => include_str!("../../stubs/handles-query.stub"),
        }
    }
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(Stub::Model.file_name(), "model.stub");
        assert_eq!(Stub::BaseController.file_name(), "base-controller.stub");
    }

    #[test]
    fn test_builtin_stubs_have_placeholders() {
        assert!(Stub::Model.builtin().contains("{{ modelName }}"));
        assert!(Stub::Model.builtin().contains("{{ fillable }}"));
        assert!(Stub::Migration.builtin().contains("{{ tableName }}"));
        assert!(Stub::Controller.builtin().contains("{{ storeRules }}"));
        assert!(Stub::Route.builtin().contains("{{ routePath }}"));
    }

    #[test]
    fn test_php_stubs_open_with_php_tag() {
        for stub in Stub::ALL.iter().filter(|s| **s != Stub::Route) {
            assert!(stub.builtin().starts_with("<?php"), "{stub} should start with <?php");
        }
    }
}
