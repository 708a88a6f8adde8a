//! Configuration management for larascaff
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `LARASCAFF_` prefix, nested
//!    keys separated by `__`, e.g. `LARASCAFF_PATHS__ROUTES`)
//! 2. `<project root>/larascaff.toml`
//! 3. Hardcoded defaults matching a stock Laravel layout (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # larascaff.toml
//! route_case = "kebab"
//! stub_path = "resources/stubs"
//!
//! [paths]
//! controllers = "app/Http/Controllers/Api"
//! routes = "routes/api.php"
//!
//! [namespaces]
//! controllers = "App\\Http\\Controllers\\Api"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Name of the per-project configuration file
pub const CONFIG_FILE: &str = "larascaff.toml";

/// Case convention for the route resource segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCase {
    /// `blog-posts`
    #[default]
    Kebab,
    /// `blog_posts`
    Snake,
    /// `blogposts`
    Lower,
}

/// Output locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory for Eloquent models
    pub models: PathBuf,
    /// Directory for API controllers
    pub controllers: PathBuf,
    /// Directory for API resources
    pub resources: PathBuf,
    /// Directory for migrations
    pub migrations: PathBuf,
    /// Routes file that receives `apiResource` registrations
    pub routes: PathBuf,
    /// Directory for shared support classes (base controller, responses)
    pub support: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            models: PathBuf::from("app/Models"),
            controllers: PathBuf::from("app/Http/Controllers/Api"),
            resources: PathBuf::from("app/Http/Resources"),
            migrations: PathBuf::from("database/migrations"),
            routes: PathBuf::from("routes/api.php"),
            support: PathBuf::from("app/Support"),
        }
    }
}

/// PHP namespaces matching [`PathSettings`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceSettings {
    /// Namespace of generated models
    pub models: String,
    /// Namespace of generated controllers
    pub controllers: String,
    /// Namespace of generated resources
    pub resources: String,
    /// Namespace of support classes
    pub support: String,
}

impl Default for NamespaceSettings {
    fn default() -> Self {
        Self {
            models: "App\\Models".to_string(),
            controllers: "App\\Http\\Controllers\\Api".to_string(),
            resources: "App\\Http\\Resources".to_string(),
            support: "App\\Support".to_string(),
        }
    }
}

/// Complete larascaff configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory holding custom stubs; every stub must exist there when set
    #[serde(default)]
    pub stub_path: Option<PathBuf>,

    /// Case convention for route segments
    #[serde(default)]
    pub route_case: RouteCase,

    /// Output locations
    #[serde(default)]
    pub paths: PathSettings,

    /// PHP namespaces
    #[serde(default)]
    pub namespaces: NamespaceSettings,
}

impl ScaffoldConfig {
    /// Load configuration for a project
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if `larascaff.toml` or the
    /// environment contain values of the wrong shape.
    pub fn load(project_root: &Path) -> Result<Self, ScaffoldError> {
        Self::figment(project_root)
            .extract()
            .map_err(|err| ScaffoldError::Config(Box::new(err)))
    }

    /// Load configuration from a specific file, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the file contains invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ScaffoldError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|err| ScaffoldError::Config(Box::new(err)))
    }

    /// The layered configuration sources for a project
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(project_root.join(CONFIG_FILE)))
            .merge(Env::prefixed("LARASCAFF_").split("__").lowercase(true))
    }

    /// Resolve the stub directory against the project root
    #[must_use]
    pub fn stub_dir(&self, project_root: &Path) -> Option<PathBuf> {
        self.stub_path.as_ref().map(|dir| project_root.join(dir))
    }
}
