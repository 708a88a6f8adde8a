//! Stub resolution
//!
//! A stub is looked up in order:
//!
//! 1. the configured `stub_path`, where it must exist
//! 2. the project's published stubs in `stubs/larascaff/`
//! 3. the built-in copy

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::stubs::Stub;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;

/// Directory, relative to the project root, where stubs are published
pub const PUBLISHED_STUB_DIR: &str = "stubs/larascaff";

/// Where a stub was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// The configured stub directory
    Configured(PathBuf),
    /// A published project override
    Published(PathBuf),
    /// The copy compiled into the binary
    Builtin,
}

/// Loads stub text for rendering
#[derive(Debug, Clone)]
pub struct StubLoader {
    configured_dir: Option<PathBuf>,
    published_dir: PathBuf,
}

impl StubLoader {
    /// Create a loader for a project
    #[must_use]
    pub fn new(project_root: &Path, config: &ScaffoldConfig) -> Self {
        Self {
            configured_dir: config.stub_dir(project_root),
            published_dir: project_root.join(PUBLISHED_STUB_DIR),
        }
    }

    /// A loader that only serves built-in stubs
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            configured_dir: None,
            published_dir: PathBuf::new(),
        }
    }

    /// Decide where a stub comes from without reading it
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingStub`] when a stub directory is
    /// configured but does not contain the stub.
    pub fn resolve(&self, stub: Stub) -> Result<StubSource, ScaffoldError> {
        if let Some(dir) = &self.configured_dir {
            let path = dir.join(stub.file_name());
            return if path.is_file() {
                Ok(StubSource::Configured(path))
            } else {
                Err(ScaffoldError::MissingStub(path))
            };
        }

        if !self.published_dir.as_os_str().is_empty() {
            let path = self.published_dir.join(stub.file_name());
            if path.is_file() {
                return Ok(StubSource::Published(path));
            }
        }

        Ok(StubSource::Builtin)
    }

    /// Load the text of a stub
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingStub`] as for [`Self::resolve`], or
    /// [`ScaffoldError::Io`] if an override exists but cannot be read.
    pub fn load(&self, stub: Stub) -> Result<Cow<'static, str>, ScaffoldError> {
        let source = self.resolve(stub)?;
        debug!(stub = %stub, source = ?source, "resolved stub");

        match source {
            StubSource::Configured(path) | StubSource::Published(path) => fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|err| ScaffoldError::io(path, err)),
            StubSource::Builtin => Ok(Cow::Borrowed(stub.builtin())),
        }
    }
}
