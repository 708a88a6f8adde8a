//! Placeholder substitution
//!
//! Stubs use `{{ name }}` placeholders. Rendering is a single pass: values are
//! inserted verbatim and never scanned again, so the result does not depend
//! on the order of the placeholder map.

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;

use super::loader::StubLoader;
use super::stubs::Stub;
use crate::error::ScaffoldError;

/// Placeholder name to replacement text
pub type PlaceholderMap = BTreeMap<&'static str, String>;

/// Renders stubs with a placeholder map
pub struct StubRenderer {
    loader: StubLoader,
    env: Environment<'static>,
}

impl StubRenderer {
    /// Create a renderer over a loader
    #[must_use]
    pub fn new(loader: StubLoader) -> Self {
        let mut env = Environment::new();
        // Generated code is not HTML, and stubs end with a newline that must survive.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { loader, env }
    }

    /// Render raw stub text
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::{PlaceholderMap, StubLoader, StubRenderer};
    /// let renderer = StubRenderer::new(StubLoader::builtin());
    /// let mut map = PlaceholderMap::new();
    /// map.insert("modelName", "Post".to_string());
    /// let out = renderer.render_str("model", "class {{ modelName }} {}", &map).unwrap();
    /// assert_eq!(out, "class Post {}");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the stub has a syntax error or
    /// references a placeholder missing from the map.
    pub fn render_str(
        &self,
        name: &str,
        source: &str,
        placeholders: &PlaceholderMap,
    ) -> Result<String, ScaffoldError> {
        self.env
            .render_str(source, placeholders)
            .map_err(|source| ScaffoldError::Render {
                name: name.to_string(),
                source,
            })
    }

    /// Load and render a stub
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingStub`] or [`ScaffoldError::Io`] from
    /// loading, or [`ScaffoldError::Render`] from substitution.
    pub fn render(&self, stub: Stub, placeholders: &PlaceholderMap) -> Result<String, ScaffoldError> {
        let source = self.loader.load(stub)?;
        debug!(stub = %stub, placeholders = placeholders.len(), "rendering stub");
        self.render_str(stub.name(), &source, placeholders)
    }
}
