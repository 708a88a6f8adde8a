//! Shared support classes
//!
//! Every generated controller extends `BaseController`, which answers through
//! `ApiResponse`, paginates with `MetaHelper` and relies on the model's
//! `HandlesQuery` trait for filtering and sorting.

use super::{ArtifactKind, GeneratedFile, WriteMode};
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Support stubs paired with the class they define
pub const SUPPORT_CLASSES: &[(Stub, &str)] = &[
    (Stub::BaseController, "BaseController"),
    (Stub::ApiResponse, "ApiResponse"),
    (Stub::MetaHelper, "MetaHelper"),
    (Stub::HandlesQuery, "HandlesQuery"),
];

/// Render every support class
///
/// `mode` is [`WriteMode::CreateIfMissing`] during generation so that
/// customised support files survive.
///
/// # Errors
///
/// Returns the first stub loading or rendering error.
pub fn generate(
    config: &ScaffoldConfig,
    renderer: &StubRenderer,
    mode: WriteMode,
) -> Result<Vec<GeneratedFile>, ScaffoldError> {
    let placeholders = PlaceholderMap::from([("namespace", config.namespaces.support.clone())]);

    SUPPORT_CLASSES
        .iter()
        .map(|(stub, class)| {
            Ok(GeneratedFile {
                kind: ArtifactKind::Support,
                path: config.paths.support.join(format!("{class}.php")),
                content: renderer.render(*stub, &placeholders)?,
                description: format!("{class} support class"),
                mode,
            })
        })
        .collect()
}
