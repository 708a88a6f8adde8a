//! Route registration generator

use super::{ArtifactKind, GeneratedFile, ModelContext, WriteMode};
use crate::error::ScaffoldError;
use crate::helpers::TemplateHelpers;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Placeholder map for the route stub
#[must_use]
pub fn placeholders(ctx: &ModelContext<'_>) -> PlaceholderMap {
    PlaceholderMap::from([
        (
            "routePath",
            TemplateHelpers::to_route_segment(ctx.model_name, ctx.config.route_case),
        ),
        ("controllerNamespace", ctx.config.namespaces.controllers.clone()),
        (
            "controllerClass",
            TemplateHelpers::to_controller_class(ctx.model_name),
        ),
    ])
}

/// Generate the `apiResource` line appended to the routes file
///
/// # Errors
///
/// Returns an error if the route stub cannot be loaded or rendered.
pub fn generate(
    ctx: &ModelContext<'_>,
    renderer: &StubRenderer,
) -> Result<GeneratedFile, ScaffoldError> {
    let mut content = renderer.render(Stub::Route, &placeholders(ctx))?;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    Ok(GeneratedFile {
        kind: ArtifactKind::Route,
        path: ctx.config.paths.routes.clone(),
        content,
        description: format!("{} API routes", ctx.model_name),
        mode: WriteMode::Append,
    })
}
