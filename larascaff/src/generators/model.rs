//! Eloquent model generator

use super::{ArtifactKind, GeneratedFile, ModelContext, WriteMode};
use crate::error::ScaffoldError;
use crate::helpers::TemplateHelpers;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Trait applied to every generated model
pub const QUERY_TRAIT: &str = "HandlesQuery";

/// Mass-assignable attribute names, in column order
#[must_use]
pub fn fillable(ctx: &ModelContext<'_>) -> Vec<String> {
    ctx.attributes().map(|(name, _)| name).collect()
}

/// `$casts` array literal
#[must_use]
pub fn casts(ctx: &ModelContext<'_>) -> String {
    let entries: Vec<String> = ctx
        .columns
        .iter()
        .filter_map(|column| {
            column.column_type.cast().map(|cast| {
                format!(
                    "        {} => {},",
                    TemplateHelpers::php_string(&column.name),
                    TemplateHelpers::php_string(cast)
                )
            })
        })
        .collect();

    if entries.is_empty() {
        "[]".to_string()
    } else {
        format!("[\n{}\n    ]", entries.join("\n"))
    }
}

/// Placeholder map for the model stub
#[must_use]
pub fn placeholders(ctx: &ModelContext<'_>) -> PlaceholderMap {
    let ns = &ctx.config.namespaces;
    PlaceholderMap::from([
        ("namespace", ns.models.clone()),
        ("supportNamespace", ns.support.clone()),
        ("queryTrait", QUERY_TRAIT.to_string()),
        ("modelName", ctx.model_name.to_string()),
        ("tableName", ctx.table_name()),
        ("fillable", TemplateHelpers::php_array(&fillable(ctx))),
        ("casts", casts(ctx)),
    ])
}

/// Generate `<models>/<Model>.php`
///
/// # Errors
///
/// Returns an error if the model stub cannot be loaded or rendered.
pub fn generate(
    ctx: &ModelContext<'_>,
    renderer: &StubRenderer,
) -> Result<GeneratedFile, ScaffoldError> {
    let content = renderer.render(Stub::Model, &placeholders(ctx))?;

    Ok(GeneratedFile {
        kind: ArtifactKind::Model,
        path: ctx
            .config
            .paths
            .models
            .join(format!("{}.php", ctx.model_name)),
        content,
        description: format!("{} model", ctx.model_name),
        mode: WriteMode::Overwrite,
    })
}
