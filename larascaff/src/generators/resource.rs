//! API resource generator

use super::{indented_lines, ArtifactKind, GeneratedFile, ModelContext, WriteMode};
use crate::error::ScaffoldError;
use crate::helpers::TemplateHelpers;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Attribute lines of `toArray()`, between `id` and the timestamps
#[must_use]
pub fn attribute_lines(ctx: &ModelContext<'_>) -> String {
    indented_lines(
        ctx.attributes().map(|(name, column)| {
            let key = TemplateHelpers::php_string(&name);
            if column.is_file {
                format!("{key} => $this->{name} ? Storage::url($this->{name}) : null,")
            } else {
                format!("{key} => $this->{name},")
            }
        }),
        12,
    )
}

/// Placeholder map for the resource stub
#[must_use]
pub fn placeholders(ctx: &ModelContext<'_>) -> PlaceholderMap {
    PlaceholderMap::from([
        ("namespace", ctx.config.namespaces.resources.clone()),
        (
            "resourceClass",
            TemplateHelpers::to_resource_class(ctx.model_name),
        ),
        ("attributes", attribute_lines(ctx)),
    ])
}

/// Generate `<resources>/<Model>Resource.php`
///
/// # Errors
///
/// Returns an error if the resource stub cannot be loaded or rendered.
pub fn generate(
    ctx: &ModelContext<'_>,
    renderer: &StubRenderer,
) -> Result<GeneratedFile, ScaffoldError> {
    let class = TemplateHelpers::to_resource_class(ctx.model_name);
    let content = renderer.render(Stub::Resource, &placeholders(ctx))?;

    Ok(GeneratedFile {
        kind: ArtifactKind::Resource,
        path: ctx.config.paths.resources.join(format!("{class}.php")),
        content,
        description: format!("{class} API resource"),
        mode: WriteMode::Overwrite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::generators::test_support::{columns, timestamp};
    use crate::template::StubLoader;

    #[test]
    fn test_attribute_lines() {
        let config = ScaffoldConfig::default();
        let cols = columns("title:string,avatar:file?,owner:morphs");
        let ctx = ModelContext::new("Post", &cols, &config, timestamp());

        let out = attribute_lines(&ctx);
        assert!(out.contains("            'title' => $this->title,\n"));
        assert!(out.contains("'avatar' => $this->avatar ? Storage::url($this->avatar) : null,"));
        assert!(out.contains("'owner_id' => $this->owner_id,"));
        assert!(out.contains("'owner_type' => $this->owner_type,"));
    }

    #[test]
    fn test_generate_resource() {
        let config = ScaffoldConfig::default();
        let cols = columns("title:string");
        let ctx = ModelContext::new("BlogPost", &cols, &config, timestamp());
        let renderer = StubRenderer::new(StubLoader::builtin());

        let file = generate(&ctx, &renderer).unwrap();
        assert_eq!(
            file.path.to_str().unwrap(),
            "app/Http/Resources/BlogPostResource.php"
        );
        assert!(file.content.contains("namespace App\\Http\\Resources;"));
        assert!(file
            .content
            .contains("class BlogPostResource extends JsonResource"));
        assert!(file.content.contains(
            "'id' => $this->id,\n            'title' => $this->title,\n            'created_at'"
        ));
    }
}
