//! API controller generator
//!
//! Generated controllers only declare validation rules and the upload hook;
//! the CRUD actions are inherited from the shared `BaseController`.

use super::{indented_lines, ArtifactKind, GeneratedFile, ModelContext, WriteMode};
use crate::error::ScaffoldError;
use crate::helpers::TemplateHelpers;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Disk uploaded files are stored on
pub const UPLOAD_DISK: &str = "public";

/// Which request a rule set validates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// `storeValidationRules()`
    Store,
    /// `updateValidationRules()`
    Update,
}

/// Validation rules as `(attribute, rule)` pairs
///
/// File columns are left to the upload hook and framework-managed columns
/// are never validated.
#[must_use]
pub fn rules(ctx: &ModelContext<'_>, set: RuleSet) -> Vec<(String, &'static str)> {
    ctx.attributes()
        .filter(|(_, column)| !column.is_file)
        .map(|(name, column)| {
            let rule = match (column.is_nullable(), set) {
                (true, _) => "nullable",
                (false, RuleSet::Store) => "required",
                (false, RuleSet::Update) => "sometimes|required",
            };
            (name, rule)
        })
        .collect()
}

fn rule_lines(ctx: &ModelContext<'_>, set: RuleSet) -> String {
    indented_lines(
        rules(ctx, set).into_iter().map(|(name, rule)| {
            format!(
                "{} => {},",
                TemplateHelpers::php_string(&name),
                TemplateHelpers::php_string(rule)
            )
        }),
        12,
    )
}

/// Body of `prepareData()` that stores uploaded files
#[must_use]
pub fn file_handling(ctx: &ModelContext<'_>) -> String {
    let table = ctx.table_name();
    let mut out = String::new();

    for column in ctx.columns.iter().filter(|column| column.is_file) {
        let name = TemplateHelpers::php_string(&column.name);
        out.push_str(&indented_lines(
            [
                format!("if ($request->hasFile({name})) {{"),
                format!(
                    "    $data[{name}] = $request->file({name})->store('{table}', '{UPLOAD_DISK}');"
                ),
                "}".to_string(),
            ],
            8,
        ));
    }

    out
}

/// Placeholder map for the controller stub
#[must_use]
pub fn placeholders(ctx: &ModelContext<'_>) -> PlaceholderMap {
    let ns = &ctx.config.namespaces;
    PlaceholderMap::from([
        ("namespace", ns.controllers.clone()),
        ("modelNamespace", ns.models.clone()),
        ("modelName", ctx.model_name.to_string()),
        ("resourceNamespace", ns.resources.clone()),
        (
            "resourceClass",
            TemplateHelpers::to_resource_class(ctx.model_name),
        ),
        ("supportNamespace", ns.support.clone()),
        (
            "controllerClass",
            TemplateHelpers::to_controller_class(ctx.model_name),
        ),
        ("storeRules", rule_lines(ctx, RuleSet::Store)),
        ("updateRules", rule_lines(ctx, RuleSet::Update)),
        ("fileHandling", file_handling(ctx)),
    ])
}

/// Generate `<controllers>/<Model>Controller.php`
///
/// # Errors
///
/// Returns an error if the controller stub cannot be loaded or rendered.
pub fn generate(
    ctx: &ModelContext<'_>,
    renderer: &StubRenderer,
) -> Result<GeneratedFile, ScaffoldError> {
    let class = TemplateHelpers::to_controller_class(ctx.model_name);
    let content = renderer.render(Stub::Controller, &placeholders(ctx))?;

    Ok(GeneratedFile {
        kind: ArtifactKind::Controller,
        path: ctx.config.paths.controllers.join(format!("{class}.php")),
        content,
        description: format!("{class} API controller"),
        mode: WriteMode::Overwrite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::generators::test_support::{columns, timestamp};
    use crate::template::StubLoader;

    fn render(model: &str, spec: &str) -> String {
        let config = ScaffoldConfig::default();
        let cols = columns(spec);
        let ctx = ModelContext::new(model, &cols, &config, timestamp());
        generate(&ctx, &StubRenderer::new(StubLoader::builtin()))
            .unwrap()
            .content
    }

    #[test]
    fn test_store_rules() {
        let config = ScaffoldConfig::default();
        let cols = columns("title:string,age:integer?");
        let ctx = ModelContext::new("Post", &cols, &config, timestamp());

        assert_eq!(
            rules(&ctx, RuleSet::Store),
            vec![
                ("title".to_string(), "required"),
                ("age".to_string(), "nullable")
            ]
        );
    }

    #[test]
    fn test_update_rules() {
        let config = ScaffoldConfig::default();
        let cols = columns("title:string,age:integer?");
        let ctx = ModelContext::new("Post", &cols, &config, timestamp());

        assert_eq!(
            rules(&ctx, RuleSet::Update),
            vec![
                ("title".to_string(), "sometimes|required"),
                ("age".to_string(), "nullable")
            ]
        );
    }

    #[test]
    fn test_rendered_rules() {
        let content = render("Person", "age:integer");
        assert!(content.contains("'age' => 'required',"));
        assert!(content.contains("'age' => 'sometimes|required',"));

        let content = render("Person", "age:integer?");
        assert!(content.contains("'age' => 'nullable',"));
        assert!(!content.contains("'age' => 'required'"));
    }

    fn rule_block<'a>(content: &'a str, method: &str) -> &'a str {
        let start = content.find(method).unwrap();
        let body = &content[start..];
        &body[..body.find("];").unwrap()]
    }

    #[test]
    fn test_rendered_update_rules_keep_nullable() {
        let content = render("Person", "title:string,age:integer?");
        let update = rule_block(&content, "updateValidationRules");
        assert!(update.contains("'title' => 'sometimes|required',"));
        assert!(update.contains("'age' => 'nullable',"));
        assert!(!update.contains("'age' => 'sometimes|required'"));

        let store = rule_block(&content, "storeValidationRules");
        assert!(store.contains("'title' => 'required',"));
        assert!(store.contains("'age' => 'nullable',"));
    }

    #[test]
    fn test_file_columns_use_upload_hook() {
        let content = render("Profile", "name:string,avatar:file?");
        assert!(!content.contains("'avatar' => '"));
        assert!(content.contains("if ($request->hasFile('avatar')) {"));
        assert!(content.contains(
            "$data['avatar'] = $request->file('avatar')->store('profiles', 'public');"
        ));
    }

    #[test]
    fn test_nullable_morphs_are_nullable() {
        let content = render("Comment", "target:nullableMorphs");
        assert!(content.contains("'target_id' => 'nullable',"));
        assert!(content.contains("'target_type' => 'nullable',"));
    }

    #[test]
    fn test_managed_columns_have_no_rules() {
        let config = ScaffoldConfig::default();
        let cols = columns("token:rememberToken,deleted_at:softDeletes");
        let ctx = ModelContext::new("User", &cols, &config, timestamp());
        assert!(rules(&ctx, RuleSet::Store).is_empty());
    }

    #[test]
    fn test_controller_wiring() {
        let content = render("BlogPost", "title:string");
        assert!(content.contains("namespace App\\Http\\Controllers\\Api;"));
        assert!(content.contains("use App\\Models\\BlogPost;"));
        assert!(content.contains("use App\\Http\\Resources\\BlogPostResource;"));
        assert!(content.contains("use App\\Support\\BaseController;"));
        assert!(content.contains("class BlogPostController extends BaseController"));
        assert!(content.contains("parent::__construct(BlogPost::class, BlogPostResource::class);"));
        assert!(content.contains("    {\n        return $data;\n    }"));
    }
}
