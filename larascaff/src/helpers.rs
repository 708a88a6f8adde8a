//! Naming helpers for code generation
//!
//! Naming conventions, pluralization and PHP literal formatting shared by the
//! artifact generators.

use inflector::Inflector;

use crate::config::RouteCase;

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("louse", "lice"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Naming and literal helpers for stub rendering
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("BlogPost"), "blog_post");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Pluralize a single lowercase word
    ///
    /// Irregular nouns Inflector mangles (`person` becomes `personople`) are
    /// looked up first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("person"), "people");
    /// ```
    #[must_use]
    pub fn pluralize(word: &str) -> String {
        IRREGULAR_PLURALS
            .iter()
            .find(|(singular, _)| *singular == word)
            .map_or_else(|| word.to_plural(), |(_, plural)| (*plural).to_string())
    }

    /// Table name for a model (`snake_case` plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_table_name("Post"), "posts");
    /// assert_eq!(TemplateHelpers::to_table_name("BlogPost"), "blog_posts");
    /// assert_eq!(TemplateHelpers::to_table_name("Category"), "categories");
    /// ```
    #[must_use]
    pub fn to_table_name(model: &str) -> String {
        let snake = Self::to_snake_case(model);
        match snake.rsplit_once('_') {
            Some((head, last)) => format!("{head}_{}", Self::pluralize(last)),
            None => Self::pluralize(&snake),
        }
    }

    /// Migration name for a model's create-table migration
    #[must_use]
    pub fn to_migration_name(model: &str) -> String {
        format!("create_{}_table", Self::to_table_name(model))
    }

    /// Resource path segment used in the route registration
    ///
    /// Every case is derived from the table name, so only the last word is
    /// pluralized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::{RouteCase, TemplateHelpers};
    /// assert_eq!(TemplateHelpers::to_route_segment("BlogPost", RouteCase::Kebab), "blog-posts");
    /// assert_eq!(TemplateHelpers::to_route_segment("BlogPost", RouteCase::Snake), "blog_posts");
    /// assert_eq!(TemplateHelpers::to_route_segment("BlogPost", RouteCase::Lower), "blogposts");
    /// ```
    #[must_use]
    pub fn to_route_segment(model: &str, case: RouteCase) -> String {
        match case {
            RouteCase::Kebab => Self::to_table_name(model).replace('_', "-"),
            RouteCase::Snake => Self::to_table_name(model),
            RouteCase::Lower => Self::to_table_name(model).replace('_', ""),
        }
    }

    /// Controller class name for a model
    #[must_use]
    pub fn to_controller_class(model: &str) -> String {
        format!("{model}Controller")
    }

    /// API resource class name for a model
    #[must_use]
    pub fn to_resource_class(model: &str) -> String {
        format!("{model}Resource")
    }

    /// Quote a string as a single-quoted PHP literal
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::php_string("it's"), r"'it\'s'");
    /// ```
    #[must_use]
    pub fn php_string(value: &str) -> String {
        let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{escaped}'")
    }

    /// Format a default value as a PHP literal
    ///
    /// Numbers, `true`, `false` and `null` are emitted bare; everything else
    /// becomes a quoted string. A missing value is `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::php_literal(Some("42")), "42");
    /// assert_eq!(TemplateHelpers::php_literal(Some("true")), "true");
    /// assert_eq!(TemplateHelpers::php_literal(Some("draft")), "'draft'");
    /// assert_eq!(TemplateHelpers::php_literal(None), "null");
    /// ```
    #[must_use]
    pub fn php_literal(value: Option<&str>) -> String {
        match value {
            None => "null".to_string(),
            Some(v @ ("true" | "false" | "null")) => v.to_string(),
            Some(v) if Self::is_numeric(v) => v.to_string(),
            Some(v) => Self::php_string(v),
        }
    }

    /// Render a list of names as a PHP array literal
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::php_array(&["title", "age"]), "['title', 'age']");
    /// ```
    #[must_use]
    pub fn php_array<S: AsRef<str>>(items: &[S]) -> String {
        let quoted: Vec<String> = items
            .iter()
            .map(|item| Self::php_string(item.as_ref()))
            .collect();
        format!("[{}]", quoted.join(", "))
    }

    fn is_numeric(value: &str) -> bool {
        let digits = value.strip_prefix('-').unwrap_or(value);
        let mut parts = digits.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        !whole.is_empty()
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.is_none_or(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))
    }
}
