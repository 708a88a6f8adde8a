//! Create-table migration generator

use tracing::warn;

use super::{indented_lines, ArtifactKind, GeneratedFile, ModelContext, WriteMode};
use crate::columns::{ColumnSpec, ColumnType};
use crate::error::ScaffoldError;
use crate::helpers::TemplateHelpers;
use crate::template::{PlaceholderMap, Stub, StubRenderer};

/// Timestamp prefix format for migration file names
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Schema-builder statement for one column
///
/// # Examples
///
/// ```
/// # use larascaff::ColumnSpec;
/// # use larascaff::generators::migration::column_definition;
/// let column = ColumnSpec::parse("age:integer?").unwrap();
/// assert_eq!(column_definition(&column), "$table->integer('age')->nullable();");
/// ```
#[must_use]
pub fn column_definition(column: &ColumnSpec) -> String {
    let method = match column.column_type {
        ColumnType::Morphs if column.nullable => ColumnType::NullableMorphs.migration_method(),
        kind => kind.migration_method(),
    };
    let name = TemplateHelpers::php_string(&column.name);

    let mut line = match column.column_type {
        ColumnType::Enum | ColumnType::Set => {
            // Allowed values are not part of the column syntax; seed them with the default.
            let allowed: Vec<&str> = column.default_value.iter().map(String::as_str).collect();
            if allowed.is_empty() {
                warn!(column = %column.name, "{method} column has no allowed values");
            }
            format!("$table->{method}({name}, {})", TemplateHelpers::php_array(&allowed))
        }
        kind if kind.takes_column_name() => format!("$table->{method}({name})"),
        _ => format!("$table->{method}()"),
    };

    if !column.column_type.accepts_modifiers() {
        if column.has_default {
            warn!(column = %column.name, "{method} columns take no default, ignoring it");
        }
    } else if column.nullable {
        line.push_str("->nullable()");
    } else if column.has_default {
        line.push_str(&format!(
            "->default({})",
            TemplateHelpers::php_literal(column.default_value.as_deref())
        ));
    }
    line.push(';');
    line
}

/// Column block inserted into the migration stub
#[must_use]
pub fn columns_block(columns: &[ColumnSpec]) -> String {
    indented_lines(columns.iter().map(column_definition), 12)
}

/// Placeholder map for the migration stub
#[must_use]
pub fn placeholders(ctx: &ModelContext<'_>) -> PlaceholderMap {
    PlaceholderMap::from([
        ("tableName", ctx.table_name()),
        ("columns", columns_block(ctx.columns)),
    ])
}

/// Generate `<migrations>/<timestamp>_create_<table>_table.php`
///
/// # Errors
///
/// Returns an error if the migration stub cannot be loaded or rendered.
pub fn generate(
    ctx: &ModelContext<'_>,
    renderer: &StubRenderer,
) -> Result<GeneratedFile, ScaffoldError> {
    let content = renderer.render(Stub::Migration, &placeholders(ctx))?;
    let file_name = format!(
        "{}_{}.php",
        ctx.timestamp.format(TIMESTAMP_FORMAT),
        TemplateHelpers::to_migration_name(ctx.model_name)
    );

    Ok(GeneratedFile {
        kind: ArtifactKind::Migration,
        path: ctx.config.paths.migrations.join(file_name),
        content,
        description: format!("{} table migration", ctx.table_name()),
        mode: WriteMode::Overwrite,
    })
}
