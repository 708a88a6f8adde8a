//! Column type listing

use console::style;
use larascaff::ColumnType;

const COLUMNS: usize = 4;

/// `larascaff types`
pub struct TypesCommand;

impl TypesCommand {
    /// Column types laid out in rows
    #[must_use]
    pub fn rows() -> Vec<String> {
        let width = ColumnType::ALL
            .iter()
            .map(|kind| kind.as_str().len())
            .max()
            .unwrap_or_default();

        ColumnType::ALL
            .chunks(COLUMNS)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|kind| format!("{:<width$}", kind.as_str()))
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Print supported column types and the modifier syntax
    pub fn execute() {
        println!("\n{}", style("Supported column types:").cyan().bold());
        for row in Self::rows() {
            println!("  {row}");
        }

        println!("\n{}", style("Modifiers:").cyan().bold());
        println!("  {}  nullable column", style("name:type?").yellow());
        println!("  {}  column with a default value", style("name:type*value").yellow());
    }
}
