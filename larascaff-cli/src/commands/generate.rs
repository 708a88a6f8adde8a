//! CRUD generator for Laravel models
//!
//! Generates, for one model:
//! - the Eloquent model with its fillable list and casts
//! - a create-table migration
//! - a JSON API resource
//! - an API controller with store/update validation rules
//! - an `apiResource` route registration
//!
//! The shared support classes are written on the first run.
//!
//! # Example
//!
//! ```bash
//! larascaff generate BlogPost \
//!   --columns="title:string,body:text,age:integer?,status:string*draft,cover:file?"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use larascaff::{ScaffoldError, Scaffolder, TemplateHelpers};

use super::{ensure_success, load_config, print_report, project_root};

/// `larascaff generate`
pub struct GenerateCommand {
    model: String,
    columns: Option<String>,
    path: Option<PathBuf>,
    dry_run: bool,
}

impl GenerateCommand {
    /// Create the command from parsed arguments
    #[must_use]
    pub const fn new(
        model: String,
        columns: Option<String>,
        path: Option<PathBuf>,
        dry_run: bool,
    ) -> Self {
        Self {
            model,
            columns,
            path,
            dry_run,
        }
    }

    /// Run the scaffolding pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or any artifact failed.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Scaffolding CRUD for").cyan().bold(),
            style(&self.model).green().bold(),
            style("...").cyan().bold()
        );

        let root = project_root(self.path.as_deref())?;
        let config = load_config(&root)?;
        let migration_hint = TemplateHelpers::to_migration_name(&self.model);

        let report = match Scaffolder::new(&root, config)
            .dry_run(self.dry_run)
            .run(&self.model, self.columns.as_deref())
        {
            Ok(report) => report,
            Err(ScaffoldError::InvalidColumns(issues)) => {
                eprintln!("\n{}", style("Invalid column definitions:").red().bold());
                for issue in &issues {
                    eprintln!("  {} {issue}", style("✗").red());
                }
                bail!("{} invalid column definition(s)", issues.len());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to scaffold {}", self.model));
            }
        };

        let heading = if self.dry_run {
            "Would generate"
        } else {
            "Generated"
        };
        println!(
            "\n{} {} artifact(s):",
            style(heading).green().bold(),
            report.outcomes.len()
        );
        print_report(&report);
        ensure_success(&report)?;

        if self.dry_run {
            println!("\n{}", style("Dry run: no files were written.").yellow());
            return Ok(());
        }

        println!(
            "\n{} CRUD scaffold for {} is ready!",
            style("✨").green().bold(),
            style(&self.model).green().bold()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Review the {} migration",
            style(migration_hint).yellow()
        );
        println!("  2. Run the migration: {}", style("php artisan migrate").yellow());
        println!("  3. List the new routes: {}", style("php artisan route:list --path=api").yellow());

        Ok(())
    }
}
