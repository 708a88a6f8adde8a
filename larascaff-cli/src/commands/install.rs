//! Support class installation

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use larascaff::{Scaffolder, WriteStatus};

use super::{ensure_success, load_config, print_report, project_root};

/// `larascaff install`
pub struct InstallCommand {
    path: Option<PathBuf>,
    force: bool,
}

impl InstallCommand {
    /// Create the command from parsed arguments
    #[must_use]
    pub const fn new(path: Option<PathBuf>, force: bool) -> Self {
        Self { path, force }
    }

    /// Write `BaseController`, `ApiResponse`, `MetaHelper` and `HandlesQuery`
    ///
    /// # Errors
    ///
    /// Returns an error if a support file could not be written.
    pub fn execute(&self) -> Result<()> {
        let root = project_root(self.path.as_deref())?;
        let config = load_config(&root)?;

        println!(
            "\n{} {}",
            style("Installing support classes into").cyan().bold(),
            style(config.paths.support.display()).green().bold()
        );

        let report = Scaffolder::new(&root, config).install(self.force);
        print_report(&report);
        ensure_success(&report)?;

        let kept = report
            .outcomes
            .iter()
            .any(|outcome| matches!(outcome.status, WriteStatus::Skipped));
        if kept {
            println!(
                "\n{}",
                style("Existing files were kept. Use --force to overwrite them.").dim()
            );
        }

        Ok(())
    }
}
