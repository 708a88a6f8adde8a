//! Stub publishing

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use larascaff::template::PUBLISHED_STUB_DIR;
use larascaff::{ScaffoldConfig, Scaffolder};

use super::{ensure_success, print_report, project_root};

/// `larascaff stubs`
pub struct StubsCommand {
    path: Option<PathBuf>,
    force: bool,
}

impl StubsCommand {
    /// Create the command from parsed arguments
    #[must_use]
    pub const fn new(path: Option<PathBuf>, force: bool) -> Self {
        Self { path, force }
    }

    /// Copy the built-in stubs into the project for customisation
    ///
    /// # Errors
    ///
    /// Returns an error if a stub could not be written.
    pub fn execute(&self) -> Result<()> {
        let root = project_root(self.path.as_deref())?;

        println!(
            "\n{} {}",
            style("Publishing stubs to").cyan().bold(),
            style(PUBLISHED_STUB_DIR).green().bold()
        );

        let report = Scaffolder::new(&root, ScaffoldConfig::default()).publish_stubs(self.force);
        print_report(&report);
        ensure_success(&report)?;

        println!(
            "\nEdit the stubs in {} to customise generated code.",
            style(PUBLISHED_STUB_DIR).yellow()
        );
        Ok(())
    }
}
