//! CLI command implementations

pub mod generate;
pub mod install;
pub mod stubs;
pub mod types;

pub use generate::GenerateCommand;
pub use install::InstallCommand;
pub use stubs::StubsCommand;
pub use types::TypesCommand;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use larascaff::{ArtifactOutcome, ScaffoldConfig, ScaffoldReport, WriteStatus};
use tracing::debug;

/// Resolve the Laravel project root, defaulting to the current directory
///
/// # Errors
///
/// Returns an error if the current directory is unavailable or the given
/// path is not a directory.
pub fn project_root(path: Option<&Path>) -> Result<PathBuf> {
    let root = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    anyhow::ensure!(
        root.is_dir(),
        "Project directory does not exist: {}",
        root.display()
    );
    Ok(root)
}

/// Load `larascaff.toml` and `LARASCAFF_*` overrides for a project
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed.
pub fn load_config(root: &Path) -> Result<ScaffoldConfig> {
    let config = ScaffoldConfig::load(root)
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;
    debug!(root = %root.display(), config = ?config, "loaded configuration");
    Ok(config)
}

/// Symbol and note shown for an outcome
#[must_use]
pub fn outcome_label(outcome: &ArtifactOutcome) -> (&'static str, String) {
    match &outcome.status {
        WriteStatus::Written => ("✓", outcome.description.clone()),
        WriteStatus::Appended => ("✓", format!("{}, appended", outcome.description)),
        WriteStatus::DryRun => ("~", format!("{}, dry run", outcome.description)),
        WriteStatus::Skipped => ("-", "exists, skipped".to_string()),
        WriteStatus::Failed(err) => ("✗", err.to_string()),
    }
}

/// Print one line per artifact
pub fn print_report(report: &ScaffoldReport) {
    for outcome in &report.outcomes {
        let path = outcome.path.as_ref().map_or_else(
            || outcome.kind.to_string(),
            |path| path.display().to_string(),
        );
        let (symbol, note) = outcome_label(outcome);

        match outcome.status {
            WriteStatus::Failed(_) => println!(
                "  {} {} ({})",
                style(symbol).red(),
                style(path).red(),
                style(note).red()
            ),
            WriteStatus::Skipped | WriteStatus::DryRun => println!(
                "  {} {} ({})",
                style(symbol).yellow(),
                style(path).dim(),
                style(note).dim()
            ),
            WriteStatus::Written | WriteStatus::Appended => println!(
                "  {} {} ({})",
                style(symbol).green(),
                style(path).dim(),
                style(note).dim()
            ),
        }
    }
}

/// Fail the command if any artifact failed
///
/// # Errors
///
/// Returns an error naming the number of failed artifacts.
pub fn ensure_success(report: &ScaffoldReport) -> Result<()> {
    let failed = report.failures().count();
    anyhow::ensure!(failed == 0, "{failed} artifact(s) failed");
    Ok(())
}
