//! Applying generated files to a project tree

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::report::{ArtifactOutcome, WriteStatus};
use crate::error::ScaffoldError;
use crate::generators::{GeneratedFile, WriteMode};

/// Writes [`GeneratedFile`]s below a project root
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
    dry_run: bool,
}

impl ArtifactWriter {
    /// Create a writer for a project root
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
        }
    }

    /// Write one file according to its [`WriteMode`]
    ///
    /// In dry-run mode every check still runs but nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingFile`] when appending to a file that
    /// does not exist, or [`ScaffoldError::Io`] when the filesystem refuses
    /// the write.
    pub fn write(&self, file: &GeneratedFile) -> Result<WriteStatus, ScaffoldError> {
        let target = self.root.join(&file.path);

        match file.mode {
            WriteMode::Append => self.append(&target, &file.content),
            WriteMode::CreateIfMissing if target.exists() => {
                debug!(path = %target.display(), "keeping existing file");
                Ok(WriteStatus::Skipped)
            }
            WriteMode::CreateIfMissing | WriteMode::Overwrite => {
                if self.dry_run {
                    return Ok(WriteStatus::DryRun);
                }
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|err| ScaffoldError::io(parent, err))?;
                }
                fs::write(&target, &file.content).map_err(|err| ScaffoldError::io(&target, err))?;
                Ok(WriteStatus::Written)
            }
        }
    }

    fn append(&self, target: &Path, content: &str) -> Result<WriteStatus, ScaffoldError> {
        if !target.is_file() {
            return Err(ScaffoldError::MissingFile(target.to_path_buf()));
        }
        if self.dry_run {
            return Ok(WriteStatus::DryRun);
        }

        let existing = fs::read_to_string(target).map_err(|err| ScaffoldError::io(target, err))?;
        let mut handle = OpenOptions::new()
            .append(true)
            .open(target)
            .map_err(|err| ScaffoldError::io(target, err))?;

        let separator = if existing.is_empty() || existing.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        write!(handle, "{separator}{content}").map_err(|err| ScaffoldError::io(target, err))?;

        Ok(WriteStatus::Appended)
    }

    /// Write a file and record the outcome
    #[must_use]
    pub fn apply(&self, file: &GeneratedFile) -> ArtifactOutcome {
        let status = match self.write(file) {
            Ok(status) => {
                info!(
                    kind = %file.kind,
                    path = %file.path.display(),
                    status = ?status,
                    "applied artifact"
                );
                status
            }
            Err(err) => {
                warn!(kind = %file.kind, path = %file.path.display(), error = %err, "artifact failed");
                WriteStatus::Failed(err)
            }
        };

        ArtifactOutcome {
            kind: file.kind,
            path: Some(file.path.clone()),
            description: file.description.clone(),
            status,
        }
    }
}
