//! Per-artifact outcomes of a scaffolding run

use std::fmt;
use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::generators::ArtifactKind;

/// What happened to one artifact
#[derive(Debug)]
pub enum WriteStatus {
    /// File created or replaced
    Written,
    /// File already existed and was left alone
    Skipped,
    /// Content appended to an existing file
    Appended,
    /// Dry run; the file would have been written
    DryRun,
    /// Generation or writing failed
    Failed(ScaffoldError),
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => f.write_str("written"),
            Self::Skipped => f.write_str("skipped"),
            Self::Appended => f.write_str("appended"),
            Self::DryRun => f.write_str("dry run"),
            Self::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}

/// Result for a single artifact
#[derive(Debug)]
pub struct ArtifactOutcome {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Relative path, unknown when generation failed before producing a file
    pub path: Option<PathBuf>,
    /// Human readable description
    pub description: String,
    /// What happened
    pub status: WriteStatus,
}

impl ArtifactOutcome {
    /// Outcome for an artifact that could not be generated
    #[must_use]
    pub fn failed(kind: ArtifactKind, error: ScaffoldError) -> Self {
        Self {
            kind,
            path: None,
            description: format!("{kind} artifact"),
            status: WriteStatus::Failed(error),
        }
    }

    /// Whether this artifact failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.status, WriteStatus::Failed(_))
    }

    /// The failure, if any
    #[must_use]
    pub const fn error(&self) -> Option<&ScaffoldError> {
        match &self.status {
            WriteStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcomes of a run, in pipeline order
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Outcomes in the order artifacts were processed
    pub outcomes: Vec<ArtifactOutcome>,
}

impl ScaffoldReport {
    /// Record an outcome
    pub fn push(&mut self, outcome: ArtifactOutcome) {
        self.outcomes.push(outcome);
    }

    /// True when no artifact failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.outcomes.iter().any(ArtifactOutcome::is_failure)
    }

    /// Failed artifacts
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Outcomes for one kind of artifact
    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &ArtifactOutcome> {
        self.outcomes.iter().filter(move |o| o.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: ArtifactKind, status: WriteStatus) -> ArtifactOutcome {
        ArtifactOutcome {
            kind,
            path: Some(PathBuf::from("x.php")),
            description: "x".to_string(),
            status,
        }
    }

    #[test]
    fn test_report_success() {
        let mut report = ScaffoldReport::default();
        report.push(outcome(ArtifactKind::Model, WriteStatus::Written));
        report.push(outcome(ArtifactKind::Support, WriteStatus::Skipped));
        assert!(report.is_success());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_report_failure() {
        let mut report = ScaffoldReport::default();
        report.push(outcome(ArtifactKind::Model, WriteStatus::Written));
        report.push(ArtifactOutcome::failed(
            ArtifactKind::Route,
            ScaffoldError::MissingFile(PathBuf::from("routes/api.php")),
        ));

        assert!(!report.is_success());
        let failed: Vec<_> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].kind, ArtifactKind::Route);
        assert!(failed[0].path.is_none());
        assert_eq!(report.of_kind(ArtifactKind::Model).count(), 1);
    }

    #[test]
    fn test_status_display() {
        let status = WriteStatus::Failed(ScaffoldError::EmptyColumns);
        assert_eq!(status.to_string(), "failed: The columns option cannot be empty.");
        assert_eq!(WriteStatus::DryRun.to_string(), "dry run");
    }
}
