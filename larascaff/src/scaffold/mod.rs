//! Scaffolding pipeline
//!
//! A run validates the model name and the column list, then
//! generates artifacts in a fixed order: support classes, model, migration,
//! resource, controller and route. Validation failures abort the run before
//! anything is written. After that, each artifact succeeds or fails on its
//! own and the [`ScaffoldReport`] records every outcome.

pub mod report;
pub mod writer;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{info, instrument, warn};

pub use report::{ArtifactOutcome, ScaffoldReport, WriteStatus};
pub use writer::ArtifactWriter;

use crate::columns::parse_columns;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::generators::{
    controller, migration, model, resource, route, support, ArtifactKind, GeneratedFile,
    ModelContext, WriteMode,
};
use crate::template::{Stub, StubLoader, StubRenderer, PUBLISHED_STUB_DIR};

type GenerateFn = fn(&ModelContext<'_>, &StubRenderer) -> Result<GeneratedFile, ScaffoldError>;

const PIPELINE: [(ArtifactKind, GenerateFn); 5] = [
    (ArtifactKind::Model, model::generate),
    (ArtifactKind::Migration, migration::generate),
    (ArtifactKind::Resource, resource::generate),
    (ArtifactKind::Controller, controller::generate),
    (ArtifactKind::Route, route::generate),
];

/// Runs scaffolding against a Laravel project
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    config: ScaffoldConfig,
    timestamp: Option<NaiveDateTime>,
    dry_run: bool,
}

impl Scaffolder {
    /// Create a scaffolder for the project at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: ScaffoldConfig) -> Self {
        Self {
            root: root.into(),
            config,
            timestamp: None,
            dry_run: false,
        }
    }

    /// Fix the migration timestamp instead of using the current local time
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Report what would be written without touching the project
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check that a model name is a `PascalCase` identifier
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidModelName`] otherwise.
    pub fn validate_model_name(name: &str) -> Result<(), ScaffoldError> {
        let starts_upper = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        if starts_upper && name.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(())
        } else {
            Err(ScaffoldError::InvalidModelName(name.to_string()))
        }
    }

    fn renderer(&self) -> StubRenderer {
        StubRenderer::new(StubLoader::new(&self.root, &self.config))
    }

    fn writer(&self) -> ArtifactWriter {
        ArtifactWriter::new(&self.root, self.dry_run)
    }

    fn write_support(&self, renderer: &StubRenderer, mode: WriteMode, report: &mut ScaffoldReport) {
        let writer = self.writer();
        match support::generate(&self.config, renderer, mode) {
            Ok(files) => {
                for file in &files {
                    report.push(writer.apply(file));
                }
            }
            Err(err) => report.push(ArtifactOutcome::failed(ArtifactKind::Support, err)),
        }
    }

    /// Generate every artifact for a model
    ///
    /// `columns` is the raw `--columns` value. `None` scaffolds a model with
    /// no columns; `Some("")` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidModelName`],
    /// [`ScaffoldError::EmptyColumns`] or [`ScaffoldError::InvalidColumns`]
    /// before anything is written. Failures of individual artifacts are
    /// recorded in the report instead.
    #[instrument(skip(self), fields(root = %self.root.display(), dry_run = self.dry_run))]
    pub fn run(&self, model: &str, columns: Option<&str>) -> Result<ScaffoldReport, ScaffoldError> {
        Self::validate_model_name(model)?;
        let columns = columns.map(parse_columns).transpose()?.unwrap_or_default();
        info!(model, columns = columns.len(), "scaffolding model");

        let renderer = self.renderer();
        let writer = self.writer();
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        let ctx = ModelContext::new(model, &columns, &self.config, timestamp);

        let mut report = ScaffoldReport::default();
        self.write_support(&renderer, WriteMode::CreateIfMissing, &mut report);

        for (kind, generate) in PIPELINE {
            let outcome = match generate(&ctx, &renderer) {
                Ok(file) => writer.apply(&file),
                Err(err) => {
                    warn!(%kind, error = %err, "artifact failed");
                    ArtifactOutcome::failed(kind, err)
                }
            };
            report.push(outcome);
        }

        Ok(report)
    }

    /// Write the support classes
    ///
    /// Existing files are kept unless `force` is set.
    #[must_use]
    pub fn install(&self, force: bool) -> ScaffoldReport {
        let mode = if force {
            WriteMode::Overwrite
        } else {
            WriteMode::CreateIfMissing
        };

        let mut report = ScaffoldReport::default();
        self.write_support(&self.renderer(), mode, &mut report);
        report
    }

    /// Copy the built-in stubs to `stubs/larascaff/` for customisation
    ///
    /// Existing stubs are kept unless `force` is set.
    #[must_use]
    pub fn publish_stubs(&self, force: bool) -> ScaffoldReport {
        let mode = if force {
            WriteMode::Overwrite
        } else {
            WriteMode::CreateIfMissing
        };
        let writer = self.writer();

        let mut report = ScaffoldReport::default();
        for stub in Stub::ALL {
            let file = GeneratedFile {
                kind: ArtifactKind::Stub,
                path: Path::new(PUBLISHED_STUB_DIR).join(stub.file_name()),
                content: stub.builtin().to_string(),
                description: format!("{stub} stub"),
                mode,
            };
            report.push(writer.apply(&file));
        }
        report
    }
}
