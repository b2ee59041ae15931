//! Export coordinator - main orchestrator for the export process
//!
//! Failure handling is two-tiered:
//! - a category whose listing fails is skipped with a warning and the run goes on;
//! - a subdirectory, serialization or write failure aborts the run at once,
//!   leaving whatever was already written on disk.

use super::progress::{ExportProgress, NoopProgress};
use super::summary::{CategoryOutcome, CategoryStatus, ExportSummary};
use super::writer::write_config_file;
use crate::adapters::registry::RegistryClient;
use crate::domain::{DumpError, EntityCategory, ExportableEntity, Result};
use crate::{log_export_complete, log_export_start};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    client: Arc<dyn RegistryClient>,
    progress: Arc<dyn ExportProgress>,
}

impl ExportCoordinator {
    /// Create a new export coordinator that reports no progress
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self {
            client,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Report progress to `progress`
    pub fn with_progress(mut self, progress: Arc<dyn ExportProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Execute the export into `target_dir`
    ///
    /// `target_dir` must already exist and be empty (see
    /// [`crate::core::target::TargetResolver`]). This:
    /// 1. Creates one subdirectory per category (fatal on failure)
    /// 2. For each category, in order:
    ///    - lists its entities (a failure becomes a warning and the category is skipped)
    ///    - writes one JSON file per entity (fatal on failure)
    /// 3. Returns a summary of what was written
    pub async fn execute_export(&self, target_dir: &Path) -> Result<ExportSummary> {
        let start_time = Instant::now();
        log_export_start!(target_dir.display());

        self.progress.creating_subdirectories(target_dir);
        let mut category_dirs = Vec::with_capacity(EntityCategory::ALL.len());
        for category in EntityCategory::ALL {
            category_dirs.push((category, create_category_dir(target_dir, category)?));
        }

        let mut summary = ExportSummary::new(target_dir);
        for (category, dir) in category_dirs {
            let outcome = self.export_category(category, dir).await?;
            summary.record(outcome);
        }

        let summary = summary.with_duration(start_time.elapsed());
        log_export_complete!(
            summary.total_files(),
            summary.warnings().len(),
            summary.duration
        );
        self.progress.finished(&summary);

        Ok(summary)
    }

    async fn export_category(
        &self,
        category: EntityCategory,
        dir: PathBuf,
    ) -> Result<CategoryOutcome> {
        self.progress.fetching(category);
        tracing::info!(
            category = %category,
            registry = %self.client.base_url(),
            "Fetching configurations"
        );

        let entities = match self.list(category).await {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    "Failed to fetch configurations, skipping category"
                );
                self.progress.listing_failed(category, &e);
                return Ok(CategoryOutcome::new(
                    category,
                    dir,
                    CategoryStatus::Skipped {
                        reason: e.to_string(),
                    },
                ));
            }
        };

        if entities.is_empty() {
            tracing::info!(category = %category, "No entities found");
            self.progress.none_found(category);
            return Ok(CategoryOutcome::new(category, dir, CategoryStatus::Empty));
        }

        self.progress.writing(category, &dir, entities.len());

        let mut files = Vec::with_capacity(entities.len());
        for entity in &entities {
            let path = write_config_file(&dir, entity)?;
            tracing::debug!(
                category = %category,
                entity = %entity.name(),
                path = %path.display(),
                "Wrote configuration file"
            );
            files.push(path);
        }

        tracing::info!(
            category = %category,
            count = files.len(),
            dir = %dir.display(),
            "Wrote configurations"
        );

        Ok(CategoryOutcome::new(
            category,
            dir,
            CategoryStatus::Exported { files },
        ))
    }

    async fn list(&self, category: EntityCategory) -> Result<Vec<ExportableEntity>> {
        match category {
            EntityCategory::ToolGroup => self.client.list_tool_group_configs().await,
            EntityCategory::McpServer => self.client.list_server_configs().await,
        }
    }
}

fn create_category_dir(target_dir: &Path, category: EntityCategory) -> Result<PathBuf> {
    let dir = target_dir.join(category.dir_name());
    fs::create_dir(&dir).map_err(|e| DumpError::SubdirectoryCreate {
        category: category.label().to_string(),
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
