//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::EntityCategory;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What happened to one category during an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryStatus {
    /// Entities were listed and written
    Exported {
        /// Paths written, in write order
        files: Vec<PathBuf>,
    },

    /// The listing succeeded but returned nothing
    Empty,

    /// The listing failed; nothing was written for this category
    Skipped {
        /// Why the listing failed
        reason: String,
    },
}

/// Result of exporting a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    /// Category exported
    pub category: EntityCategory,

    /// Subdirectory the category's files go into
    pub directory: PathBuf,

    /// Outcome
    pub status: CategoryStatus,
}

impl CategoryOutcome {
    /// Create an outcome
    pub fn new(category: EntityCategory, directory: PathBuf, status: CategoryStatus) -> Self {
        Self {
            category,
            directory,
            status,
        }
    }

    /// Number of files written for this category
    pub fn files_written(&self) -> usize {
        match &self.status {
            CategoryStatus::Exported { files } => files.len(),
            CategoryStatus::Empty | CategoryStatus::Skipped { .. } => 0,
        }
    }

    /// Warning text if the category was skipped
    pub fn warning(&self) -> Option<String> {
        match &self.status {
            CategoryStatus::Skipped { reason } => Some(format!(
                "failed to fetch {} configurations: {reason}",
                self.category.label()
            )),
            _ => None,
        }
    }
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Root directory exported into
    pub target_dir: PathBuf,

    /// One outcome per category, in export order
    pub categories: Vec<CategoryOutcome>,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            categories: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a category outcome
    pub fn record(&mut self, outcome: CategoryOutcome) {
        self.categories.push(outcome);
    }

    /// Outcome for `category`, if it was processed
    pub fn outcome(&self, category: EntityCategory) -> Option<&CategoryOutcome> {
        self.categories.iter().find(|o| o.category == category)
    }

    /// Total number of files written
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(CategoryOutcome::files_written).sum()
    }

    /// Warnings for every skipped category
    pub fn warnings(&self) -> Vec<String> {
        self.categories.iter().filter_map(CategoryOutcome::warning).collect()
    }

    /// Whether any category was skipped
    pub fn has_warnings(&self) -> bool {
        self.categories
            .iter()
            .any(|o| matches!(o.status, CategoryStatus::Skipped { .. }))
    }

    /// Root directory exported into
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExportSummary {
        let mut summary = ExportSummary::new("/tmp/export");
        summary.record(CategoryOutcome::new(
            EntityCategory::ToolGroup,
            PathBuf::from("/tmp/export/groups"),
            CategoryStatus::Skipped {
                reason: "connection refused".to_string(),
            },
        ));
        summary.record(CategoryOutcome::new(
            EntityCategory::McpServer,
            PathBuf::from("/tmp/export/servers"),
            CategoryStatus::Exported {
                files: vec![
                    PathBuf::from("/tmp/export/servers/a.json"),
                    PathBuf::from("/tmp/export/servers/b.json"),
                ],
            },
        ));
        summary
    }

    #[test]
    fn test_new_summary_is_empty() {
        let summary = ExportSummary::new("/tmp/export");
        assert_eq!(summary.total_files(), 0);
        assert!(!summary.has_warnings());
        assert_eq!(summary.target_dir(), Path::new("/tmp/export"));
    }

    #[test]
    fn test_totals_and_warnings() {
        let summary = sample();
        assert_eq!(summary.total_files(), 2);
        assert!(summary.has_warnings());
        assert_eq!(
            summary.warnings(),
            vec!["failed to fetch Tool Group configurations: connection refused".to_string()]
        );
    }

    #[test]
    fn test_outcome_lookup() {
        let summary = sample();
        let servers = summary.outcome(EntityCategory::McpServer).unwrap();
        assert_eq!(servers.files_written(), 2);
        assert!(servers.warning().is_none());
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new("/tmp").with_duration(Duration::from_millis(1500));
        assert_eq!(summary.duration, Duration::from_millis(1500));
    }
}
