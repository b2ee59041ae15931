//! Progress reporting for export runs
//!
//! The coordinator announces each phase through [`ExportProgress`] before it
//! starts, so a CLI can print user-facing progress lines while library callers
//! and tests stay silent ([`NoopProgress`]).

use super::summary::ExportSummary;
use crate::domain::{DumpError, EntityCategory};
use std::path::Path;

/// Receives progress updates during an export
pub trait ExportProgress: Send + Sync {
    /// The category subdirectories are about to be created
    fn creating_subdirectories(&self, target_dir: &Path);

    /// A category listing is about to be requested
    fn fetching(&self, category: EntityCategory);

    /// A category listing failed; the category will be skipped
    fn listing_failed(&self, category: EntityCategory, error: &DumpError);

    /// A category listing returned no entities
    fn none_found(&self, category: EntityCategory);

    /// `count` entity files are about to be written into `dir`
    fn writing(&self, category: EntityCategory, dir: &Path, count: usize);

    /// The export finished
    fn finished(&self, summary: &ExportSummary);
}

/// A progress reporter that ignores all updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ExportProgress for NoopProgress {
    fn creating_subdirectories(&self, _target_dir: &Path) {}
    fn fetching(&self, _category: EntityCategory) {}
    fn listing_failed(&self, _category: EntityCategory, _error: &DumpError) {}
    fn none_found(&self, _category: EntityCategory) {}
    fn writing(&self, _category: EntityCategory, _dir: &Path, _count: usize) {}
    fn finished(&self, _summary: &ExportSummary) {}
}
