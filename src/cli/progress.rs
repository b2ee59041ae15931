//! Console progress output for the export command

use crate::core::export::{ExportProgress, ExportSummary};
use crate::domain::{DumpError, EntityCategory};
use std::path::Path;

/// Prints export progress lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ExportProgress for ConsoleProgress {
    fn creating_subdirectories(&self, target_dir: &Path) {
        println!("📁 Creating subdirectories inside {}", target_dir.display());
    }

    fn fetching(&self, category: EntityCategory) {
        println!("🔍 Fetching {} configurations...", category.label());
    }

    fn listing_failed(&self, category: EntityCategory, error: &DumpError) {
        println!(
            "⚠️  warning: failed to fetch {} configurations: {error}",
            category.label()
        );
    }

    fn none_found(&self, category: EntityCategory) {
        println!("   No {}s found.", category.label());
    }

    fn writing(&self, category: EntityCategory, dir: &Path, count: usize) {
        println!(
            "💾 Writing {count} {} configuration(s) to {}",
            category.label(),
            dir.display()
        );
    }

    fn finished(&self, summary: &ExportSummary) {
        println!();
        println!("📊 Export Summary:");
        println!("  Target: {}", summary.target_dir().display());
        for outcome in &summary.categories {
            println!(
                "  {}: {} file(s)",
                outcome.category.label(),
                outcome.files_written()
            );
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();
    }
}
