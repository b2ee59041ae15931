//! Export command implementation
//!
//! This module implements the `export` command, which dumps every tool group
//! and MCP server configuration from the registry into a local directory.

use crate::adapters::registry::HttpRegistryClient;
use crate::cli::progress::ConsoleProgress;
use crate::config::load_config_or_default;
use crate::core::export::ExportCoordinator;
use crate::core::target::resolve_target_dir;
use crate::log_error_with_context;
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to export into (defaults to `export.target_dir`, i.e. `.mcpjungle`)
    ///
    /// The directory is created if missing and must be empty if it exists.
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let requested = self.target_dir(&config.export.target_dir);
        let target_dir = match resolve_target_dir(requested) {
            Ok(dir) => dir,
            Err(e) => {
                log_error_with_context!(&e, "Failed to prepare target directory");
                eprintln!("Error: {e}");
                return Ok(3); // Target directory error exit code
            }
        };

        let client = match HttpRegistryClient::new(&config.registry) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to create registry client");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let coordinator =
            ExportCoordinator::new(Arc::new(client)).with_progress(Arc::new(ConsoleProgress));

        let summary = match coordinator.execute_export(&target_dir).await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                eprintln!("   Files already written are left in {}", target_dir.display());
                return Ok(5); // Fatal error exit code
            }
        };

        if summary.has_warnings() {
            println!("⚠️  Warnings:");
            for warning in summary.warnings() {
                println!("  - {warning}");
            }
            println!();
        }

        println!("✅ Export complete!");
        Ok(0)
    }

    /// Directory argument to resolve: `--dir` wins over the configured default
    fn target_dir<'a>(&'a self, configured: &'a str) -> &'a str {
        self.dir.as_deref().unwrap_or(configured)
    }
}
