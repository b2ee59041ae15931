//! Core business logic for mcpdump.
//!
//! # Modules
//!
//! - [`target`] - Target directory resolution (home expansion, cleaning, emptiness check)
//! - [`export`] - Export orchestration, file writing and reporting
//!
//! # Export Workflow
//!
//! 1. **Resolve**: Turn the user's directory argument into an absolute, empty directory
//! 2. **Prepare**: Create one subdirectory per entity category
//! 3. **Fetch**: List each category's configurations from the registry
//! 4. **Write**: Store every entity as pretty-printed JSON
//! 5. **Report**: Return an export summary, including per-category warnings
//!
//! # Example
//!
//! ```rust,no_run
//! use mcpdump::adapters::registry::HttpRegistryClient;
//! use mcpdump::config::load_config;
//! use mcpdump::core::export::ExportCoordinator;
//! use mcpdump::core::target::resolve_target_dir;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mcpdump.toml")?;
//! let target_dir = resolve_target_dir(&config.export.target_dir)?;
//!
//! let client = HttpRegistryClient::new(&config.registry)?;
//! let coordinator = ExportCoordinator::new(Arc::new(client));
//!
//! let summary = coordinator.execute_export(&target_dir).await?;
//! println!("Files written: {}", summary.total_files());
//! for warning in summary.warnings() {
//!     println!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod target;
