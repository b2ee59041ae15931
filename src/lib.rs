//! # mcpdump - MCP registry configuration exporter
//!
//! mcpdump snapshots the configuration of an MCP registry (a management
//! service that holds MCP server registrations and tool groups) into a local
//! directory of pretty-printed JSON files, one file per entity:
//!
//! ```text
//! <target>/groups/<group>.json
//! <target>/servers/<server>.json
//! ```
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (target directory resolution, export orchestration)
//! - [`adapters`] - External integrations (registry HTTP client)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mcpdump::adapters::registry::HttpRegistryClient;
//! use mcpdump::config::load_config_or_default;
//! use mcpdump::core::export::ExportCoordinator;
//! use mcpdump::core::target::resolve_target_dir;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("mcpdump.toml")?;
//!
//!     // "" resolves to ".mcpjungle" in the current directory
//!     let target_dir = resolve_target_dir("~/mcp-backup")?;
//!
//!     let client = HttpRegistryClient::new(&config.registry)?;
//!     let summary = ExportCoordinator::new(Arc::new(client))
//!         .execute_export(&target_dir)
//!         .await?;
//!
//!     println!("Exported {} files", summary.total_files());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A category whose listing fails is skipped with a warning; the export still
//! succeeds. Failing to create a subdirectory or write a file aborts the run and
//! leaves already written files in place. All errors are [`domain::DumpError`]:
//!
//! ```rust,no_run
//! use mcpdump::domain::DumpError;
//!
//! fn example() -> Result<(), DumpError> {
//!     let config = mcpdump::config::load_config("mcpdump.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
