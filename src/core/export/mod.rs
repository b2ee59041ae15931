//! Export orchestration
//!
//! This module provides the core export logic for mcpdump, including:
//! - Export coordination across entity categories
//! - Entity file naming and writing
//! - Progress reporting hooks
//! - Summary and reporting

pub mod coordinator;
pub mod progress;
pub mod summary;
pub mod writer;

pub use coordinator::ExportCoordinator;
pub use progress::{ExportProgress, NoopProgress};
pub use summary::{CategoryOutcome, CategoryStatus, ExportSummary};
pub use writer::{config_file_name, write_config_file};
