//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels (and `RUST_LOG`)
//! - Console output on stderr
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use mcpdump::logging::init_logging;
//! use mcpdump::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use mcpdump::log_export_start;
/// use std::path::Path;
///
/// log_export_start!(Path::new("/tmp/export").display());
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($target_dir:expr) => {
        tracing::info!(
            target_dir = %$target_dir,
            "Starting export"
        );
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use mcpdump::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, 1, Duration::from_millis(250));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($files:expr, $warnings:expr, $duration:expr) => {
        tracing::info!(
            files = $files,
            warnings = $warnings,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mcpdump::log_error_with_context;
/// use mcpdump::domain::DumpError;
///
/// let error = DumpError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
