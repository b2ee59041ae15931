//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the mcpdump configuration file.

use crate::config::{load_config_or_default, DEFAULT_CONFIG_FILE};
use std::path::Path;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading follows the same rules as `export`: a missing `mcpdump.toml`
    /// means built-in defaults. [`load_config_or_default`] validates as part of
    /// loading, so any error here is a configuration error (exit code 2).
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        if config_path == DEFAULT_CONFIG_FILE && !Path::new(config_path).exists() {
            println!("ℹ️  {config_path} not found, checking built-in defaults");
            println!();
        }

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Registry: {}", config.registry.base_url);
        println!(
            "  Access Token: {}",
            if config.registry.access_token.is_some() {
                "[REDACTED]"
            } else {
                "(none)"
            }
        );
        println!("  Timeout: {}s", config.registry.timeout_seconds);
        println!("  TLS Verify: {}", config.registry.tls_verify);
        println!("  Target Directory: {}", config.export.target_dir);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
