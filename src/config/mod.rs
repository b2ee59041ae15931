//! Configuration management for mcpdump.
//!
//! mcpdump reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MCPDUMP_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [registry]
//! base_url = "https://mcp.example.com"
//! access_token = "${MCPDUMP_ACCESS_TOKEN}"
//! timeout_seconds = 30
//!
//! [export]
//! target_dir = "~/mcp-config"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/mcpdump"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use mcpdump::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("mcpdump.toml")?;
//! println!("Registry: {}", config.registry.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, DumpConfig, ExportConfig, LoggingConfig, RegistryConfig,
    DEFAULT_TARGET_DIR,
};
pub use secret::{secret_string, SecretString, SecretValue};
