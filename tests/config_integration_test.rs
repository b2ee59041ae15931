//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use mcpdump::config::{load_config, load_config_or_default};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("MCPDUMP_APPLICATION_LOG_LEVEL");
    std::env::remove_var("MCPDUMP_REGISTRY_BASE_URL");
    std::env::remove_var("MCPDUMP_REGISTRY_ACCESS_TOKEN");
    std::env::remove_var("MCPDUMP_REGISTRY_TIMEOUT_SECONDS");
    std::env::remove_var("MCPDUMP_EXPORT_TARGET_DIR");
    std::env::remove_var("TEST_MCPDUMP_TOKEN");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[registry]
base_url = "https://registry.example.com/"
access_token = "admin-token"
timeout_seconds = 45
tls_verify = false

[export]
target_dir = "~/mcp-backup"

[logging]
local_enabled = true
local_path = "/tmp/mcpdump-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.registry.base_url, "https://registry.example.com/");
    let token = config.registry.access_token.as_ref().unwrap();
    assert_eq!(token.expose_secret(), "admin-token");
    assert_eq!(config.registry.timeout_seconds, 45);
    assert!(!config.registry.tls_verify);
    assert_eq!(config.export.target_dir, "~/mcp-backup");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.registry.base_url, "http://127.0.0.1:8080");
    assert!(config.registry.access_token.is_none());
    assert_eq!(config.export.target_dir, ".mcpjungle");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_MCPDUMP_TOKEN", "from-env");

    let file = write_config(
        r#"
# access_token = "${NOT_SUBSTITUTED_IN_COMMENTS}"
[registry]
access_token = "${TEST_MCPDUMP_TOKEN}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    let token = config.registry.access_token.unwrap();
    assert_eq!(token.expose_secret(), "from-env");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[registry]\naccess_token = \"${TEST_MCPDUMP_TOKEN}\"\n");
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_MCPDUMP_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MCPDUMP_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("MCPDUMP_REGISTRY_BASE_URL", "https://override.example.com");
    std::env::set_var("MCPDUMP_REGISTRY_TIMEOUT_SECONDS", "90");
    std::env::set_var("MCPDUMP_EXPORT_TARGET_DIR", "/srv/mcp");

    let file = write_config(
        r#"
[application]
log_level = "info"

[registry]
base_url = "https://registry.example.com"
timeout_seconds = 10
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.registry.base_url, "https://override.example.com");
    assert_eq!(config.registry.timeout_seconds, 90);
    assert_eq!(config.export.target_dir, "/srv/mcp");

    cleanup_env_vars();
}

#[test]
fn test_env_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MCPDUMP_REGISTRY_TIMEOUT_SECONDS", "0");

    let file = write_config("");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("timeout_seconds"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[registry\nbase_url = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("mcpdump.toml");

    assert!(load_config(&missing).is_err());
    // Only the bare default path may be absent
    assert!(load_config_or_default(&missing).is_err());
}
