//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DumpConfig;
use super::secret::secret_string;
use crate::domain::errors::DumpError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "mcpdump.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DumpConfig
/// 4. Applies environment variable overrides (MCPDUMP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing or substitution
/// fails, or the resulting configuration is invalid.
///
/// # Examples
///
/// ```no_run
/// use mcpdump::config::loader::load_config;
///
/// let config = load_config("mcpdump.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DumpConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DumpError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DumpError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: DumpConfig = toml::from_str(&contents)?;

    finish(config)
}

/// Loads configuration, falling back to built-in defaults for a missing default file
///
/// An explicitly chosen file that does not exist is still an error; only the
/// default `mcpdump.toml` is allowed to be absent.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<DumpConfig> {
    let path = path.as_ref();

    if !path.exists() && path == Path::new(DEFAULT_CONFIG_FILE) {
        tracing::debug!(
            path = %path.display(),
            "No configuration file found, using defaults"
        );
        return finish(DumpConfig::default());
    }

    load_config(path)
}

fn finish(mut config: DumpConfig) -> Result<DumpConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DumpError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DumpError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Comment lines are copied as-is
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DumpError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MCPDUMP_* prefix
///
/// Environment variables follow the pattern: MCPDUMP_<SECTION>_<KEY>
/// For example: MCPDUMP_REGISTRY_BASE_URL, MCPDUMP_EXPORT_TARGET_DIR
fn apply_env_overrides(config: &mut DumpConfig) {
    if let Ok(val) = std::env::var("MCPDUMP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Registry overrides
    if let Ok(val) = std::env::var("MCPDUMP_REGISTRY_BASE_URL") {
        config.registry.base_url = val;
    }
    if let Ok(val) = std::env::var("MCPDUMP_REGISTRY_ACCESS_TOKEN") {
        config.registry.access_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("MCPDUMP_REGISTRY_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.registry.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("MCPDUMP_REGISTRY_TLS_VERIFY") {
        config.registry.tls_verify = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("MCPDUMP_EXPORT_TARGET_DIR") {
        config.export.target_dir = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MCPDUMP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MCPDUMP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MCPDUMP_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("MCPDUMP_LOADER_TEST_VAR", "test_value");
        let input = "access_token = \"${MCPDUMP_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "access_token = \"test_value\"\n");
        std::env::remove_var("MCPDUMP_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("MCPDUMP_LOADER_MISSING_VAR");
        let input = "access_token = \"${MCPDUMP_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# token = \"${MCPDUMP_LOADER_NEVER_SET}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${MCPDUMP_LOADER_NEVER_SET}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_rejects_missing_explicit_file() {
        let result = load_config_or_default("definitely-not-here.toml");
        assert!(matches!(result, Err(DumpError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[registry]
base_url = "https://registry.example.com"
timeout_seconds = 10

[export]
target_dir = "~/mcp-config"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.registry.timeout_seconds, 10);
        assert_eq!(config.export.target_dir, "~/mcp-config");
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[application]\nlog_level = \"loud\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.unwrap_err().to_string().contains("log_level"));
    }
}
