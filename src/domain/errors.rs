//! Domain error types
//!
//! This module defines the error hierarchy for mcpdump.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main mcpdump error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Registry (management service) errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Target directory resolution errors
    #[error("Target directory error: {0}")]
    Target(#[from] TargetDirError),

    /// Failed to create a category subdirectory under the export root
    #[error("Failed to create {category} directory {path}: {message}")]
    SubdirectoryCreate {
        category: String,
        path: String,
        message: String,
    },

    /// Failed to serialize an entity
    #[error("Failed to serialize entity {entity}: {message}")]
    Serialization { entity: String, message: String },

    /// Failed to write an entity file
    #[error("Failed to write entity file {path}: {message}")]
    FileWrite { path: String, message: String },
}

/// Registry-specific errors
///
/// Errors that occur when talking to the management service.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to reach the registry
    #[error("Failed to connect to registry: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Credentials missing, invalid, or lacking admin rights
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Invalid response from registry: {0}")]
    InvalidResponse(String),
}

/// Target directory resolution errors
#[derive(Debug, Error)]
pub enum TargetDirError {
    /// `~` expansion was requested but no home directory is known
    #[error("Cannot expand '{0}': home directory could not be determined")]
    HomeDirUnavailable(String),

    /// The current working directory could not be read
    #[error("Cannot resolve '{path}' against the current directory: {message}")]
    CurrentDirUnavailable { path: String, message: String },

    /// The directory (or one of its ancestors) could not be created
    #[error("Failed to create target directory {path}: {message}")]
    CreateFailed { path: String, message: String },

    /// The directory could not be listed
    #[error("Failed to read contents of target directory {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// The directory already has entries
    #[error("Target directory {0} is not empty")]
    NotEmpty(String),
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DumpError {
    fn from(err: toml::de::Error) -> Self {
        DumpError::Configuration(format!("Failed to parse TOML: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_error_display() {
        let err = DumpError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_registry_error_conversion() {
        let registry_err = RegistryError::ConnectionFailed("Network error".to_string());
        let dump_err: DumpError = registry_err.into();
        assert!(matches!(dump_err, DumpError::Registry(_)));
    }

    #[test]
    fn test_target_error_conversion() {
        let target_err = TargetDirError::NotEmpty("/tmp/export".to_string());
        let dump_err: DumpError = target_err.into();
        assert!(matches!(dump_err, DumpError::Target(_)));
        assert!(dump_err.to_string().contains("/tmp/export is not empty"));
    }

    #[test]
    fn test_write_error_names_path() {
        let err = DumpError::FileWrite {
            path: "/tmp/export/groups/a.json".to_string(),
            message: "Permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write entity file /tmp/export/groups/a.json: Permission denied"
        );
    }

    #[test]
    fn test_server_error_display() {
        let err = RegistryError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 503 - unavailable");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let dump_err: DumpError = toml_err.into();
        assert!(matches!(dump_err, DumpError::Configuration(_)));
        assert!(dump_err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_dump_error_implements_std_error() {
        let err = DumpError::Serialization {
            entity: "groups/a".to_string(),
            message: "key must be a string".to_string(),
        };
        let _: &dyn std::error::Error = &err;
    }
}
