//! Entity file writing
//!
//! Each entity becomes `<dir>/<basename(name)>.json`, pretty-printed with
//! two-space indentation. Existing files with the same name are replaced.

use crate::domain::{DumpError, ExportableEntity, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of every exported file
pub const CONFIG_FILE_EXTENSION: &str = "json";

/// File name for an entity: the last path segment of its name plus `.json`
///
/// Empty segments are skipped, so trailing separators do not matter. A name
/// made only of separators (e.g. `"///"`) has an empty base and maps to `.json`.
///
/// # Example
///
/// ```
/// use mcpdump::core::export::writer::config_file_name;
///
/// assert_eq!(config_file_name("prod-group"), "prod-group.json");
/// assert_eq!(config_file_name("team/prod-group"), "prod-group.json");
/// assert_eq!(config_file_name("///"), ".json");
/// ```
pub fn config_file_name(entity_name: &str) -> String {
    let base = entity_name
        .split(|c| c == '/' || c == std::path::MAIN_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or_default();

    format!("{base}.{CONFIG_FILE_EXTENSION}")
}

/// Serialize `entity` and write it into `dir`, returning the file path
///
/// # Errors
///
/// Returns [`DumpError::Serialization`] or [`DumpError::FileWrite`].
/// Nothing is cleaned up on failure.
pub fn write_config_file(dir: &Path, entity: &ExportableEntity) -> Result<PathBuf> {
    let path = dir.join(config_file_name(entity.name()));

    let data = serde_json::to_vec_pretty(entity).map_err(|e| DumpError::Serialization {
        entity: format!("{}/{}", dir.display(), entity.name()),
        message: e.to_string(),
    })?;

    fs::write(&path, data).map_err(|e| DumpError::FileWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(path)
}
