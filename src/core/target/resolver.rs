//! Export target directory resolution
//!
//! Turns whatever the user typed for `--dir` into one canonical absolute
//! directory that exists and is empty. The steps run in a fixed order:
//! default substitution, `~` expansion, absolutization against the working
//! directory, lexical cleaning, creation, and finally the emptiness check.

use crate::config::DEFAULT_TARGET_DIR;
use crate::domain::TargetDirError;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolves export target directories
///
/// The home and working directories are captured up front so that tests
/// can resolve against scratch directories instead of the real process
/// environment.
///
/// # Example
///
/// ```no_run
/// use mcpdump::core::target::TargetResolver;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let target = TargetResolver::from_env().resolve("~/mcp-config")?;
/// println!("Exporting into {}", target.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TargetResolver {
    home_dir: Option<PathBuf>,
    current_dir: Option<PathBuf>,
}

impl TargetResolver {
    /// Create a resolver with explicit home and working directories
    pub fn new(home_dir: Option<PathBuf>, current_dir: Option<PathBuf>) -> Self {
        Self {
            home_dir,
            current_dir,
        }
    }

    /// Create a resolver from the process environment
    pub fn from_env() -> Self {
        Self::new(dirs::home_dir(), std::env::current_dir().ok())
    }

    /// Resolve `input` to an existing, empty, absolute directory
    ///
    /// # Errors
    ///
    /// - [`TargetDirError::HomeDirUnavailable`] if `~` expansion is needed but no home is known
    /// - [`TargetDirError::CurrentDirUnavailable`] if a relative path cannot be absolutized
    /// - [`TargetDirError::CreateFailed`] if the directory or an ancestor cannot be created
    /// - [`TargetDirError::ReadFailed`] if the directory cannot be listed
    /// - [`TargetDirError::NotEmpty`] if the directory already has entries
    pub fn resolve(&self, input: &str) -> Result<PathBuf, TargetDirError> {
        let input = if input.is_empty() {
            DEFAULT_TARGET_DIR
        } else {
            input
        };

        let expanded = self.expand_home(input)?;
        let absolute = self.make_absolute(expanded, input)?;
        let target = clean_path(&absolute);

        tracing::debug!(
            input = %input,
            target = %target.display(),
            "Resolved export target directory"
        );

        fs::create_dir_all(&target).map_err(|e| TargetDirError::CreateFailed {
            path: target.display().to_string(),
            message: e.to_string(),
        })?;

        ensure_empty(&target)?;

        Ok(target)
    }

    /// Expand a leading `~` or `~/`; other `~` forms are left alone
    fn expand_home(&self, input: &str) -> Result<PathBuf, TargetDirError> {
        let rest = if input == "~" {
            None
        } else if let Some(rest) = input.strip_prefix("~/") {
            Some(rest)
        } else {
            return Ok(PathBuf::from(input));
        };

        let home = self
            .home_dir
            .as_ref()
            .ok_or_else(|| TargetDirError::HomeDirUnavailable(input.to_string()))?;

        match rest {
            None => Ok(home.clone()),
            Some(rest) => {
                let mut joined = OsString::from(home.as_os_str());
                joined.push("/");
                joined.push(rest);
                Ok(PathBuf::from(joined))
            }
        }
    }

    fn make_absolute(&self, path: PathBuf, input: &str) -> Result<PathBuf, TargetDirError> {
        if path.is_absolute() {
            return Ok(path);
        }

        let current_dir =
            self.current_dir
                .as_ref()
                .ok_or_else(|| TargetDirError::CurrentDirUnavailable {
                    path: input.to_string(),
                    message: "current directory is unavailable".to_string(),
                })?;

        Ok(current_dir.join(path))
    }
}

/// Resolve `input` against the real home and working directories
pub fn resolve_target_dir(input: &str) -> Result<PathBuf, TargetDirError> {
    TargetResolver::from_env().resolve(input)
}

/// Lexically normalize a path
///
/// Redundant separators and `.` segments are dropped and `..` removes the
/// preceding segment. `..` never climbs above the root. Symlinks are not
/// consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => cleaned.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            Component::Normal(segment) => cleaned.push(segment),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }

    cleaned
}

fn ensure_empty(dir: &Path) -> Result<(), TargetDirError> {
    let read_failed = |e: std::io::Error| TargetDirError::ReadFailed {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    let mut entries = fs::read_dir(dir).map_err(read_failed)?;
    match entries.next() {
        None => Ok(()),
        Some(Ok(_)) => Err(TargetDirError::NotEmpty(dir.display().to_string())),
        Some(Err(e)) => Err(read_failed(e)),
    }
}
