//! Domain models and types for mcpdump.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Entity model** ([`EntityCategory`], [`ExportableEntity`])
//! - **Error types** ([`DumpError`], [`RegistryError`], [`TargetDirError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DumpError>`]:
//!
//! ```rust
//! use mcpdump::domain::{DumpError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = mcpdump::config::load_config("mcpdump.toml")?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use entity::{EntityCategory, ExportableEntity};
pub use errors::{DumpError, RegistryError, TargetDirError};
pub use result::Result;
