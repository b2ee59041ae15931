//! Registry (management service) adapter
//!
//! This module provides the [`RegistryClient`] abstraction consumed by the
//! export core and its HTTP implementation.

pub mod http;
pub mod traits;

pub use http::{HttpRegistryClient, SERVER_CONFIGS_PATH, TOOL_GROUP_CONFIGS_PATH};
pub use traits::RegistryClient;
