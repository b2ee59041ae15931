//! Registry client trait definition
//!
//! The export core only needs two read operations from the management
//! service. Keeping them behind a trait lets the orchestrator run against
//! the HTTP client in production and against in-memory fakes in tests.

use crate::domain::{ExportableEntity, Result};
use async_trait::async_trait;

/// Read access to the registry's entity configurations
///
/// # Example
///
/// ```no_run
/// use mcpdump::adapters::registry::{HttpRegistryClient, RegistryClient};
/// use mcpdump::config::RegistryConfig;
///
/// # async fn example() -> mcpdump::domain::Result<()> {
/// let client = HttpRegistryClient::new(&RegistryConfig::default())?;
/// let groups = client.list_tool_group_configs().await?;
/// println!("Found {} tool groups", groups.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// List the configuration of every tool group
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is unreachable, rejects the
    /// request, or answers with something that is not a list of named
    /// entities.
    async fn list_tool_group_configs(&self) -> Result<Vec<ExportableEntity>>;

    /// List the configuration of every registered MCP server
    ///
    /// # Errors
    ///
    /// Same conditions as [`RegistryClient::list_tool_group_configs`].
    async fn list_server_configs(&self) -> Result<Vec<ExportableEntity>>;

    /// Base URL of the registry, for log and progress messages
    fn base_url(&self) -> &str;
}
