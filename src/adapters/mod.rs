//! External system integrations for mcpdump.
//!
//! - [`registry`] - Management service integration (entity configuration listings)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with fake implementations. The export core depends only on the
//! [`registry::RegistryClient`] trait.
//!
//! ```rust,no_run
//! use mcpdump::adapters::registry::{HttpRegistryClient, RegistryClient};
//! use mcpdump::config::RegistryConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RegistryConfig {
//!     base_url: "https://mcp.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = HttpRegistryClient::new(&config)?;
//! let servers = client.list_server_configs().await?;
//! # Ok(())
//! # }
//! ```

pub mod registry;
