//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for mcpdump using clap.

pub mod commands;
pub mod progress;

use clap::{Parser, Subcommand};

/// mcpdump - MCP registry configuration exporter
#[derive(Parser, Debug)]
#[command(name = "mcpdump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE, env = "MCPDUMP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MCPDUMP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export tool group and MCP server configurations into a directory
    Export(commands::export::ExportArgs),

    /// Validate configuration file (a missing default mcpdump.toml means defaults)
    ValidateConfig(commands::validate::ValidateArgs),
}
