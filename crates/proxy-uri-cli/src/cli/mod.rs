//! CLI for checking and decomposing proxy URIs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_check, run_config, run_link, run_pick};

/// Top-level CLI for proxy-uri.
#[derive(Debug, Parser)]
#[command(name = "proxy-uri")]
#[command(about = "Validate and decompose reverse-proxy URIs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a proxy URI is well-formed.
    Check {
        /// Proxy URI, e.g. https://example.com:8443/basePath.
        uri: String,
    },

    /// Print the scheme, host, port and path of a proxy URI as JSON.
    Pick {
        /// Proxy URI, e.g. https://example.com:8443/basePath.
        uri: String,
    },

    /// Print the absolute URL of a path served behind the proxy.
    Link {
        /// Proxy URI, e.g. https://example.com:8443/basePath.
        uri: String,
        /// Path relative to the proxy's base path.
        path: String,
    },

    /// Validate the configured proxy URI and print its descriptor.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { uri } => run_check(&uri)?,
            CliCommand::Pick { uri } => run_pick(&uri)?,
            CliCommand::Link { uri, path } => run_link(&uri, &path)?,
            CliCommand::Config => run_config()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
