//! CLI command handlers, one per file.

mod check;
mod config;
mod link;
mod pick;

pub use check::run_check;
pub use config::run_config;
pub use link::run_link;
pub use pick::run_pick;

use anyhow::{Context, Result};
use proxy_uri::{ProxyDescriptor, ProxyUri};

/// Validate `uri` and decompose it, keeping the rejection reason.
fn descriptor_for(uri: &str) -> Result<ProxyDescriptor> {
    let parsed = ProxyUri::parse(uri).with_context(|| format!("malformed proxy uri {uri:?}"))?;
    Ok(parsed.into())
}
