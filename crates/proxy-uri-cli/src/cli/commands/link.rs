//! `proxy-uri link` – absolute URL for a path behind the proxy.

use anyhow::{Context, Result};

use super::descriptor_for;

pub fn run_link(uri: &str, path: &str) -> Result<()> {
    let descriptor = descriptor_for(uri)?;
    let url = descriptor
        .link(path)
        .with_context(|| format!("cannot build link for {path:?}"))?;
    println!("{url}");
    Ok(())
}
