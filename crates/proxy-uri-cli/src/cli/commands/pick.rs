//! `proxy-uri pick` – print a proxy URI's descriptor as JSON.

use anyhow::Result;
use proxy_uri::ProxyDescriptor;

use super::descriptor_for;

pub fn run_pick(uri: &str) -> Result<()> {
    let descriptor = descriptor_for(uri)?;
    println!("{}", render_json(&descriptor)?);
    Ok(())
}

pub(super) fn render_json(descriptor: &ProxyDescriptor) -> Result<String> {
    Ok(serde_json::to_string_pretty(descriptor)?)
}
