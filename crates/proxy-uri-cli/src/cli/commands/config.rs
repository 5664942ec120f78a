//! `proxy-uri config` – validate the configured proxy URI.

use anyhow::Result;
use proxy_uri::config;

use super::pick::render_json;

pub fn run_config() -> Result<()> {
    let cfg = config::load()?;
    tracing::debug!("loaded config: {:?}", cfg);
    match cfg.proxy() {
        Some(descriptor) => println!("{}", render_json(&descriptor)?),
        None => println!("no proxy configured"),
    }
    Ok(())
}
