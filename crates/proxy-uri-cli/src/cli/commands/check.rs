//! `proxy-uri check` – report whether a proxy URI is well-formed.

use anyhow::Result;

use super::descriptor_for;

pub fn run_check(uri: &str) -> Result<()> {
    descriptor_for(uri)?;
    println!("ok");
    Ok(())
}
