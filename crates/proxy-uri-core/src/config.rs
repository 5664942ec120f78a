use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::proxy::{pick_proxy, ProxyDescriptor, ProxyUri};

/// Environment variable that overrides `openapi-server-proxy-uri`.
pub const PROXY_URI_ENV: &str = "PROXY_URI_OPENAPI_SERVER_PROXY_URI";

/// Error reported when the configured proxy URI is rejected.
pub const MALFORMED_PROXY_URI: &str =
    "Malformed proxy uri, a correct example: https://example.com:8443/basePath";

/// Configuration loaded from `~/.config/proxy-uri/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProxyUriConfig {
    /// Public address the API is served under when behind a reverse proxy.
    /// Unset means the API is reached directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi_server_proxy_uri: Option<String>,
}

impl ProxyUriConfig {
    /// Replace the configured proxy URI with `value` when it is set.
    pub fn apply_env_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.openapi_server_proxy_uri = Some(value);
        }
        self
    }

    /// Reject a malformed proxy URI before anything uses it.
    pub fn validate(&self) -> Result<()> {
        if let Some(raw) = self.openapi_server_proxy_uri.as_deref() {
            ProxyUri::parse(raw)
                .with_context(|| format!("{MALFORMED_PROXY_URI} (got {raw:?})"))?;
        }
        Ok(())
    }

    /// Descriptor for the configured proxy, if one is configured and valid.
    pub fn proxy(&self) -> Option<ProxyDescriptor> {
        pick_proxy(self.openapi_server_proxy_uri.as_deref())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("proxy-uri")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProxyUriConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProxyUriConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<ProxyUriConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ProxyUriConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load the config file, apply the environment override and validate.
pub fn load() -> Result<ProxyUriConfig> {
    let cfg = load_or_init()?.apply_env_override(std::env::var(PROXY_URI_ENV).ok());
    cfg.validate()?;
    Ok(cfg)
}
