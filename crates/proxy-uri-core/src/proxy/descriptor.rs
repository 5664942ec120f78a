use serde::Serialize;
use std::fmt;
use url::Url;

use super::{ProxyScheme, ProxyUri};

/// Decomposed public address of a reverse proxy, ready for building links.
///
/// Only constructed from a validated [`ProxyUri`], so every field is already
/// within its documented range. Port and path carry their defaults: the
/// scheme's well-known port and `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProxyDescriptor {
    scheme: ProxyScheme,
    host: String,
    port: u16,
    path: String,
}

impl ProxyDescriptor {
    pub fn scheme(&self) -> ProxyScheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `host:port`, as used for the OpenAPI `host` field.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Alias for [`ProxyDescriptor::path`] under its OpenAPI name.
    pub fn base_path(&self) -> &str {
        &self.path
    }

    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }

    /// Absolute URL for `relative` under the proxy's base path.
    ///
    /// Exactly one `/` separates the base path and `relative`, whichever side
    /// already carries one. Fails for `IPvFuture` hosts such as `[v1.x]`,
    /// which `url::Url` does not accept.
    pub fn link(&self, relative: &str) -> Result<Url, url::ParseError> {
        let base = self.path.trim_end_matches('/');
        let relative = relative.trim_start_matches('/');
        Url::parse(&format!(
            "{}://{}{}/{}",
            self.scheme,
            self.authority(),
            base,
            relative
        ))
    }
}

impl From<ProxyUri> for ProxyDescriptor {
    fn from(uri: ProxyUri) -> Self {
        let scheme = uri.scheme();
        let port = uri.explicit_port().unwrap_or_else(|| scheme.default_port());
        let path = if uri.path().is_empty() {
            "/".to_string()
        } else {
            uri.path().to_string()
        };
        Self {
            scheme,
            host: uri.host().to_string(),
            port,
            path,
        }
    }
}

/// `scheme://host:port/path`, always with an explicit port.
impl fmt::Display for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }
}
