//! Proxy URI validation and decomposition.
//!
//! A proxy URI is the public address an API is reverse-proxied under, e.g.
//! `https://example.com:8443/basePath`. It must be an absolute `http`/`https`
//! URI with a non-empty host, no user info, no query and an optional port in
//! 1..=65535. Anything else is malformed; an absent value means no proxy.

mod descriptor;
mod error;
mod predicates;
mod scheme;

pub use descriptor::ProxyDescriptor;
pub use error::MalformedProxyUri;
pub use predicates::{
    is_authority_valid, is_host_valid, is_port_valid, is_query_valid, is_scheme_valid,
    is_uri_valid, is_user_info_valid,
};
pub use scheme::ProxyScheme;

use crate::uri::UriParts;

/// A proxy URI that passed validation, with components as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyUri {
    scheme: ProxyScheme,
    host: String,
    port: Option<u16>,
    path: String,
}

impl ProxyUri {
    /// Validate `raw`, reporting the first rule it breaks.
    pub fn parse(raw: &str) -> Result<Self, MalformedProxyUri> {
        let parts = UriParts::parse(raw);
        let scheme = match parts.scheme {
            Some(scheme) if parts.is_absolute() => scheme.parse::<ProxyScheme>()?,
            _ => return Err(MalformedProxyUri::NotAbsolute),
        };
        if !is_query_valid(&parts) {
            return Err(MalformedProxyUri::QueryPresent);
        }
        let authority = parts.authority.ok_or(MalformedProxyUri::MissingAuthority)?;
        if !is_user_info_valid(&authority) {
            return Err(MalformedProxyUri::UserInfoPresent);
        }
        if !is_host_valid(&authority) {
            return Err(MalformedProxyUri::EmptyHost);
        }
        let port = match authority.port {
            Some(raw_port) => Some(
                predicates::port_number(raw_port)
                    .ok_or_else(|| MalformedProxyUri::InvalidPort(raw_port.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            scheme,
            host: authority.host.to_string(),
            port,
            path: parts.path.to_string(),
        })
    }

    pub fn scheme(&self) -> ProxyScheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port as written in the URI, if any.
    pub fn explicit_port(&self) -> Option<u16> {
        self.port
    }

    /// Path as written; may be empty.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Whether a configured proxy URI is unusable.
///
/// `None` means no proxy is configured and is not malformed.
pub fn is_malformed(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    match ProxyUri::parse(raw) {
        Ok(_) => false,
        Err(err) => {
            tracing::debug!(uri = raw, "malformed proxy uri: {}", err);
            true
        }
    }
}

/// Decompose a configured proxy URI.
///
/// Returns `None` when no proxy is configured or when `raw` is malformed.
/// Callers are expected to have rejected malformed values already (see
/// [`is_malformed`]); the check is repeated here so a bad value can never
/// produce a descriptor.
pub fn pick_proxy(raw: Option<&str>) -> Option<ProxyDescriptor> {
    let raw = raw?;
    match ProxyUri::parse(raw) {
        Ok(uri) => {
            let descriptor = ProxyDescriptor::from(uri);
            tracing::debug!(uri = raw, "using proxy {}", descriptor);
            Some(descriptor)
        }
        Err(err) => {
            tracing::debug!(uri = raw, "ignoring malformed proxy uri: {}", err);
            None
        }
    }
}
