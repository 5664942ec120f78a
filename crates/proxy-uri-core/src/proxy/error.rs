//! Rejection reasons for proxy URIs.

use thiserror::Error;

/// Why a proxy URI was classified as malformed.
///
/// Reported in check order: absoluteness, scheme, query, authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedProxyUri {
    #[error("not an absolute URI")]
    NotAbsolute,
    #[error("unsupported scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
    #[error("query string is not allowed")]
    QueryPresent,
    #[error("missing authority, expected scheme://host")]
    MissingAuthority,
    #[error("embedded user info is not allowed")]
    UserInfoPresent,
    #[error("host is empty")]
    EmptyHost,
    #[error("invalid port {0:?}, expected 1-65535")]
    InvalidPort(String),
}
