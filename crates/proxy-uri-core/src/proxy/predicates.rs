//! Acceptance predicates over parsed URI parts.
//!
//! Each predicate checks one rule in isolation; a proxy URI is valid when it
//! is absolute and [`is_uri_valid`] holds.

use crate::uri::{Authority, UriParts};

use super::ProxyScheme;

/// Scheme is `http` or `https`, ignoring case.
pub fn is_scheme_valid(uri: &UriParts<'_>) -> bool {
    uri.scheme.is_some_and(|s| s.parse::<ProxyScheme>().is_ok())
}

/// No query component at all; a bare `?` counts as one.
pub fn is_query_valid(uri: &UriParts<'_>) -> bool {
    uri.query.is_none()
}

/// Authority present, with valid user info, host and port.
pub fn is_authority_valid(uri: &UriParts<'_>) -> bool {
    uri.authority
        .as_ref()
        .is_some_and(|a| is_user_info_valid(a) && is_host_valid(a) && is_port_valid(a))
}

/// No user info; `@host` carries an empty one and is rejected.
pub fn is_user_info_valid(authority: &Authority<'_>) -> bool {
    authority.user_info.is_none()
}

pub fn is_host_valid(authority: &Authority<'_>) -> bool {
    !authority.host.is_empty()
}

/// Port absent, or decimal digits with a value in 1..=65535.
pub fn is_port_valid(authority: &Authority<'_>) -> bool {
    authority.port.map_or(true, |p| port_number(p).is_some())
}

pub fn is_uri_valid(uri: &UriParts<'_>) -> bool {
    is_scheme_valid(uri) && is_query_valid(uri) && is_authority_valid(uri)
}

/// Numeric value of a port string, if it is one the proxy may use.
///
/// Only ASCII digits are accepted, so `+80` and ` 80` are rejected even though
/// `str::parse` would take the former. Leading zeros are allowed.
pub(crate) fn port_number(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digit strings too long for u32 are out of range anyway.
    let n: u32 = raw.parse().ok()?;
    u16::try_from(n).ok().filter(|&p| p > 0)
}
