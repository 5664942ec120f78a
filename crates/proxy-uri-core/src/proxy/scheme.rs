use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::MalformedProxyUri;

/// The only schemes a proxy URI may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyScheme {
    Http,
    Https,
}

impl ProxyScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyScheme::Http => "http",
            ProxyScheme::Https => "https",
        }
    }

    /// Port assumed when the URI does not name one.
    pub fn default_port(self) -> u16 {
        match self {
            ProxyScheme::Http => 80,
            ProxyScheme::Https => 443,
        }
    }
}

impl FromStr for ProxyScheme {
    type Err = MalformedProxyUri;

    /// Case-insensitive; the scheme is given without its trailing `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(ProxyScheme::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(ProxyScheme::Https)
        } else {
            Err(MalformedProxyUri::UnsupportedScheme(s.to_string()))
        }
    }
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
