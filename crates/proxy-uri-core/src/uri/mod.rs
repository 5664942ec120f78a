//! RFC 3986 component splitting.
//!
//! Splits a URI reference into scheme, authority, path, query and fragment
//! without normalising anything, so callers can tell `http://host:/` from
//! `http://host/` and `http:///x` from `http://x/`. WHATWG parsers such as
//! `url::Url` fold those cases together.

mod charset;

/// Components of a URI reference, borrowed from the input string.
///
/// Delimiters are stripped: `scheme` has no trailing `:`, `query` no leading
/// `?`, `fragment` no leading `#`. `Some("")` means the delimiter was present
/// with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<Authority<'a>>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// `[userinfo "@"] host [":" port]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    pub user_info: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Split `input` into its components (RFC 3986, Appendix B).
    ///
    /// Never fails: every string is some URI reference under the Appendix B
    /// grammar. Use [`UriParts::is_absolute`] to check the character-level
    /// grammar.
    pub fn parse(input: &'a str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (scheme, rest) = match rest.find(':') {
            Some(i) if i > 0 && !rest[..i].contains('/') => (Some(&rest[..i]), &rest[i + 1..]),
            _ => (None, rest),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(Authority::parse(&after[..end])), &after[end..])
            }
            None => (None, rest),
        };

        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// True when this is an RFC 3986 `absolute-URI`: a syntactically valid
    /// scheme, no fragment, and every component drawn from its character set.
    pub fn is_absolute(&self) -> bool {
        let Some(scheme) = self.scheme else {
            return false;
        };
        self.fragment.is_none()
            && charset::is_scheme(scheme)
            && self.authority.as_ref().map_or(true, Authority::is_well_formed)
            && charset::is_path(self.path)
            && self.query.map_or(true, charset::is_query)
    }
}

impl<'a> Authority<'a> {
    /// Split a raw authority (the text between `//` and the next `/`).
    pub fn parse(raw: &'a str) -> Self {
        let (user_info, host_port) = match raw.rfind('@') {
            Some(i) => (Some(&raw[..i]), &raw[i + 1..]),
            None => (None, raw),
        };

        // The port separator is the last ':' outside an IP-literal.
        let port_search_start = if host_port.starts_with('[') {
            host_port.find(']').map_or(host_port.len(), |i| i + 1)
        } else {
            0
        };
        let (host, port) = match host_port[port_search_start..].rfind(':') {
            Some(i) => {
                let i = port_search_start + i;
                (&host_port[..i], Some(&host_port[i + 1..]))
            }
            None => (host_port, None),
        };

        Self {
            user_info,
            host,
            port,
        }
    }

    /// Character-level check of each authority component. The port is only
    /// required to be URI-safe here; its numeric range is a policy question.
    pub fn is_well_formed(&self) -> bool {
        self.user_info.map_or(true, charset::is_user_info)
            && charset::is_host(self.host)
            && self.port.map_or(true, charset::is_reg_name)
    }
}
