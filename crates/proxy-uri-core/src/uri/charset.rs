//! RFC 3986 character classes.

use std::net::Ipv6Addr;

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Every byte is unreserved, a sub-delim, `extra`, or part of a `%XX` escape.
fn all_allowed(s: &str, extra: &[u8]) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let escaped = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !escaped {
                return false;
            }
            i += 3;
            continue;
        }
        if !(is_unreserved(b) || is_sub_delim(b) || extra.contains(&b)) {
            return false;
        }
        i += 1;
    }
    true
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

pub(crate) fn is_user_info(s: &str) -> bool {
    all_allowed(s, b":")
}

pub(crate) fn is_reg_name(s: &str) -> bool {
    all_allowed(s, b"")
}

/// `"v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
fn is_ip_future(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(['v', 'V']) else {
        return false;
    };
    let Some((version, address)) = rest.split_once('.') else {
        return false;
    };
    !version.is_empty()
        && version.bytes().all(|b| b.is_ascii_hexdigit())
        && !address.is_empty()
        && address
            .bytes()
            .all(|b| is_unreserved(b) || is_sub_delim(b) || b == b':')
}

/// `"[" ( IPv6address / IPvFuture ) "]"`
fn is_ip_literal(s: &str) -> bool {
    let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        return false;
    };
    inner.parse::<Ipv6Addr>().is_ok() || is_ip_future(inner)
}

pub(crate) fn is_host(s: &str) -> bool {
    is_ip_literal(s) || is_reg_name(s)
}

pub(crate) fn is_path(s: &str) -> bool {
    all_allowed(s, b":@/")
}

pub(crate) fn is_query(s: &str) -> bool {
    all_allowed(s, b":@/?")
}
