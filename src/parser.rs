//! Parser.
//!
//! Splitting follows the generic-syntax regular expression of
//! [RFC 3986 Appendix B](https://tools.ietf.org/html/rfc3986#appendix-B).
//! Any string matches it, so parsing never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern splitting a URI reference into its five top-level parts.
static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?")
        .expect("the URI reference pattern is valid")
});

/// Pattern splitting an authority into userinfo, host and port.
///
/// The userinfo runs up to the last `@`.
static AUTHORITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(?:(.*)@)?(\[[^\]]*\]|[^:]*)(?::([0-9]+))?")
        .expect("the authority pattern is valid")
});

/// Pattern recognizing URLs with a scheme and a non-empty host start.
static ABSOLUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]+://[^/]").expect("the absolute URL pattern is valid"));

/// Top-level components of a URI reference, as slices of the source.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    ///
    /// `Some("")` when the `?` delimiter is present with nothing after it.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    ///
    /// `Some("")` when the `#` delimiter is present with nothing after it.
    pub(crate) fragment: Option<&'a str>,
}

/// Parts of an authority, as slices of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    /// Userinfo, without the `@` delimiter.
    pub(crate) user_info: Option<&'a str>,
    /// Host.
    pub(crate) host: &'a str,
    /// Port digits.
    pub(crate) port: Option<&'a str>,
}

/// Splits the URI reference into its top-level components.
#[must_use]
pub(crate) fn decompose(s: &str) -> RawComponents<'_> {
    match URI_REFERENCE.captures(s) {
        Some(caps) => RawComponents {
            scheme: caps.get(1).map(|m| m.as_str()),
            authority: caps.get(2).map(|m| m.as_str()),
            path: caps.get(3).map_or("", |m| m.as_str()),
            query: caps.get(4).map(|m| m.as_str()),
            fragment: caps.get(5).map(|m| m.as_str()),
        },
        // Unreachable in practice: every group is optional or may be empty.
        None => RawComponents {
            scheme: None,
            authority: None,
            path: s,
            query: None,
            fragment: None,
        },
    }
}

/// Splits the authority (without the leading `//`) into its parts.
#[must_use]
pub(crate) fn decompose_authority(s: &str) -> RawAuthority<'_> {
    match AUTHORITY.captures(s) {
        Some(caps) => RawAuthority {
            user_info: caps.get(1).map(|m| m.as_str()),
            host: caps.get(2).map_or("", |m| m.as_str()),
            port: caps.get(3).map(|m| m.as_str()),
        },
        None => RawAuthority {
            user_info: None,
            host: "",
            port: None,
        },
    }
}

/// Returns `true` if the string has a scheme followed by `//` and a host start.
#[must_use]
pub(crate) fn is_absolute(s: &str) -> bool {
    ABSOLUTE.is_match(s)
}

/// Splits the string at the query: `(before, query with "?", after)`.
#[must_use]
pub(crate) fn split_around_query(s: &str) -> (&str, Option<&str>, &str) {
    let before_end = memchr::memchr2(b'?', b'#', s.as_bytes()).unwrap_or(s.len());
    let (before, rest) = s.split_at(before_end);
    if !rest.starts_with('?') {
        return (before, None, rest);
    }
    let query_end = memchr::memchr(b'#', rest.as_bytes()).unwrap_or(rest.len());
    let (query, after) = rest.split_at(query_end);
    (before, Some(query), after)
}

/// A URI reference split around its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathSplit<'a> {
    /// Scheme and authority, with their delimiters.
    pub(crate) before: &'a str,
    /// Path.
    pub(crate) path: &'a str,
    /// Query and fragment, with their delimiters.
    pub(crate) after: &'a str,
    /// Whether the `//` authority marker is present.
    pub(crate) has_authority: bool,
}

/// Splits the string at the path.
#[must_use]
pub(crate) fn split_around_path(s: &str) -> PathSplit<'_> {
    let raw = decompose(s);
    let scheme_len = raw.scheme.map_or(0, |scheme| scheme.len() + 1);
    let path_start = match raw.authority {
        Some(authority) => scheme_len + 2 + authority.len(),
        None => scheme_len,
    };
    let path_end = path_start + raw.path.len();
    PathSplit {
        before: &s[..path_start],
        path: raw.path,
        after: &s[path_end..],
        has_authority: raw.authority.is_some(),
    }
}
