//! Host component.

use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use crate::percent_encoding;

/// Kind of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Empty or undefined host.
    Empty,
    /// Registered name, such as `example.com`.
    Name,
    /// IPv4 address literal.
    Ipv4(Ipv4Addr),
    /// IPv6 address literal, written between square brackets.
    Ipv6(Ipv6Addr),
}

/// Host URI component: a registered name or an IP address literal.
///
/// The value may hold non-ASCII characters; they are converted to punycode
/// in the URI form. See <https://tools.ietf.org/html/rfc3986#section-3.2.2>.
#[derive(Debug, Default, Clone)]
pub struct Host {
    /// Raw host.
    value: String,
    /// Kind, computed on first request.
    kind: OnceLock<HostKind>,
}

impl Host {
    /// Creates a host. IPv6 literals must be enclosed in brackets.
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            value: host.into(),
            kind: OnceLock::new(),
        }
    }

    /// Returns the raw host.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the host is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the host kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Host, HostKind};
    ///
    /// assert_eq!(Host::new("example.com").kind(), HostKind::Name);
    /// assert!(matches!(Host::new("[::1]").kind(), HostKind::Ipv6(_)));
    /// ```
    #[must_use]
    pub fn kind(&self) -> HostKind {
        *self.kind.get_or_init(|| classify(&self.value))
    }

    /// Returns the labels of a name, the octets of an IPv4 literal or the
    /// groups of an IPv6 literal, as written.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        match self.kind() {
            HostKind::Empty => Vec::new(),
            HostKind::Name | HostKind::Ipv4(_) => self.value.split('.').collect(),
            HostKind::Ipv6(_) => self
                .value
                .trim_matches(|c| c == '[' || c == ']')
                .split(':')
                .collect(),
        }
    }

    /// Converts a name host to its ASCII (punycode) form.
    ///
    /// IP literals and empty hosts are returned unchanged.
    #[must_use]
    pub fn to_punycode(&self) -> Self {
        if self.kind() != HostKind::Name {
            return self.clone();
        }
        Self::new(punycode(&self.value))
    }

    /// Converts a name host to its Unicode form.
    ///
    /// IP literals and empty hosts are returned unchanged.
    #[must_use]
    pub fn to_unicode(&self) -> Self {
        if self.kind() != HostKind::Name {
            return self.clone();
        }
        let (unicode, result) = idna::domain_to_unicode(&self.value);
        if let Err(e) = result {
            tracing::debug!(host = %self.value, error = %e, "unicode host conversion failed");
        }
        Self::new(unicode)
    }

    /// Returns the canonical URI form.
    ///
    /// Names are lowercased and converted to punycode, IP literals are
    /// written in their canonical textual form.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        match self.kind() {
            HostKind::Empty => String::new(),
            HostKind::Name => match percent_encoding::decode(&self.value) {
                Some(name) => percent_encoding::recode(&punycode(&name)),
                // Escapes that are not UTF-8 can't be IDNA-mapped; keep them.
                None => percent_encoding::recode(&self.value.to_ascii_lowercase()),
            },
            HostKind::Ipv4(addr) => addr.to_string(),
            HostKind::Ipv6(addr) => format!("[{addr}]"),
        }
    }
}

/// Detects the kind of the raw host.
fn classify(value: &str) -> HostKind {
    if value.is_empty() {
        return HostKind::Empty;
    }
    if let Some(inner) = value.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Ok(addr) = inner.parse() {
            return HostKind::Ipv6(addr);
        }
    }
    match value.parse() {
        Ok(addr) => HostKind::Ipv4(addr),
        Err(_) => HostKind::Name,
    }
}

/// Converts a name to punycode, falling back to the lowercased name.
fn punycode(name: &str) -> String {
    match idna::domain_to_ascii(name) {
        Ok(ascii) => ascii,
        Err(e) => {
            tracing::debug!(host = %name, error = %e, "punycode host conversion failed");
            name.to_lowercase()
        }
    }
}

impl fmt::Display for Host {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq for Host {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Host {}

impl From<&str> for Host {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
