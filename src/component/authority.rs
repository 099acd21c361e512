//! Authority component.

use core::fmt;

use crate::component::{Host, Port, UserInfo};
use crate::parser;

/// Authority URI component: userinfo, host and port.
///
/// An authority without a host is empty, whatever its port and userinfo:
/// both are dropped from every string form.
/// See <https://tools.ietf.org/html/rfc3986#section-3.2>.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Authority {
    /// Host.
    host: Host,
    /// Port.
    port: Port,
    /// Userinfo.
    user_info: UserInfo,
}

impl Authority {
    /// Creates an authority from its parts.
    #[inline]
    #[must_use]
    pub fn new(host: Host, port: Port, user_info: UserInfo) -> Self {
        Self {
            host,
            port,
            user_info,
        }
    }

    /// Parses an authority, without the leading `//`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Authority;
    ///
    /// let authority = Authority::parse("pedro:qwerty@myhost.com:80");
    /// assert_eq!(authority.host().as_str(), "myhost.com");
    /// assert_eq!(authority.port().get(), Some(80));
    /// assert_eq!(authority.user_info().password(), Some("qwerty"));
    ///
    /// assert!(Authority::parse("pedro@:80").is_empty());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let raw = parser::decompose_authority(s);
        if raw.host.is_empty() {
            return Self::default();
        }
        Self {
            host: Host::new(raw.host),
            port: Port::parse(raw.port),
            user_info: UserInfo::parse(raw.user_info),
        }
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Port {
        self.port
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user_info.username()
    }

    /// Returns the password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.user_info.password()
    }

    /// Returns `true` if the host is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }

    /// Returns `//` followed by the authority, or an empty string.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("//{self}")
    }

    /// Sets the host.
    #[inline]
    pub(crate) fn set_host(&mut self, host: Host) {
        self.host = host;
    }

    /// Sets the port.
    #[inline]
    pub(crate) fn set_port(&mut self, port: Port) {
        self.port = port;
    }

    /// Sets the userinfo.
    #[inline]
    pub(crate) fn set_user_info(&mut self, user_info: UserInfo) {
        self.user_info = user_info;
    }
}

impl fmt::Display for Authority {
    /// Writes the encoded authority without the `//` delimiter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(
            f,
            "{}{}{}",
            self.user_info.to_uri_string(),
            self.host.to_uri_string(),
            self.port.to_uri_string()
        )
    }
}
