//! Port component.

use core::fmt;

/// Port URI component.
///
/// See <https://tools.ietf.org/html/rfc3986#section-3.2.3>.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port(Option<u16>);

impl Port {
    /// Creates a port component; `None` means "no port".
    #[inline]
    #[must_use]
    pub const fn new(number: Option<u16>) -> Self {
        Self(number)
    }

    /// Parses decimal digits. Values out of range are treated as no port.
    #[must_use]
    pub(crate) fn parse(digits: Option<&str>) -> Self {
        Self(digits.and_then(|digits| digits.parse().ok()))
    }

    /// Returns the port number, if any.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<u16> {
        self.0
    }

    /// Returns the port number, or zero if undefined.
    #[inline]
    #[must_use]
    pub fn number(self) -> u16 {
        self.0.unwrap_or(0)
    }

    /// Returns `true` if the port is undefined.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// Returns `:` followed by the number, or an empty string.
    #[must_use]
    pub fn to_uri_string(self) -> String {
        match self.0 {
            Some(n) => format!(":{n}"),
            None => String::new(),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => Ok(()),
        }
    }
}

impl From<u16> for Port {
    #[inline]
    fn from(n: u16) -> Self {
        Self(Some(n))
    }
}
