//! Scheme component.

use core::fmt;

use crate::percent_encoding;

/// Scheme URI component, such as `http`.
///
/// The raw value is kept as given; the URI form is lowercased.
/// See <https://tools.ietf.org/html/rfc3986#section-3.1>.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Creates a scheme from the name, without the `:` delimiter.
    ///
    /// An empty string means "no scheme".
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if there is no scheme.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the lowercased name followed by `:`, or an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Scheme;
    ///
    /// assert_eq!(Scheme::new("HTTP").to_uri_string(), "http:");
    /// assert_eq!(Scheme::default().to_uri_string(), "");
    /// ```
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let mut s = percent_encoding::encode_scheme(&self.0.to_ascii_lowercase());
        s.push(':');
        s
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scheme {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_form_is_raw() {
        assert_eq!(Scheme::new("HttPs").to_string(), "HttPs");
        assert!(Scheme::new("").is_empty());
        assert!(!Scheme::new("http").is_empty());
    }

    #[test]
    fn uri_form() {
        assert_eq!(Scheme::new("HttPs").to_uri_string(), "https:");
        assert_eq!(Scheme::new("svn+ssh").to_uri_string(), "svn+ssh:");
        assert_eq!(Scheme::new("").to_uri_string(), "");
    }
}
