//! Fragment component.

use core::fmt;

use crate::percent_encoding;

/// Fragment URI component.
///
/// An absent fragment and an empty one are different: `http://a/#` has an
/// empty fragment, `http://a/` has none.
/// See <https://tools.ietf.org/html/rfc3986#section-3.5>.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(Option<String>);

impl Fragment {
    /// Creates a present fragment, without the `#` delimiter.
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(Some(label.into()))
    }

    /// Creates an absent fragment.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Creates a fragment from an optional label.
    #[inline]
    #[must_use]
    pub fn from_option(label: Option<String>) -> Self {
        Self(label)
    }

    /// Returns the label, if present.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns `true` if the fragment is absent.
    ///
    /// A present empty fragment is not empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `#` and the encoded label, or an empty string when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Fragment;
    ///
    /// assert_eq!(Fragment::new("").to_uri_string(), "#");
    /// assert_eq!(Fragment::absent().to_uri_string(), "");
    /// ```
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        match &self.0 {
            Some(label) => format!("#{}", percent_encoding::recode(label)),
            None => String::new(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_absent() {
        assert_eq!(Fragment::new("label").to_uri_string(), "#label");
        assert_eq!(Fragment::new("").to_uri_string(), "#");
        assert_eq!(Fragment::absent().to_uri_string(), "");
        assert!(!Fragment::new("").is_empty());
        assert!(Fragment::absent().is_empty());
        assert_ne!(Fragment::new(""), Fragment::absent());
    }

    #[test]
    fn encoding() {
        assert_eq!(Fragment::new("a b").to_uri_string(), "#a%20b");
        assert_eq!(Fragment::new("a%20b").to_uri_string(), "#a%20b");
        assert_eq!(Fragment::new("a b").to_string(), "a b");
    }
}
