//! URL strings.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::component::{Fragment, Path, Query, Value};
use crate::components::Components;
use crate::error::Error;
use crate::parsed::Parsed;
use crate::parser;

/// A URL or relative reference.
///
/// Any string is accepted. Equality is string equality; use
/// [`Rules`][`crate::normalize::Rules`] to compare normalized forms.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Url(String);

impl Url {
    /// Creates a URL from a string.
    #[inline]
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the URL string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the URL string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the URL into its components.
    #[inline]
    #[must_use]
    pub fn parse(&self) -> Parsed {
        Parsed::new(self.clone())
    }

    /// Returns `true` if the URL has a scheme followed by `//` and a
    /// non-empty host start.
    ///
    /// This is stricter than RFC 3986: `http:///path` is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::Url;
    ///
    /// assert!(Url::new("http://test.com/#label").is_absolute());
    /// assert!(!Url::new("//test.com").is_absolute());
    /// assert!(!Url::new("http:///path").is_absolute());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        parser::is_absolute(&self.0)
    }

    /// Returns a URL built from the components edited by `f`.
    ///
    /// # Errors
    ///
    /// Fails if the edited components can't be serialized, see
    /// [`Components::to_uri_string`].
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Host, Port};
    /// use urlnorm::Url;
    ///
    /// let url = Url::new("http://pac.pt/path?a=1").with(|c| {
    ///     c.set_host(Host::new("test.com"));
    ///     c.set_port(Port::from(8080));
    /// })?;
    /// assert_eq!(url.as_str(), "http://test.com:8080/path?a=1");
    /// # Ok::<_, urlnorm::Error>(())
    /// ```
    pub fn with<F>(&self, f: F) -> Result<Self, Error>
    where
        F: FnOnce(&mut Components),
    {
        let mut components = self.parse().to_components();
        f(&mut components);
        components.to_uri_string().map(Self)
    }

    /// Returns a URL with query parameters removed and replaced.
    ///
    /// The `remove` keys are deleted first, then `new` is applied; a `None`
    /// value deletes the key. The rest of the URL is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::Url;
    ///
    /// let url = Url::new("http://pac.pt/path?a=1&b=2#label");
    /// let changed = url.change_parameters([("c", Some("3")), ("a", None)], &["b"]);
    /// assert_eq!(changed.as_str(), "http://pac.pt/path?c=3#label");
    /// ```
    #[must_use]
    pub fn change_parameters<I, K, V>(&self, new: I, remove: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let (before, query, after) = parser::split_around_query(&self.0);
        let query = Query::from_option(query.map(|q| q[1..].to_owned()));
        let changed = query.change(new, remove);
        Self(format!("{before}{}{after}", changed.to_uri_string()))
    }

    /// Returns a URL with the path replaced.
    ///
    /// # Errors
    ///
    /// Fails if the URL has no authority and the path starts with `//`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Path;
    /// use urlnorm::Url;
    ///
    /// let url = Url::new("http://pac.pt/path?a=1#label").with_path(&Path::new("other/place"))?;
    /// assert_eq!(url.as_str(), "http://pac.pt/other/place?a=1#label");
    /// # Ok::<_, urlnorm::Error>(())
    /// ```
    pub fn with_path(&self, path: &Path) -> Result<Self, Error> {
        let split = parser::split_around_path(&self.0);
        let path = path.to_uri_string(split.has_authority)?;
        Ok(Self(format!("{}{path}{}", split.before, split.after)))
    }

    /// Returns a URL with the fragment replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Fragment;
    /// use urlnorm::Url;
    ///
    /// let url = Url::new("http://pac.pt/#old");
    /// assert_eq!(url.with_fragment(&Fragment::new("new")).as_str(), "http://pac.pt/#new");
    /// assert_eq!(url.with_fragment(&Fragment::absent()).as_str(), "http://pac.pt/");
    /// ```
    #[must_use]
    pub fn with_fragment(&self, fragment: &Fragment) -> Self {
        let before = self.0.split('#').next().unwrap_or("");
        Self(format!("{before}{}", fragment.to_uri_string()))
    }
}

impl fmt::Display for Url {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Url {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Url {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Url {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<Url> for String {
    #[inline]
    fn from(url: Url) -> Self {
        url.0
    }
}

impl FromStr for Url {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl PartialEq<str> for Url {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Url {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Serde support.
#[cfg(feature = "serde")]
mod __serde {
    use super::Url;

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Url {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// URL string visitor.
    #[derive(Debug, Clone, Copy)]
    struct UrlVisitor;

    impl<'de> Visitor<'de> for UrlVisitor {
        type Value = Url;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a URL string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Url::from(v))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Url::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Url {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_string(UrlVisitor)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn absolute() {
        assert!(Url::new("http://test.com").is_absolute());
        assert!(!Url::new("http:").is_absolute());
        assert!(!Url::new("this/path?a=1&b2#label").is_absolute());
    }

    #[test]
    fn with_components() {
        let url = Url::new("http://pac.pt:80/path").with(|c| {
            c.set_path(Path::new("/x/../y"));
            c.set_query(Query::new("q"));
        });
        assert_eq!(url.unwrap(), "http://pac.pt:80/x/../y?q");

        let err = Url::new("http:/a").with(|c| c.set_path(Path::new("//a"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmbiguousPath);
    }

    #[test]
    fn change_parameters() {
        let none: [(&str, Option<&str>); 0] = [];
        let url = Url::new("http://pac.pt/path#label");
        assert_eq!(
            url.change_parameters([("a", Some("1"))], &[]),
            "http://pac.pt/path?a=1#label"
        );
        assert_eq!(
            Url::new("http://pac.pt/path?a=1&b=2").change_parameters(none, &["a", "b"]),
            "http://pac.pt/path"
        );
        assert_eq!(
            Url::new("?a=1").change_parameters([("a", Some("x y"))], &[]),
            "?a=x+y"
        );
    }

    #[test]
    fn with_path() {
        let cases = &[
            ("http://pac.pt/path?a=1#label", "/other/place", "http://pac.pt/other/place?a=1#label"),
            ("http://pac.pt?a=1#label", "other/place", "http://pac.pt/other/place?a=1#label"),
            ("/my/path?a=1", "other", "other?a=1"),
            ("mailto:joe@example.com", "ann@example.com", "mailto:ann@example.com"),
            ("http://pac.pt/path", "", "http://pac.pt"),
        ];
        for &(url, path, expected) in cases {
            assert_eq!(Url::new(url).with_path(&Path::new(path)).unwrap(), expected);
        }
        assert!(Url::new("/x").with_path(&Path::new("//y")).is_err());
    }

    #[test]
    fn with_fragment() {
        let cases = &[
            ("", Fragment::new("f"), "#f"),
            ("#old", Fragment::new("new"), "#new"),
            ("http://a/b?c", Fragment::new(""), "http://a/b?c#"),
            ("http://a/b#c#d", Fragment::absent(), "http://a/b"),
            ("http://a/b", Fragment::new("x y"), "http://a/b#x%20y"),
        ];
        for (url, fragment, expected) in cases {
            assert_eq!(Url::new(*url).with_fragment(fragment), *expected);
        }
    }
}
