//! Parsed URLs.

use crate::component::{Authority, Fragment, Host, Path, Port, Query, Scheme, UserInfo};
use crate::components::Components;
use crate::parser;
use crate::url::Url;

/// Immutable snapshot of a parsed URL.
///
/// # Examples
///
/// ```
/// use urlnorm::Url;
///
/// let parsed = Url::new("https://pedro@pac.pt:8080/my/path?a=1#label").parse();
/// assert_eq!(parsed.scheme().as_str(), "https");
/// assert_eq!(parsed.host().as_str(), "pac.pt");
/// assert_eq!(parsed.port().get(), Some(8080));
/// assert_eq!(parsed.user_info().username(), Some("pedro"));
/// assert_eq!(parsed.path().as_str(), "/my/path");
/// assert_eq!(parsed.query().as_str(), Some("a=1"));
/// assert_eq!(parsed.fragment().as_str(), Some("label"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Source URL.
    url: Url,
    /// Scheme.
    scheme: Scheme,
    /// Authority.
    authority: Authority,
    /// Path.
    path: Path,
    /// Query.
    query: Query,
    /// Fragment.
    fragment: Fragment,
}

impl Parsed {
    /// Parses the URL.
    #[must_use]
    pub fn new(url: Url) -> Self {
        let raw = parser::decompose(url.as_str());
        let scheme = Scheme::new(raw.scheme.unwrap_or(""));
        let authority = raw.authority.map(Authority::parse).unwrap_or_default();
        let path = Path::new(raw.path);
        let query = Query::from_option(raw.query.map(str::to_owned));
        let fragment = Fragment::from_option(raw.fragment.map(str::to_owned));
        Self {
            url,
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the source URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns the authority.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &Host {
        self.authority.host()
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Port {
        self.authority.port()
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn user_info(&self) -> &UserInfo {
        self.authority.user_info()
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Returns mutable copies of the components.
    #[must_use]
    pub fn to_components(&self) -> Components {
        Components::from_parts(
            self.scheme.clone(),
            self.authority.clone(),
            self.path.clone(),
            self.query.clone(),
            self.fragment.clone(),
        )
    }
}

impl From<Url> for Parsed {
    #[inline]
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Parsed {
        Parsed::new(Url::new(s))
    }

    #[test]
    fn absent_and_empty() {
        let parsed = parse("http://host");
        assert!(parsed.query().is_empty());
        assert!(parsed.fragment().is_empty());

        let parsed = parse("http://host?#");
        assert_eq!(parsed.query().as_str(), Some(""));
        assert_eq!(parsed.fragment().as_str(), Some(""));
    }

    #[test]
    fn relative() {
        let parsed = parse("this/path?a=1&b2#label");
        assert!(parsed.scheme().is_empty());
        assert!(parsed.authority().is_empty());
        assert_eq!(parsed.path().as_str(), "this/path");
        assert_eq!(parsed.query().as_str(), Some("a=1&b2"));
    }

    #[test]
    fn network_path() {
        let parsed = parse("//test.com:81/x");
        assert!(parsed.scheme().is_empty());
        assert_eq!(parsed.host().as_str(), "test.com");
        assert_eq!(parsed.port().get(), Some(81));
    }

    #[test]
    fn empty_host_drops_authority() {
        let parsed = parse("http://user@:80/x");
        assert!(parsed.authority().is_empty());
        assert!(parsed.port().is_empty());
        assert!(parsed.user_info().is_empty());
    }

    #[test]
    fn url_is_kept() {
        let parsed = parse("HTTP://A/b");
        assert_eq!(parsed.url().as_str(), "HTTP://A/b");
        assert_eq!(
            parsed.to_components().to_uri_string().unwrap(),
            "http://a/b"
        );
    }
}
