//! Mutable components of a URL.

use crate::component::{Authority, Fragment, Host, Port, Path, Query, Scheme, UserInfo};
use crate::error::Error;

/// Mutable set of URI components.
///
/// Normalization rules and [`Url::with`][`crate::Url::with`] edit a
/// `Components` value, which is then serialized back into a URL.
///
/// # Examples
///
/// ```
/// use urlnorm::component::{Host, Path, Port, Scheme};
/// use urlnorm::Components;
///
/// let mut components = Components::new();
/// components.set_scheme(Scheme::new("HTTP"));
/// components.set_host(Host::new("example.com"));
/// components.set_port(Port::from(8080));
/// components.set_path(Path::new("a b"));
/// assert_eq!(components.to_uri_string()?, "http://example.com:8080/a%20b");
/// # Ok::<_, urlnorm::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Components {
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

impl Components {
    /// Creates empty components.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates components from all their parts.
    #[inline]
    #[must_use]
    pub fn from_parts(
        scheme: Scheme,
        authority: Authority,
        path: Path,
        query: Query,
        fragment: Fragment,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
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

    /// Sets the scheme.
    #[inline]
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
    }

    /// Sets the host, port and userinfo at once.
    #[inline]
    pub fn set_authority(&mut self, authority: Authority) {
        self.authority = authority;
    }

    /// Sets the host.
    #[inline]
    pub fn set_host(&mut self, host: Host) {
        self.authority.set_host(host);
    }

    /// Sets the port.
    #[inline]
    pub fn set_port(&mut self, port: Port) {
        self.authority.set_port(port);
    }

    /// Sets the userinfo.
    #[inline]
    pub fn set_user_info(&mut self, user_info: UserInfo) {
        self.authority.set_user_info(user_info);
    }

    /// Sets the path.
    #[inline]
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
    }

    /// Sets the query.
    #[inline]
    pub fn set_query(&mut self, query: Query) {
        self.query = query;
    }

    /// Sets the fragment.
    #[inline]
    pub fn set_fragment(&mut self, fragment: Fragment) {
        self.fragment = fragment;
    }

    /// Replaces every component with the ones of `other`.
    #[inline]
    pub fn replace_with(&mut self, other: Components) {
        *self = other;
    }

    /// Serializes the components into a URI string.
    ///
    /// # Errors
    ///
    /// Fails if there is no authority and the path starts with `//`.
    pub fn to_uri_string(&self) -> Result<String, Error> {
        let path = self.path.to_uri_string(!self.authority.is_empty())?;
        Ok(format!(
            "{}{}{}{}{}",
            self.scheme.to_uri_string(),
            self.authority.to_uri_string(),
            path,
            self.query.to_uri_string(),
            self.fragment.to_uri_string()
        ))
    }
}
