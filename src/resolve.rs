//! Reference resolution.
//!
//! See <https://tools.ietf.org/html/rfc3986#section-5.2>.
//!
//! # Examples
//!
//! ```
//! use urlnorm::resolve::Base;
//! use urlnorm::Url;
//!
//! let base: Base = "http://a/b/c/d;p?q".parse()?;
//! assert_eq!(base.to_absolute(&Url::new("../g"))?.as_str(), "http://a/b/g");
//! assert_eq!(base.to_absolute(&Url::new("//e/d"))?.as_str(), "http://e/d");
//! # Ok::<_, urlnorm::Error>(())
//! ```


use core::str::FromStr;

use crate::component::Query;
use crate::error::Error;
use crate::parsed::Parsed;
use crate::url::Url;

/// An absolute URL that references are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    /// Components of the base URL.
    parsed: Parsed,
}

impl Base {
    /// Creates a base from an absolute URL.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`][`crate::ErrorKind::InvalidArgument`]
    /// if the URL is not absolute (see [`Url::is_absolute`]).
    pub fn new(url: Url) -> Result<Self, Error> {
        if !url.is_absolute() {
            return Err(Error::not_absolute(url.as_str()));
        }
        Ok(Self {
            parsed: Parsed::new(url),
        })
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        self.parsed.url()
    }

    /// Returns the parsed base URL.
    #[inline]
    #[must_use]
    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    /// Resolves a reference against the base.
    ///
    /// A reference with a scheme is returned unchanged, and one with a host
    /// only gets the base scheme. Other references are merged into the base
    /// components; the base query is kept only if the reference has neither
    /// a path nor a query.
    ///
    /// # Errors
    ///
    /// Fails if the merged components can't be serialized.
    pub fn to_absolute(&self, reference: &Url) -> Result<Url, Error> {
        if reference.as_str().is_empty() {
            tracing::trace!(base = %self.url(), "empty reference");
            return Ok(self.url().clone());
        }
        let parsed = reference.parse();
        if !parsed.scheme().is_empty() {
            tracing::trace!(%reference, "reference has a scheme");
            return Ok(reference.clone());
        }
        if !parsed.host().is_empty() {
            tracing::trace!(%reference, "network-path reference");
            return Ok(Url::new(format!("{}:{reference}", self.parsed.scheme())));
        }

        tracing::trace!(base = %self.url(), %reference, "merging reference");
        let mut components = self.parsed.to_components();
        components.set_fragment(parsed.fragment().clone());
        if !parsed.path().is_empty() {
            components.set_path(self.parsed.path().merge(parsed.path()));
            components.set_query(Query::absent());
        }
        if !parsed.query().is_empty() {
            components.set_query(parsed.query().clone());
        }
        components.to_uri_string().map(Url::new)
    }
}

impl FromStr for Base {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Url::from(s))
    }
}

impl TryFrom<Url> for Base {
    type Error = Error;

    #[inline]
    fn try_from(url: Url) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}
