//! Query component.

use core::fmt;
use std::sync::OnceLock;

use crate::component::{Parameters, Value};
use crate::percent_encoding;

/// Characters copied verbatim when the query is percent-encoded.
///
/// `+` is kept so that form-encoded spaces keep their meaning.
const QUERY_DELIMITERS: &[char] = &['=', '&', '+'];

/// Query URI component.
///
/// An absent query and an empty one are different: `http://a/?` has an empty
/// query, `http://a/` has none. The parameters are parsed on first use and
/// cached. See <https://tools.ietf.org/html/rfc3986#section-3.4>.
#[derive(Debug, Default, Clone)]
pub struct Query {
    /// Raw query, without `?`.
    value: Option<String>,
    /// Parsed parameters.
    params: OnceLock<Parameters>,
}

impl Query {
    /// Creates a present query, without the `?` delimiter.
    #[inline]
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self::from_option(Some(query.into()))
    }

    /// Creates an absent query.
    #[inline]
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Creates a query from an optional string.
    #[inline]
    #[must_use]
    pub fn from_option(query: Option<String>) -> Self {
        Self {
            value: query,
            params: OnceLock::new(),
        }
    }

    /// Builds a query from parameters.
    ///
    /// No parameters give an absent query.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Parameters, Query};
    ///
    /// let params = Parameters::parse("a[0]=bc&a[1]=de");
    /// assert_eq!(Query::from_parameters(&params).to_string(), "a%5B0%5D=bc&a%5B1%5D=de");
    /// assert!(Query::from_parameters(&Parameters::new()).is_empty());
    /// ```
    #[must_use]
    pub fn from_parameters(params: &Parameters) -> Self {
        if params.is_empty() {
            return Self::absent();
        }
        Self::new(params.to_query_string())
    }

    /// Returns the raw query, if present.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if the query is absent.
    ///
    /// A present empty query is not empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the parsed parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.params
            .get_or_init(|| Parameters::parse(self.value.as_deref().unwrap_or("")))
    }

    /// Returns a copy of the parsed parameters.
    #[inline]
    #[must_use]
    pub fn to_parameters(&self) -> Parameters {
        self.parameters().clone()
    }

    /// Returns the value of a parameter.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters().get(key)
    }

    /// Returns `true` if the parameter exists.
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.parameters().has(key)
    }

    /// Returns a query with `sub` appended after a `&`.
    #[must_use]
    pub fn append(&self, sub: &str) -> Self {
        match self.value.as_deref() {
            None | Some("") => Self::new(sub),
            Some(value) => Self::new(format!("{value}&{sub}")),
        }
    }

    /// Returns a query with the `remove` keys deleted and `new` applied.
    ///
    /// A `None` value in `new` deletes the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Query;
    ///
    /// let query = Query::new("a=1&b=1");
    /// assert_eq!(query.change([("a", Some("2")), ("b", None)], &[]).to_string(), "a=2");
    /// assert_eq!(query.change::<_, &str, &str>([], &["a", "b"]).as_str(), None);
    /// ```
    #[must_use]
    pub fn change<I, K, V>(&self, new: I, remove: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut params = self.to_parameters();
        params.remove(remove);
        for (key, value) in new {
            let key = key.into();
            match value {
                Some(value) => {
                    params.insert(key, value);
                }
                None => params.remove([key]),
            }
        }
        Self::from_parameters(&params)
    }

    /// Returns `?` followed by the encoded query, or an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Query;
    ///
    /// assert_eq!(Query::new("a[0]=bc").to_uri_string(), "?a%5B0%5D=bc");
    /// assert_eq!(Query::new("").to_uri_string(), "?");
    /// assert_eq!(Query::absent().to_uri_string(), "");
    /// ```
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        match &self.value {
            Some(value) => format!("?{}", percent_encoding::recode_runs(value, QUERY_DELIMITERS)),
            None => String::new(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or(""))
    }
}

impl PartialEq for Query {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Query {}
