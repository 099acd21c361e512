//! Building the request URL from server variables.
//!
//! Web servers describe the current request with CGI-style variables.
//! The required keys are `SERVER_NAME`, `SERVER_PORT` and `REQUEST_URI`;
//! `REQUEST_SCHEME`, `HTTPS` and `QUERY_STRING` are optional.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::env;
use std::hash::{BuildHasher, Hash};

use crate::config::SchemePorts;
use crate::error::Error;
use crate::url::Url;

/// Required server variables, in the order they are checked.
const REQUIRED: [&str; 3] = ["SERVER_NAME", "SERVER_PORT", "REQUEST_URI"];

impl Url {
    /// Builds the request URL from server variables.
    ///
    /// The scheme is `REQUEST_SCHEME` (lowercased) when set and non-empty,
    /// else `https` when `HTTPS` is set to anything but `off`, else `http`.
    /// The port is omitted when it is the default port of the scheme.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`][`crate::ErrorKind::InvalidArgument`]
    /// if a required key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use urlnorm::config::SchemePorts;
    /// use urlnorm::Url;
    ///
    /// let vars = HashMap::from([
    ///     ("SERVER_NAME", "example.com"),
    ///     ("SERVER_PORT", "443"),
    ///     ("REQUEST_URI", "/path"),
    ///     ("HTTPS", "on"),
    ///     ("QUERY_STRING", "a=1"),
    /// ]);
    /// let url = Url::from_server_vars(&vars, &SchemePorts::builtin())?;
    /// assert_eq!(url.as_str(), "https://example.com/path?a=1");
    /// # Ok::<_, urlnorm::Error>(())
    /// ```
    pub fn from_server_vars<K, V, S>(
        vars: &HashMap<K, V, S>,
        ports: &SchemePorts,
    ) -> Result<Self, Error>
    where
        K: Borrow<str> + Hash + Eq,
        V: AsRef<str>,
        S: BuildHasher,
    {
        let get = |key: &str| vars.get(key).map(V::as_ref);
        let mut required = [""; 3];
        for (slot, key) in required.iter_mut().zip(REQUIRED) {
            *slot = get(key).ok_or_else(|| Error::missing_server_var(key))?;
        }
        let [name, port, request_uri] = required;

        let scheme = match get("REQUEST_SCHEME").filter(|s| !s.is_empty()) {
            Some(scheme) => scheme.to_ascii_lowercase(),
            None if get("HTTPS").is_some_and(|https| https != "off") => "https".to_owned(),
            None => "http".to_owned(),
        };

        let mut url = format!("{scheme}://{name}");
        let is_default = port
            .parse::<u16>()
            .is_ok_and(|port| ports.is_scheme_port(&scheme, port));
        if !is_default {
            url.push(':');
            url.push_str(port);
        }
        url.push_str(request_uri);
        if let Some(query) = get("QUERY_STRING").filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        tracing::debug!(%url, "built URL from server variables");
        Ok(Self::new(url))
    }

    /// Builds the request URL from the process environment, as set for CGI
    /// programs.
    ///
    /// Variables that are not valid Unicode are ignored.
    ///
    /// # Errors
    ///
    /// Fails if a required variable is missing. See
    /// [`from_server_vars`][`Self::from_server_vars`].
    pub fn from_cgi_env(ports: &SchemePorts) -> Result<Self, Error> {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::from_server_vars(&vars, ports)
    }
}
