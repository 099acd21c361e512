//! Userinfo component.

use core::fmt;

use crate::percent_encoding;

/// Userinfo URI component: an optional username and password.
///
/// See <https://tools.ietf.org/html/rfc3986#section-3.2.1>.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UserInfo {
    /// Username.
    username: Option<String>,
    /// Password.
    password: Option<String>,
}

impl UserInfo {
    /// Creates a userinfo with a username and an optional password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: Some(username.into()),
            password,
        }
    }

    /// Parses the userinfo part of an authority, without the `@` delimiter.
    ///
    /// The username runs up to the first `:`, the password is the rest.
    /// `None` gives an empty userinfo.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::UserInfo;
    ///
    /// let info = UserInfo::parse(Some(":qwerty"));
    /// assert_eq!(info.username(), Some(""));
    /// assert_eq!(info.password(), Some("qwerty"));
    /// ```
    #[must_use]
    pub fn parse(s: Option<&str>) -> Self {
        let Some(s) = s else {
            return Self::default();
        };
        let mut parts = s.splitn(2, ':');
        Self {
            username: parts.next().map(str::to_owned),
            password: parts.next().map(str::to_owned),
        }
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns `true` if there is no username.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
    }

    /// Returns the encoded userinfo followed by `@`, or an empty string.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        if self.username.is_none() {
            return String::new();
        }
        format!("{self}@")
    }
}

impl fmt::Display for UserInfo {
    /// Writes `username[:password]`, form-encoded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(username) = &self.username else {
            return Ok(());
        };
        f.write_str(&percent_encoding::form_recode(username))?;
        if let Some(password) = &self.password {
            write!(f, ":{}", percent_encoding::form_recode(password))?;
        }
        Ok(())
    }
}
