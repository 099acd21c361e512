//! Path component.

use core::fmt;

use crate::error::Error;
use crate::percent_encoding;

mod segments;

pub use self::segments::{Segment, SegmentsList};

/// Characters copied verbatim when the path is percent-encoded.
const PATH_DELIMITERS: &[char] = &['/', ';', '=', '@'];

/// Path URI component.
///
/// The raw value is kept as given and may be partially percent-encoded.
/// See <https://tools.ietf.org/html/rfc3986#section-3.3>.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Path(String);

impl Path {
    /// Creates a path.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the raw path.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the path is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path starts with `/`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Returns `true` if the path ends with `/`, `/.` or `/..`.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        match self.0.rfind('/') {
            Some(pos) => matches!(&self.0[pos..], "/" | "/." | "/.."),
            None => false,
        }
    }

    /// Returns the percent-encoded path.
    ///
    /// Runs of characters other than `/ ; = @` are decoded then encoded again,
    /// so an already encoded path is left as is. With an authority, a
    /// relative path gets a leading `/`.
    ///
    /// # Errors
    ///
    /// Fails when there is no authority and the path starts with `//`, since
    /// it would be read back as an authority.
    pub fn to_uri_string(&self, has_authority: bool) -> Result<String, Error> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        if !has_authority && self.0.starts_with("//") {
            return Err(Error::ambiguous_path(&self.0));
        }
        let encoded = percent_encoding::recode_runs(&self.0, PATH_DELIMITERS);
        if has_authority && !encoded.starts_with('/') {
            return Ok(format!("/{encoded}"));
        }
        Ok(encoded)
    }

    /// Returns the path segments.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> SegmentsList {
        SegmentsList::from_path(self)
    }

    /// Appends a subpath, joining both with exactly one `/`.
    ///
    /// Appending `""` or `"/"` does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Path;
    ///
    /// assert_eq!(Path::new("/abc/def/").append("/ghi").as_str(), "/abc/def/ghi");
    /// assert_eq!(Path::new("/abc/def").append("/").as_str(), "/abc/def");
    /// ```
    #[must_use]
    pub fn append(&self, sub: &str) -> Self {
        if sub.is_empty() || sub == "/" {
            return self.clone();
        }
        let left = self.0.strip_suffix('/').unwrap_or(&self.0);
        let right = sub.strip_prefix('/').unwrap_or(sub);
        Self(format!("{left}/{right}"))
    }

    /// Merges a reference path into this base path.
    ///
    /// See <https://tools.ietf.org/html/rfc3986#section-5.2.3>.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Path;
    ///
    /// let base = Path::new("/a/b/c");
    /// assert_eq!(base.merge(&Path::new("../d/")).as_str(), "/a/d/");
    /// assert_eq!(base.merge(&Path::new("/d")).as_str(), "/d");
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Path) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if other.is_absolute() {
            return other.resolve(false);
        }
        self.remove_base().append(&other.0).resolve(false)
    }

    /// Removes the last segment unless the path is a directory.
    #[must_use]
    pub fn remove_base(&self) -> Self {
        if self.0.is_empty() || self.0 == "/" || self.is_directory() {
            return self.clone();
        }
        match self.0.rfind('/') {
            Some(pos) => Self(self.0[..=pos].to_owned()),
            None => Self::default(),
        }
    }

    /// Removes dot segments.
    ///
    /// The leading `/` of an absolute path and the trailing `/` of a
    /// directory path are kept. Empty segments are dropped only if
    /// `remove_empty` is true.
    ///
    /// See <https://tools.ietf.org/html/rfc3986#section-5.2.4>.
    #[must_use]
    pub fn resolve(&self, remove_empty: bool) -> Self {
        let joined = self.segments().resolve(remove_empty).to_string();
        let mut resolved = if self.is_absolute() {
            format!("/{joined}")
        } else {
            joined
        };
        if resolved == "/" {
            return Self(resolved);
        }
        if self.is_directory() {
            resolved.push('/');
        }
        Self(resolved)
    }

    /// Goes up `levels` directories, returning a directory path.
    ///
    /// With `resolve`, dot segments are removed first.
    #[must_use]
    pub fn level_up(&self, levels: usize, resolve: bool, remove_empty: bool) -> Self {
        if levels == 0 {
            return self.clone();
        }
        let segments = self.segments().level_up(levels, resolve, remove_empty);
        let value = format!("{segments}/");
        if value != "/" && self.is_absolute() {
            return Self(format!("/{value}"));
        }
        Self(value)
    }

    /// Returns the last segment, ignoring one trailing `/`.
    #[must_use]
    pub fn last_segment(&self) -> Segment {
        let trimmed = self.0.strip_suffix('/').unwrap_or(&self.0);
        let start = trimmed.rfind('/').map_or(0, |pos| pos + 1);
        Segment::from_unchecked(&trimmed[start..])
    }

    /// Returns the text after the last `/`, unless it is a dot segment.
    #[must_use]
    pub fn base(&self) -> Self {
        let start = self.0.rfind('/').map_or(0, |pos| pos + 1);
        match &self.0[start..] {
            "." | ".." => Self::default(),
            base => Self(base.to_owned()),
        }
    }

    /// Returns the directory part: the path itself if it is a directory,
    /// else everything up to the last `/`.
    #[must_use]
    pub fn directory(&self) -> Self {
        if self.is_directory() {
            return self.clone();
        }
        match self.0.rfind('/') {
            Some(pos) => Self(self.0[..=pos].to_owned()),
            None => Self::default(),
        }
    }

    /// Returns the extension of the last segment.
    #[inline]
    #[must_use]
    pub fn extension(&self) -> String {
        self.last_segment().extension().to_owned()
    }

    /// Returns all the extensions of the last segment.
    #[must_use]
    pub fn all_extensions(&self) -> Vec<String> {
        self.last_segment()
            .all_extensions()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

impl fmt::Display for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Path {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
