//! Path segments.

use core::fmt;

use crate::component::Path;
use crate::error::Error;

/// A single path segment, never containing `/`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    /// Creates a segment.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Domain`][`crate::ErrorKind::Domain`] if the
    /// string contains a `/`.
    pub fn new(segment: impl Into<String>) -> Result<Self, Error> {
        let segment = segment.into();
        if segment.contains('/') {
            return Err(Error::segment_with_slash(&segment));
        }
        Ok(Self(segment))
    }

    /// Creates a segment from a string known to have no `/`.
    #[inline]
    pub(crate) fn from_unchecked(segment: &str) -> Self {
        debug_assert!(!segment.contains('/'));
        Self(segment.to_owned())
    }

    /// Returns the segment.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the `.` and `..` segments.
    #[inline]
    #[must_use]
    pub fn is_dot_segment(&self) -> bool {
        self.0 == "." || self.0 == ".."
    }

    /// Returns the text after the last `.`.
    ///
    /// A segment whose only dot is its first character has no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Segment;
    ///
    /// assert_eq!(Segment::new("file.prv.ext")?.extension(), "ext");
    /// assert_eq!(Segment::new(".file.ext")?.extension(), "ext");
    /// assert_eq!(Segment::new(".ext")?.extension(), "");
    /// # Ok::<_, urlnorm::Error>(())
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) if pos > 0 => &self.0[pos + 1..],
            _ => "",
        }
    }

    /// Returns the dot-separated suffixes after the first dot that does not
    /// start the segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::Segment;
    ///
    /// assert_eq!(Segment::new("a.tar.gz")?.all_extensions(), ["tar", "gz"]);
    /// assert_eq!(Segment::new(".file.ext")?.all_extensions(), ["ext"]);
    /// assert!(Segment::new(".file")?.all_extensions().is_empty());
    /// # Ok::<_, urlnorm::Error>(())
    /// ```
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        let first_dot = self
            .0
            .char_indices()
            .skip(1)
            .find_map(|(pos, c)| (c == '.').then_some(pos));
        match first_dot {
            Some(pos) => self.0[pos + 1..].split('.').collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Segment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Segment {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of path segments.
///
/// The leading and trailing slashes of a path are not segments; interior
/// empty segments (from `//`) are.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SegmentsList(Vec<Segment>);

impl SegmentsList {
    /// Creates a list from strings.
    ///
    /// # Errors
    ///
    /// Fails if any string contains a `/`.
    pub fn new<I, S>(segments: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments
            .into_iter()
            .map(Segment::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Splits a path into segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Path, SegmentsList};
    ///
    /// let segments = SegmentsList::from_path(&Path::new("a/b/c/d//"));
    /// assert_eq!(segments.to_string(), "a/b/c/d/");
    /// assert_eq!(segments.len(), 5);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let s = path.as_str();
        match s {
            "" | "/" => Self::default(),
            "//" => Self(vec![Segment::default()]),
            _ => {
                let s = s.strip_prefix('/').unwrap_or(s);
                let s = s.strip_suffix('/').unwrap_or(s);
                Self(s.split('/').map(Segment::from_unchecked).collect())
            }
        }
    }

    /// Returns the segments.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    /// Removes dot segments.
    ///
    /// A `..` with nothing left to remove is dropped silently.
    #[must_use]
    pub fn resolve(&self, remove_empty: bool) -> Self {
        let mut resolved: Vec<Segment> = Vec::with_capacity(self.0.len());
        for segment in &self.0 {
            match segment.as_str() {
                "." => {}
                "" if remove_empty => {}
                ".." => {
                    resolved.pop();
                }
                _ => resolved.push(segment.clone()),
            }
        }
        Self(resolved)
    }

    /// Removes up to `levels` trailing segments, optionally resolving first.
    #[must_use]
    pub fn level_up(&self, levels: usize, resolve: bool, remove_empty: bool) -> Self {
        if levels == 0 {
            return self.clone();
        }
        let mut list = if resolve {
            self.resolve(remove_empty)
        } else {
            self.clone()
        };
        let keep = list.0.len().saturating_sub(levels);
        list.0.truncate(keep);
        list
    }
}

impl fmt::Display for SegmentsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("/")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SegmentsList {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn list(path: &str) -> SegmentsList {
        SegmentsList::from_path(&Path::new(path))
    }

    #[test]
    fn segment_with_slash() {
        let err = Segment::new("aa/bb/file.ext").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(SegmentsList::new(["a", "b/c"]).is_err());
    }

    #[test]
    fn from_path() {
        let cases: &[(&str, &[&str])] = &[
            ("", &[]),
            ("/", &[]),
            ("//", &[""]),
            ("/a", &["a"]),
            ("/a/b", &["a", "b"]),
            ("a/", &["a"]),
            ("a/b/", &["a", "b"]),
            ("a", &["a"]),
            ("a/b/c/d//", &["a", "b", "c", "d", ""]),
            ("//a/b/c/d//", &["", "a", "b", "c", "d", ""]),
        ];
        for &(path, expected) in cases {
            assert_eq!(list(path), SegmentsList::new(expected.iter().copied()).unwrap(), "path={path:?}");
        }
    }

    #[test]
    fn resolve() {
        let cases = &[
            ("/", ""),
            ("/a", "a"),
            ("/a/b/c/d/..", "a/b/c"),
            ("a/b/c/d/..", "a/b/c"),
            ("/a/b/c/d/../..", "a/b"),
            ("a/b/../d", "a/d"),
            ("./a/b/c/d", "a/b/c/d"),
            ("/a/b/./c/d", "a/b/c/d"),
            ("././a/b/../c/../d/./", "a/d"),
            ("/../../a", "a"),
        ];
        for &(path, expected) in cases {
            assert_eq!(list(path).resolve(false).to_string(), expected, "path={path:?}");
        }
        assert_eq!(list("/a//b").resolve(false).len(), 3);
        assert_eq!(list("/a//b").resolve(true).len(), 2);
    }

    #[test]
    fn level_up() {
        let cases = &[
            ("/a/b/c/d", 0, "a/b/c/d"),
            ("/a/b/", 3, ""),
            ("/a/b/c/d", 1, "a/b/c"),
            ("/a/b/c/d", 2, "a/b"),
            ("/a/b/c/d/..", 1, "a/b"),
            ("/a/b/c/d/../..", 1, "a"),
            ("/a/b/c/d/..", 2, "a"),
        ];
        for &(path, levels, expected) in cases {
            assert_eq!(list(path).level_up(levels, true, false).to_string(), expected);
        }
        assert_eq!(list("/a/b/..").level_up(1, false, false).to_string(), "a/b");
    }
}
