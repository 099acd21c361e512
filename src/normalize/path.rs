//! Path rules.

use crate::component::Path;
use crate::components::Components;
use crate::config::DirectoryIndexes;
use crate::normalize::Rule;

/// Removes `.` and `..` segments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripDotSegmentsRule;

impl Rule for StripDotSegmentsRule {
    fn apply(&self, components: &mut Components) {
        let path = components.path().resolve(false);
        components.set_path(path);
    }
}

/// Collapses runs of `/` into one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripDuplicatedSlashesRule;

impl Rule for StripDuplicatedSlashesRule {
    fn apply(&self, components: &mut Components) {
        let path = components.path().as_str();
        if memchr::memmem::find(path.as_bytes(), b"//").is_none() {
            return;
        }
        let mut collapsed = String::with_capacity(path.len());
        let mut prev_slash = false;
        for c in path.chars() {
            let is_slash = c == '/';
            if !(is_slash && prev_slash) {
                collapsed.push(c);
            }
            prev_slash = is_slash;
        }
        components.set_path(Path::new(collapsed));
    }
}

/// Removes a trailing directory index file name, such as `index.html`.
///
/// The slash before the name is kept: `/a/index.html` becomes `/a/`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripDirectoryIndexRule {
    /// Directory index names.
    indexes: DirectoryIndexes,
}

impl StripDirectoryIndexRule {
    /// Creates the rule with the given index names.
    #[inline]
    #[must_use]
    pub fn new(indexes: DirectoryIndexes) -> Self {
        Self { indexes }
    }
}

impl Rule for StripDirectoryIndexRule {
    fn apply(&self, components: &mut Components) {
        let base = components.path().base();
        if base.is_empty() || !self.indexes.contains(base.as_str()) {
            return;
        }
        let path = components.path().as_str();
        let directory = Path::new(&path[..path.len() - base.as_str().len()]);
        components.set_path(directory);
    }
}

/// Makes the path end with `/`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AddTrailingRule;

impl Rule for AddTrailingRule {
    fn apply(&self, components: &mut Components) {
        let path = components.path().as_str();
        if !path.ends_with('/') {
            components.set_path(Path::new(format!("{path}/")));
        }
    }
}
