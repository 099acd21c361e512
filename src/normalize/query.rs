//! Query rules.
//!
//! These rules rebuild a present query from its parameters, so the result
//! is form-encoded and a query left without parameters is removed.
//!
//! Parameters are text: a query whose escapes don't decode to UTF-8 is left
//! untouched rather than rebuilt with replacement characters.

use crate::component::{Parameters, Query, Value};
use crate::components::Components;
use crate::normalize::Rule;
use crate::percent_encoding;

/// Rebuilds the query after editing its parameters.
fn edit_parameters(components: &mut Components, f: impl FnOnce(&mut Parameters)) {
    let Some(query) = components.query().as_str() else {
        return;
    };
    if !percent_encoding::form_decodes_to_utf8(query) {
        tracing::debug!(query, "query is not UTF-8 once decoded, left as is");
        return;
    }
    let mut params = components.query().to_parameters();
    f(&mut params);
    components.set_query(Query::from_parameters(&params));
}

/// Keeps only the listed query parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripUnusedParametersRule {
    /// Parameters to keep.
    keep: Vec<String>,
}

impl StripUnusedParametersRule {
    /// Creates the rule with the names of the parameters to keep.
    #[must_use]
    pub fn new<I, S>(keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keep: keep.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for StripUnusedParametersRule {
    fn apply(&self, components: &mut Components) {
        edit_parameters(components, |params| params.filter(&self.keep));
    }
}

/// Removes parameters equal to their default value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripDefaultParametersRule {
    /// Default values.
    defaults: Parameters,
}

impl StripDefaultParametersRule {
    /// Creates the rule with the default values.
    #[inline]
    #[must_use]
    pub fn new(defaults: Parameters) -> Self {
        Self { defaults }
    }
}

impl Rule for StripDefaultParametersRule {
    fn apply(&self, components: &mut Components) {
        edit_parameters(components, |params| {
            params.retain(|key, value| self.defaults.get(key) != Some(&*value));
        });
    }
}

/// Sorts the query parameters by key, recursively.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortParametersRule;

impl Rule for SortParametersRule {
    fn apply(&self, components: &mut Components) {
        edit_parameters(components, Parameters::sort_recursive);
    }
}

impl From<&[(&str, &str)]> for StripDefaultParametersRule {
    fn from(defaults: &[(&str, &str)]) -> Self {
        Self::new(
            defaults
                .iter()
                .map(|&(key, value)| (key, Value::from(value)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::normalize::assert_idempotent;

    #[test]
    fn strip_unused() {
        assert_idempotent(
            &StripUnusedParametersRule::new(["a", "c"]),
            &[
                ("http://test.com/?a=1&b=2&c=3", "http://test.com/?a=1&c=3"),
                ("http://test.com/?b=2", "http://test.com/"),
                ("http://test.com/", "http://test.com/"),
                ("http://test.com/?c[]=1&c[]=2", "http://test.com/?c%5B0%5D=1&c%5B1%5D=2"),
            ],
        );
    }

    #[test]
    fn strip_defaults() {
        assert_idempotent(
            &StripDefaultParametersRule::from(&[("page", "1"), ("sort", "asc")][..]),
            &[
                ("http://test.com/?page=1&q=x", "http://test.com/?q=x"),
                ("http://test.com/?page=2&sort=asc", "http://test.com/?page=2"),
                ("http://test.com/?page=1&sort=asc", "http://test.com/"),
                ("http://test.com/?q=x", "http://test.com/?q=x"),
            ],
        );
    }

    #[test]
    fn sort() {
        assert_idempotent(
            &SortParametersRule,
            &[
                ("http://test.com/?c=3&a=1&b=2", "http://test.com/?a=1&b=2&c=3"),
                (
                    "http://test.com/?b[y]=1&b[x]=2&a=0",
                    "http://test.com/?a=0&b%5Bx%5D=2&b%5By%5D=1",
                ),
                ("http://test.com/?10=a&9=b", "http://test.com/?9=b&10=a"),
                ("http://test.com/?q=x+y", "http://test.com/?q=x+y"),
                ("http://test.com/", "http://test.com/"),
                ("http://test.com/?", "http://test.com/"),
                (
                    "http://test.com/?a[18446744073709551615]=x&a[]=y",
                    "http://test.com/?a%5B18446744073709551615%5D=x",
                ),
                ("http://test.com/?b=%E9&a=1", "http://test.com/?b=%E9&a=1"),
            ],
        );
    }
}
