//! Scheme rules.

use indexmap::IndexMap;

use crate::component::Scheme;
use crate::components::Components;
use crate::normalize::Rule;

/// Replaces schemes by lookup in a table.
///
/// Lookup is case-insensitive. The default table maps `http` to `https`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceSchemesRule {
    /// Replacements, keyed by lowercase scheme.
    replacements: IndexMap<String, String>,
}

impl ReplaceSchemesRule {
    /// Creates the rule with `(from, to)` scheme pairs.
    #[must_use]
    pub fn new<I, K, V>(replacements: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            replacements: replacements
                .into_iter()
                .map(|(from, to)| (from.into().to_ascii_lowercase(), to.into()))
                .collect(),
        }
    }
}

impl Default for ReplaceSchemesRule {
    #[inline]
    fn default() -> Self {
        Self::new([("http", "https")])
    }
}

impl Rule for ReplaceSchemesRule {
    fn apply(&self, components: &mut Components) {
        let scheme = components.scheme().as_str().to_ascii_lowercase();
        if let Some(replacement) = self.replacements.get(&scheme) {
            components.set_scheme(Scheme::new(replacement.as_str()));
        }
    }
}
