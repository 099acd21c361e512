//! Normalization.
//!
//! A [`Rule`] edits [`Components`] in place; [`Rules`] runs a fixed sequence
//! of rules over a URL, parsing it once and serializing it once. Every
//! builtin rule is idempotent: applying it twice gives the same result as
//! applying it once.
//!
//! Rule order matters. For example, stripping dot segments before collapsing
//! duplicated slashes can give a different path than the reverse order.
//!
//! # Examples
//!
//! ```
//! use urlnorm::normalize::{Rules, StripFragmentRule};
//! use urlnorm::Url;
//!
//! let url = Url::new("http://www.test.com:80/a//b/c/../index.php#label");
//! assert_eq!(Rules::basic().apply(&url)?.as_str(), "http://test.com/a/b/#label");
//! assert_eq!(
//!     Rules::basic_and([StripFragmentRule]).apply(&url)?.as_str(),
//!     "http://test.com/a/b/"
//! );
//! # Ok::<_, urlnorm::Error>(())
//! ```
//!
//! Closures are rules too:
//!
//! ```
//! use urlnorm::component::Scheme;
//! use urlnorm::normalize::Rules;
//! use urlnorm::{Components, Url};
//!
//! let rules = Rules::safe().then(|c: &mut Components| c.set_scheme(Scheme::new("https")));
//! assert_eq!(rules.apply(&Url::new("http://a.com:80/"))?.as_str(), "https://a.com/");
//! # Ok::<_, urlnorm::Error>(())
//! ```

mod authority;
mod fragment;
mod path;
mod query;
mod scheme;

use core::fmt;
use std::sync::Arc;

use crate::components::Components;
use crate::config::Config;
use crate::error::Error;
use crate::url::Url;

pub use self::authority::{StripDefaultPortRule, StripWwwRule};
pub use self::fragment::StripFragmentRule;
pub use self::path::{
    AddTrailingRule, StripDirectoryIndexRule, StripDotSegmentsRule, StripDuplicatedSlashesRule,
};
pub use self::query::{SortParametersRule, StripDefaultParametersRule, StripUnusedParametersRule};
pub use self::scheme::ReplaceSchemesRule;

/// A normalization rule.
pub trait Rule: Send + Sync {
    /// Edits the components.
    fn apply(&self, components: &mut Components);
}

impl<F> Rule for F
where
    F: Fn(&mut Components) + Send + Sync,
{
    #[inline]
    fn apply(&self, components: &mut Components) {
        self(components)
    }
}

/// An ordered list of rules.
#[derive(Clone, Default)]
pub struct Rules(Vec<Arc<dyn Rule>>);

impl Rules {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rules that keep URLs equivalent under RFC 3986 semantics,
    /// with the builtin configuration.
    #[inline]
    #[must_use]
    pub fn safe() -> Self {
        Self::safe_with(&Config::builtin())
    }

    /// Returns the safe rules using the given configuration.
    #[must_use]
    pub fn safe_with(config: &Config) -> Self {
        Self::new().then(StripDefaultPortRule::new(config.scheme_ports().clone()))
    }

    /// Returns the safe rules followed by `rules`.
    #[must_use]
    pub fn safe_and<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Rule + 'static,
    {
        Self::safe().extend_with(rules)
    }

    /// Returns the basic rules, with the builtin configuration.
    ///
    /// These usually, but not always, keep URLs equivalent.
    #[inline]
    #[must_use]
    pub fn basic() -> Self {
        Self::basic_with(&Config::builtin())
    }

    /// Returns the basic rules using the given configuration.
    #[must_use]
    pub fn basic_with(config: &Config) -> Self {
        Self::new()
            .then(StripDefaultPortRule::new(config.scheme_ports().clone()))
            .then(StripDirectoryIndexRule::new(
                config.directory_indexes().clone(),
            ))
            .then(StripDotSegmentsRule)
            .then(StripDuplicatedSlashesRule)
            .then(StripWwwRule)
            .then(SortParametersRule)
            .then(AddTrailingRule)
    }

    /// Returns the basic rules followed by `rules`.
    #[must_use]
    pub fn basic_and<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Rule + 'static,
    {
        Self::basic().extend_with(rules)
    }

    /// Returns the list with `rule` appended.
    #[must_use]
    pub fn then(mut self, rule: impl Rule + 'static) -> Self {
        self.0.push(Arc::new(rule));
        self
    }

    /// Returns the list with every rule of `rules` appended.
    #[must_use]
    pub fn extend_with<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Rule + 'static,
    {
        self.0
            .extend(rules.into_iter().map(|rule| Arc::new(rule) as Arc<dyn Rule>));
        self
    }

    /// Returns the number of rules.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no rules.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies every rule in order to the components.
    pub fn apply_to(&self, components: &mut Components) {
        for (index, rule) in self.0.iter().enumerate() {
            rule.apply(components);
            tracing::trace!(index, ?components, "rule applied");
        }
    }

    /// Normalizes the URL.
    ///
    /// # Errors
    ///
    /// Fails if the normalized components can't be serialized, for example
    /// when a rule leaves a path starting with `//` and no authority.
    pub fn apply(&self, url: &Url) -> Result<Url, Error> {
        let mut components = url.parse().to_components();
        self.apply_to(&mut components);
        components.to_uri_string().map(Url::new)
    }
}

impl Rule for Rules {
    #[inline]
    fn apply(&self, components: &mut Components) {
        self.apply_to(components);
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.0.len()).finish()
    }
}

/// Applies the rule to the parsed URL and serializes the result.
#[cfg(test)]
fn apply_rule(rule: &impl Rule, url: &str) -> String {
    let mut components = Url::new(url).parse().to_components();
    rule.apply(&mut components);
    components
        .to_uri_string()
        .expect("rule output should serialize")
}

/// Checks the output of the rule for each case, and that applying the rule
/// again to the output changes nothing.
#[cfg(test)]
fn assert_idempotent(rule: &impl Rule, cases: &[(&str, &str)]) {
    for &(input, expected) in cases {
        let once = apply_rule(rule, input);
        assert_eq!(once, expected, "input={input:?}");
        assert_eq!(apply_rule(rule, &once), once, "input={input:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::component::Host;

    fn apply(rules: &Rules, url: &str) -> String {
        rules.apply(&Url::new(url)).unwrap().into_string()
    }

    #[test]
    fn custom_list() {
        let rules = Rules::new().then(StripWwwRule).then(AddTrailingRule);
        assert_eq!(apply(&rules, "http://www.test.com/path"), "http://test.com/path/");
    }

    #[test]
    fn safe() {
        assert_eq!(Rules::safe().len(), 1);
        assert_eq!(apply(&Rules::safe(), "http://www.test.com:80/path"), "http://www.test.com/path");
        assert_eq!(
            apply(&Rules::safe_and([StripWwwRule]), "http://www.test.com:80/path"),
            "http://test.com/path"
        );
    }

    #[test]
    fn basic() {
        assert_eq!(Rules::basic().len(), 7);
        assert_eq!(
            apply(&Rules::basic(), "http://www.test.com:80/a//b/c/../index.php"),
            "http://test.com/a/b/"
        );
        assert_eq!(
            apply(
                &Rules::basic_and([StripFragmentRule]),
                "http://www.test.com:80/a//b/c/../index.php#label"
            ),
            "http://test.com/a/b/"
        );
    }

    #[test]
    fn explicit_config() {
        let config = Config::builtin().with_scheme_ports([("http", 8080)].into_iter().collect());
        assert_eq!(
            apply(&Rules::safe_with(&config), "http://a.com:8080/x"),
            "http://a.com/x"
        );
        assert_eq!(
            apply(&Rules::safe_with(&config), "http://a.com:80/x"),
            "http://a.com:80/x"
        );
    }

    #[test]
    fn closures_and_nesting() {
        let inner = Rules::new().then(|c: &mut Components| c.set_host(Host::new("b.com")));
        let rules = Rules::safe().then(inner).then(StripFragmentRule);
        assert_eq!(rules.len(), 3);
        assert_eq!(apply(&rules, "http://a.com:80/#x"), "http://b.com/");
    }

    #[test]
    fn non_utf8_escapes_are_kept() {
        let url = "http://a.com/caf%E9?q=%E9#%E9";
        assert_eq!(apply(&Rules::safe(), url), url);
        assert_eq!(apply(&Rules::new(), "http://a.com/caf%e9"), "http://a.com/caf%E9");
    }

    #[test]
    fn empty_list_reserializes() {
        assert_eq!(apply(&Rules::new(), "HTTP://A.com/a b"), "http://a.com/a%20b");
    }
}
