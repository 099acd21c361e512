//! Authority rules.

use crate::component::{Host, Port};
use crate::components::Components;
use crate::config::SchemePorts;
use crate::normalize::Rule;

/// Removes leading `www.` labels from the host.
///
/// `www.www.test.com` becomes `test.com`. A host made only of `www.` labels
/// is left as is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripWwwRule;

impl Rule for StripWwwRule {
    fn apply(&self, components: &mut Components) {
        let host = components.host().as_str();
        let mut stripped = host;
        while let Some(rest) = strip_www(stripped) {
            if rest.is_empty() {
                break;
            }
            stripped = rest;
        }
        if stripped.len() != host.len() {
            let host = Host::new(stripped);
            components.set_host(host);
        }
    }
}

/// Strips a case-insensitive `www.` prefix.
fn strip_www(host: &str) -> Option<&str> {
    let prefix = host.get(..4)?;
    prefix.eq_ignore_ascii_case("www.").then(|| &host[4..])
}

/// Removes the port when it is the default port of the scheme.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripDefaultPortRule {
    /// Default ports.
    ports: SchemePorts,
}

impl StripDefaultPortRule {
    /// Creates the rule with the given default ports.
    #[inline]
    #[must_use]
    pub fn new(ports: SchemePorts) -> Self {
        Self { ports }
    }
}

impl Rule for StripDefaultPortRule {
    fn apply(&self, components: &mut Components) {
        let Some(port) = components.port().get() else {
            return;
        };
        if self.ports.is_scheme_port(components.scheme().as_str(), port) {
            components.set_port(Port::default());
        }
    }
}
