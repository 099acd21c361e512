//! Fragment rules.

use crate::component::Fragment;
use crate::components::Components;
use crate::normalize::Rule;

/// Removes the fragment, including an empty one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripFragmentRule;

impl Rule for StripFragmentRule {
    fn apply(&self, components: &mut Components) {
        components.set_fragment(Fragment::absent());
    }
}
