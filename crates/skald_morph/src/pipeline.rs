//! Ordered, conditional rewrite pipelines.

use crate::rule::RewriteRule;

/// An ordered sequence of [`RewriteRule`]s applied as a pipeline.
///
/// Derivation threads the base string through the rules in sequence order.
/// Each rule fires only if its guard matches the *current* (already
/// partially transformed) string; a rule that does not fire leaves the
/// string untouched. The empty pipeline is the identity function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    rules: Vec<RewriteRule>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the pipeline.
    ///
    /// Append is the only way to add rules; sequence order is part of the
    /// pipeline's meaning.
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Removes the first rule whose source strings equal the given triple.
    ///
    /// Returns true if a rule was removed.
    pub fn remove(&mut self, guard: &str, pattern: &str, replacement: &str) -> bool {
        let Some(index) = self
            .rules
            .iter()
            .position(|r| r.matches_spec(guard, pattern, replacement))
        else {
            return false;
        };
        self.rules.remove(index);
        true
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the pipeline has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }

    /// Derives the output string for `base`.
    ///
    /// Pure: repeated calls with the same base and the same rules yield
    /// identical output.
    #[must_use]
    pub fn derive(&self, base: &str) -> String {
        let mut current = base.to_owned();
        for rule in &self.rules {
            if rule.fires_on(&current) {
                current = rule.apply(&current);
            }
        }
        current
    }
}
