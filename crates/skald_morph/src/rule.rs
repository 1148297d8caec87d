//! Guarded regex rewrite rules.

use regex::Regex;
use skald_foundation::{Error, Result};

/// A single conditional text-rewrite step.
///
/// A rule carries three patterns: a guard that decides whether the rule
/// fires at all, a match pattern, and a replacement. When the guard matches
/// the current string, every occurrence of the match pattern is replaced.
/// Rules have no identity beyond the value of their three source strings.
///
/// Both regexes are compiled eagerly; a malformed pattern is a
/// configuration error reported at registration time, never during
/// derivation.
#[derive(Clone, Debug)]
pub struct RewriteRule {
    guard: Regex,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compiles a rule from its three source strings.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](skald_foundation::ErrorKind::InvalidPattern)
    /// if the guard or match pattern is not a valid regex.
    pub fn new(
        guard: impl AsRef<str>,
        pattern: impl AsRef<str>,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let guard = compile(guard.as_ref())?;
        let pattern = compile(pattern.as_ref())?;
        Ok(Self {
            guard,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Returns the guard pattern source text.
    #[must_use]
    pub fn guard(&self) -> &str {
        self.guard.as_str()
    }

    /// Returns the match pattern source text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns true if the guard matches the given string.
    #[must_use]
    pub fn fires_on(&self, input: &str) -> bool {
        self.guard.is_match(input)
    }

    /// Replaces every occurrence of the match pattern in `input`.
    ///
    /// The guard is not consulted here; callers check [`fires_on`] first.
    ///
    /// [`fires_on`]: RewriteRule::fires_on
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    /// Returns true if this rule's source strings equal the given triple.
    #[must_use]
    pub fn matches_spec(&self, guard: &str, pattern: &str, replacement: &str) -> bool {
        self.guard() == guard && self.pattern() == pattern && self.replacement == replacement
    }
}

impl PartialEq for RewriteRule {
    fn eq(&self, other: &Self) -> bool {
        self.matches_spec(other.guard(), other.pattern(), other.replacement())
    }
}

impl Eq for RewriteRule {}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e.to_string()))
}
