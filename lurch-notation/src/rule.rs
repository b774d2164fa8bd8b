//! This module defines [RewriteRule].

use std::{borrow::Cow, fmt::Display};

use regex::Regex;

use crate::error::Error;

/// A named substitution that replaces every match of a pattern
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Name of the rule, used in reports and error messages
    name: String,
    /// Compiled pattern
    pattern: Regex,
    /// Replacement text; may refer to capture groups via `$1` or `${1}`
    replacement: String,
}

impl RewriteRule {
    /// Create a new [RewriteRule] by compiling `pattern`.
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self, Error> {
        let pattern = Regex::new(pattern).map_err(|error| Error::InvalidPattern {
            rule: name.to_owned(),
            error,
        })?;

        Ok(Self {
            name: name.to_owned(),
            pattern,
            replacement: replacement.to_owned(),
        })
    }

    /// Create a [RewriteRule] which matches `literal` verbatim.
    pub fn literal(name: &str, literal: &str, replacement: &str) -> Result<Self, Error> {
        Self::new(name, &regex::escape(literal), replacement)
    }

    /// Replace all non-overlapping matches in `input`, scanning from left to right.
    ///
    /// Returns the input unchanged (and borrowed) if the pattern does not match.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, self.replacement.as_str())
    }

    /// Number of non-overlapping matches in `input`.
    pub fn count_matches(&self, input: &str) -> usize {
        self.pattern.find_iter(input).count()
    }

    /// Return the name of this rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the source of the pattern of this rule.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Return the replacement text of this rule.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Display for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: /{}/ -> {:?}",
            self.name,
            self.pattern.as_str(),
            self.replacement
        )
    }
}
