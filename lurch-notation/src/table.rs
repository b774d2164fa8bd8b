//! This module defines [RuleTable] and the built-in LaTeX to Lurch table.

use std::{borrow::Cow, fmt::Display};

use once_cell::sync::Lazy;
use regex::escape;

use crate::{
    error::Error,
    rule::RewriteRule,
    syntax::{latex, lurch},
};

/// The built-in LaTeX table, compiled on first use
static LATEX_TABLE: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::build_latex().expect("built-in LaTeX rules are valid"));

/// Rewrite LaTeX-flavoured mathematics into Lurch notation.
///
/// This is total: any input, including malformed brace nesting,
/// produces some output.
pub fn latex_to_lurch(input: &str) -> String {
    LATEX_TABLE.rewrite(input)
}

/// How often a single rule matched during a rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleApplication {
    /// Name of the rule
    pub rule: String,
    /// Number of matches at the moment the rule was applied
    pub matches: usize,
}

/// Result of [RuleTable::rewrite_with_report]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// The rewritten text
    pub output: String,
    /// Rules that matched, in table order
    pub applications: Vec<RuleApplication>,
}

impl RewriteReport {
    /// Total number of substitutions performed.
    pub fn substitutions(&self) -> usize {
        self.applications.iter().map(|app| app.matches).sum()
    }
}

/// Ordered list of [RewriteRule]s.
///
/// Rules are applied one after the other, each one acting on the
/// output of its predecessor, so the order matters.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    /// Create a table without any rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return the built-in LaTeX to Lurch table.
    pub fn latex() -> Self {
        LATEX_TABLE.clone()
    }

    fn build_latex() -> Result<Self, Error> {
        let opening = latex::OPENING_BRACKETS
            .iter()
            .map(|bracket| escape(&bracket.to_string()))
            .collect::<String>();
        let closing = latex::CLOSING_BRACKETS
            .iter()
            .map(|bracket| escape(&bracket.to_string()))
            .collect::<String>();
        let open_group = escape(&latex::OPEN_GROUP.to_string());
        let close_group = escape(&latex::CLOSE_GROUP.to_string());
        let unwrap_group = |name: &str, command: &str| {
            RewriteRule::new(
                name,
                &format!(
                    "{}{open_group}([^{close_group}]*){close_group}",
                    escape(command)
                ),
                " ${1} ",
            )
        };

        Ok(Self {
            rules: vec![
                RewriteRule::literal("implies", latex::RIGHTARROW, lurch::IMPLIES)?,
                RewriteRule::literal("iff", latex::LEFTRIGHTARROW, lurch::IFF)?,
                RewriteRule::literal("divides", latex::MID, lurch::DIVIDES)?,
                RewriteRule::literal("similar", latex::SIM, lurch::SIM)?,
                RewriteRule::literal("factorial", latex::FACTORIAL, lurch::FACTORIAL)?,
                RewriteRule::literal("lambda", latex::LAMBDA, lurch::LAMBDA)?,
                RewriteRule::literal(
                    "contradiction",
                    latex::CONTRADICTION,
                    lurch::CONTRADICTION,
                )?,
                RewriteRule::new(
                    "left-bracket",
                    &format!("{}([{opening}])", escape(latex::LEFT)),
                    "${1}",
                )?,
                RewriteRule::new(
                    "right-bracket",
                    &format!("{}([{closing}])", escape(latex::RIGHT)),
                    "${1}",
                )?,
                unwrap_group("mathrm", latex::MATHRM)?,
                unwrap_group("text", latex::TEXT)?,
                RewriteRule::new(
                    "braces",
                    &format!("[{open_group}{close_group}]"),
                    lurch::BLANK,
                )?,
                RewriteRule::literal("backslash", &latex::ESCAPE.to_string(), lurch::BLANK)?,
            ],
        })
    }

    /// Append a rule; it will run after all rules already in the table.
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Put all rules of `other` in front of the rules of this table, keeping their order.
    pub fn prepend(&mut self, other: RuleTable) {
        let mut rules = other.rules;
        rules.append(&mut self.rules);
        self.rules = rules;
    }

    /// Append all rules of `other`, keeping their order.
    pub fn extend(&mut self, other: RuleTable) {
        self.rules.extend(other.rules);
    }

    /// Number of rules in this table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether this table contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }

    /// Apply every rule of this table, in order, to `input`.
    pub fn rewrite(&self, input: &str) -> String {
        let mut current = input.to_owned();

        for rule in &self.rules {
            let next = match rule.apply(&current) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };

            if let Some(next) = next {
                log::trace!("rule `{}` rewrote {current:?} to {next:?}", rule.name());
                current = next;
            }
        }

        current
    }

    /// Like [RuleTable::rewrite], but also records which rules matched and how often.
    pub fn rewrite_with_report(&self, input: &str) -> RewriteReport {
        let mut output = input.to_owned();
        let mut applications = Vec::new();

        for rule in &self.rules {
            let matches = rule.count_matches(&output);
            if matches == 0 {
                continue;
            }

            output = rule.apply(&output).into_owned();
            applications.push(RuleApplication {
                rule: rule.name().to_owned(),
                matches,
            });
        }

        RewriteReport {
            output,
            applications,
        }
    }
}

impl FromIterator<RewriteRule> for RuleTable {
    fn from_iter<T: IntoIterator<Item = RewriteRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, rule) in self.rules.iter().enumerate() {
            writeln!(f, "{:>3}. {rule}", index + 1)?;
        }

        Ok(())
    }
}
