//! Rule tables read from JSON configuration files.
//!
//! A configuration names a base table and a list of additional rules:
//!
//! ```json
//! {
//!   "base": "latex",
//!   "rules": [
//!     { "name": "forall", "pattern": "\\\\forall", "replacement": "for all" }
//!   ]
//! }
//! ```
//!
//! Additional rules run before the base table, in the order they are listed.

use std::{fs::read_to_string, path::Path};

use serde::Deserialize;

use crate::{error::Error, rule::RewriteRule, table::RuleTable};

/// Table the configured rules are combined with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTable {
    /// The built-in LaTeX to Lurch table
    #[default]
    Latex,
    /// No base table; only the configured rules are used
    None,
}

/// A single rule as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Name of the rule
    pub name: String,
    /// Regular expression to search for
    pub pattern: String,
    /// Replacement text; may refer to capture groups
    #[serde(default)]
    pub replacement: String,
}

/// Contents of a rule table configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTableConfig {
    /// Table appended after the configured rules
    #[serde(default)]
    pub base: BaseTable,
    /// Rules applied before the base table
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl RuleTableConfig {
    /// Deserialize a configuration from a JSON string.
    ///
    /// `filename` is only used for error messages.
    pub fn from_json(json: &str, filename: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::ConfigParsing {
            filename: filename.to_owned(),
            error,
        })
    }

    /// Load a configuration from the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let filename = path.as_ref().to_string_lossy().to_string();
        log::debug!("loading rule table from {filename}");

        let content = read_to_string(path.as_ref()).map_err(|error| Error::IoReading {
            error,
            filename: filename.clone(),
        })?;

        Self::from_json(&content, &filename)
    }

    /// Compile the configured rules and combine them with the base table.
    pub fn into_table(self) -> Result<RuleTable, Error> {
        let mut table = self
            .rules
            .iter()
            .map(|rule| RewriteRule::new(&rule.name, &rule.pattern, &rule.replacement))
            .collect::<Result<RuleTable, Error>>()?;

        if self.base == BaseTable::Latex {
            table.extend(RuleTable::latex());
        }

        log::debug!("rule table has {} rules", table.len());
        Ok(table)
    }
}
