//! Acid tests: fixtures checked against the output of a [RuleTable].
//!
//! A suite is a JSON document listing cases, each consisting of an
//! input and the text it is expected to be rewritten to.
//! Running a suite never touches any shared state; every run returns
//! its own list of [AcidOutcome]s.

use std::{fmt::Display, fs::read_to_string, path::Path};

use serde::Deserialize;

use crate::{error::Error, table::RuleTable};

/// A single acid test
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcidCase {
    /// Name of the case
    pub name: String,
    /// Text handed to the rewriter
    pub input: String,
    /// Text the rewriter should produce
    pub expected: String,
}

/// A named collection of [AcidCase]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcidSuite {
    /// Name of the suite
    #[serde(default)]
    pub name: String,
    /// Cases in the order they are run
    pub cases: Vec<AcidCase>,
}

/// How a single case turned out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Output matched the expectation
    Passed,
    /// Output differs from the expectation
    Mismatch {
        /// Expected output
        expected: String,
        /// Actual output
        actual: String,
    },
    /// Output matched, but rewriting it once more changed it
    NotIdempotent {
        /// Output of the first pass
        first: String,
        /// Output of the second pass
        second: String,
    },
}

/// Result of running a single [AcidCase]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcidOutcome {
    /// Name of the case
    pub case: String,
    /// What happened
    pub verdict: Verdict,
}

impl AcidOutcome {
    /// Whether the case passed.
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

impl Display for AcidOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.verdict {
            Verdict::Passed => write!(f, "{}", self.case),
            Verdict::Mismatch { expected, actual } => {
                write!(f, "{}: expected {expected:?}, got {actual:?}", self.case)
            }
            Verdict::NotIdempotent { first, second } => write!(
                f,
                "{}: second pass changed {first:?} into {second:?}",
                self.case
            ),
        }
    }
}

/// Counts over a list of [AcidOutcome]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcidSummary {
    /// Number of passed cases
    pub passed: usize,
    /// Number of failed cases
    pub failed: usize,
}

impl AcidSummary {
    /// Count the outcomes.
    pub fn from_outcomes(outcomes: &[AcidOutcome]) -> Self {
        let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();

        Self {
            passed,
            failed: outcomes.len() - passed,
        }
    }

    /// Total number of cases.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Whether no case failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Combine with the counts of another run.
    pub fn merge(self, other: AcidSummary) -> Self {
        Self {
            passed: self.passed + other.passed,
            failed: self.failed + other.failed,
        }
    }
}

impl AcidCase {
    /// Run this case against `table`.
    pub fn run(&self, table: &RuleTable) -> AcidOutcome {
        let first = table.rewrite(&self.input);

        let verdict = if first != self.expected {
            Verdict::Mismatch {
                expected: self.expected.clone(),
                actual: first,
            }
        } else {
            let second = table.rewrite(&first);
            if second == first {
                Verdict::Passed
            } else {
                Verdict::NotIdempotent { first, second }
            }
        };

        AcidOutcome {
            case: self.name.clone(),
            verdict,
        }
    }
}

impl AcidSuite {
    /// Deserialize a suite from a JSON string.
    ///
    /// `filename` is only used for error messages.
    pub fn from_json(json: &str, filename: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::FixtureParsing {
            filename: filename.to_owned(),
            error,
        })
    }

    /// Load a suite from the given path.
    ///
    /// Suites without a name are named after the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let filename = path.to_string_lossy().to_string();
        let content = read_to_string(path).map_err(|error| Error::IoReading {
            error,
            filename: filename.clone(),
        })?;

        let mut suite = Self::from_json(&content, &filename)?;
        if suite.name.is_empty() {
            suite.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or(filename);
        }

        Ok(suite)
    }

    /// Run every case against `table`, in order.
    pub fn run(&self, table: &RuleTable) -> Vec<AcidOutcome> {
        log::info!("running acid suite {} ({} cases)", self.name, self.cases.len());

        self.cases
            .iter()
            .map(|case| {
                let outcome = case.run(table);
                log::debug!("{}: {:?}", outcome.case, outcome.verdict);
                outcome
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use assert_fs::{prelude::*, TempDir};
    use test_log::test;

    use super::{AcidCase, AcidSuite, AcidSummary, Verdict};
    use crate::{error::Error, rule::RewriteRule, table::RuleTable};

    fn case(name: &str, input: &str, expected: &str) -> AcidCase {
        AcidCase {
            name: name.to_owned(),
            input: input.to_owned(),
            expected: expected.to_owned(),
        }
    }

    #[test]
    fn outcomes_follow_case_order() {
        let suite = AcidSuite {
            name: "basics".to_owned(),
            cases: vec![
                case("implication", r"A \Rightarrow B", "A implies B"),
                case("wrong", r"A \Leftrightarrow B", "A implies B"),
                case("factorial", "5!", "5 factorial"),
            ],
        };
        let outcomes = suite.run(&RuleTable::latex());

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].case, "implication");
        assert!(outcomes[0].passed());
        assert_eq!(
            outcomes[1].verdict,
            Verdict::Mismatch {
                expected: "A implies B".to_owned(),
                actual: "A iff B".to_owned(),
            }
        );
        assert!(outcomes[2].passed());

        let summary = AcidSummary::from_outcomes(&outcomes);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
    }

    #[test]
    fn detects_non_idempotent_tables() {
        let table = [RewriteRule::literal("double", "a", "aa").unwrap()]
            .into_iter()
            .collect::<RuleTable>();
        let outcome = case("grow", "a", "aa").run(&table);

        assert_eq!(
            outcome.verdict,
            Verdict::NotIdempotent {
                first: "aa".to_owned(),
                second: "aaaa".to_owned(),
            }
        );
        assert!(!outcome.passed());
    }

    #[test]
    fn load_names_suite_after_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("brackets.json");
        file.write_str(
            r#"{ "cases": [ { "name": "parens", "input": "\\left(x\\right)", "expected": "(x)" } ] }"#,
        )
        .unwrap();

        let suite = AcidSuite::load(file.path()).unwrap();

        assert_eq!(suite.name, "brackets");
        assert_eq!(suite.cases, vec![case("parens", r"\left(x\right)", "(x)")]);
        assert!(AcidSummary::from_outcomes(&suite.run(&RuleTable::latex())).all_passed());
    }

    #[test]
    fn bundled_suite_passes() {
        let suite = AcidSuite::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../resources/acid/notation.json"
        ))
        .unwrap();
        let outcomes = suite.run(&RuleTable::latex());

        assert_eq!(suite.name, "notation");
        assert!(
            outcomes.iter().all(|outcome| outcome.passed()),
            "{outcomes:?}"
        );
    }

    #[test]
    fn malformed_suite() {
        let result = AcidSuite::from_json(r#"{ "cases": [ { "name": "x" } ] }"#, "x.json");

        assert!(matches!(result, Err(Error::FixtureParsing { .. })));
    }

    #[test]
    fn summaries_merge() {
        let left = AcidSummary {
            passed: 2,
            failed: 1,
        };
        let right = AcidSummary {
            passed: 3,
            failed: 0,
        };

        assert_eq!(
            left.merge(right),
            AcidSummary {
                passed: 5,
                failed: 1
            }
        );
    }
}
