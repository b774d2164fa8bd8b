//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// The pattern of a rewrite rule is not a valid regular expression
    #[error("rule `{rule}` has an invalid pattern: {error}")]
    InvalidPattern {
        /// Name of the offending rule
        rule: String,
        /// Error reported by the regex compiler
        error: regex::Error,
    },
    /// Error while reading a file
    #[error("Failed to read \"{filename}\": {error}")]
    IoReading {
        /// Underlying IO error
        error: std::io::Error,
        /// Name of the file that could not be read
        filename: String,
    },
    /// Error during a Write operation
    #[error("Failed to write \"{filename}\": {error}")]
    IoWriting {
        /// Underlying IO error
        error: std::io::Error,
        /// Name of the file that could not be written
        filename: String,
    },
    /// A rule table configuration could not be deserialized
    #[error("unable to parse rule table `{filename}`: {error}")]
    ConfigParsing {
        /// Name of the configuration file
        filename: String,
        /// Error from json parsing
        error: serde_json::Error,
    },
    /// An acid test suite could not be deserialized
    #[error("unable to parse acid suite `{filename}`: {error}")]
    FixtureParsing {
        /// Name of the fixture file
        filename: String,
        /// Error from json parsing
        error: serde_json::Error,
    },
}
