//! This module defines all the errors that can occur while executing latex2lurch.

use thiserror::Error;

/// Error that occur during execution of the CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Some acid tests did not pass
    #[error("{failed} of {total} acid tests failed")]
    AcidFailures {
        /// Number of failed cases
        failed: usize,
        /// Number of cases that were run
        total: usize,
    },
    /// Error resulting from io operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Error originating from the notation library
    #[error(transparent)]
    NotationError(#[from] lurch_notation::error::Error),
}
