/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a simulation request
///
/// Every variant is produced before the simulated clock starts; a run that passed
/// validation always completes.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process at position {index}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Arrival times must be >= 0, burst times > 0, and priorities must fit a 32-bit integer.")
    )]
    InvalidProcess { index: usize, reason: InlineString },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("Round Robin needs a positive quantum; every other policy must be run without one.")
    )]
    InvalidConfiguration(InlineString),
}

impl SchedulerError {
    /// Build an `InvalidProcess` error for the record at `index`
    #[cold]
    pub fn invalid_process(index: usize, reason: impl Into<InlineString>) -> Self {
        Self::InvalidProcess {
            index,
            reason: reason.into(),
        }
    }

    #[cold]
    pub fn invalid_configuration(reason: impl Into<InlineString>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
