//! Runtime error types for the robot interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to parse errors or system errors).
//!
//! Errors raised by [`Interpreter::run`] halt execution; the history recorded up
//! to that point stays available for stepping.
//!
//! [`Interpreter::run`]: crate::interpreter::engine::Interpreter::run

use crate::parser::ast::SourceLocation;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// More primitives executed than the configured limit allows
    #[error("Step limit of {limit} exceeded at {location}")]
    StepLimitExceeded {
        limit: u64,
        location: SourceLocation,
    },

    /// Snapshot history limit exceeded
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History/snapshot navigation failed
    #[error("History operation failed: {message}")]
    HistoryOperationFailed { message: String },
}

impl RuntimeError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            RuntimeError::StepLimitExceeded { location, .. } => Some(location),
            RuntimeError::SnapshotLimitExceeded { .. } => None,
            RuntimeError::HistoryOperationFailed { .. } => None,
        }
    }
}
