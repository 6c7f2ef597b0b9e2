//! Refresh job state machine errors

use std::fmt;

/// Errors raised by the refresh job state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// Invalid state transition
    InvalidStateTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Progress update was attempted outside the running state
    NotRunning(String),

    /// Job cannot be cancelled from its current state
    CannotCancel(String),
}

impl JobError {
    pub fn invalid_transition(from: &str, to: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }

    pub fn not_running(message: impl Into<String>) -> Self {
        Self::NotRunning(message.into())
    }

    pub fn cannot_cancel(reason: impl Into<String>) -> Self {
        Self::CannotCancel(reason.into())
    }
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStateTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid state transition from '{}' to '{}': {}",
                    from, to, reason
                )
            }
            Self::NotRunning(msg) => write!(f, "Job is not running: {}", msg),
            Self::CannotCancel(reason) => write!(f, "Cannot cancel job: {}", reason),
        }
    }
}

impl std::error::Error for JobError {}

impl From<JobError> for crate::domain::DomainError {
    fn from(err: JobError) -> Self {
        crate::domain::DomainError::conflict(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JobError::invalid_transition("completed", "running", "job is terminal");
        assert!(err.to_string().contains("Invalid state transition"));

        let err = JobError::not_running("progress update rejected");
        assert!(err.to_string().contains("not running"));

        let err = JobError::cannot_cancel("already completed");
        assert!(err.to_string().contains("Cannot cancel"));
    }
}
