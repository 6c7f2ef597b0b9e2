//! Normalized provider error taxonomy

use thiserror::Error;

/// Failure categories for cloud quota/cost provider calls
///
/// Every SDK error is normalized into one of these at the fetch boundary;
/// raw provider exceptions never propagate past it. The messages are the
/// user-facing strings admins see per failed unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("AWS API rate limit exceeded - please try again later")]
    RateLimited,

    #[error("Quota not found: {0}")]
    NotFound(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid request parameters: {0}")]
    InvalidParameters(String),

    #[error("Cost data is not available for the requested time period")]
    DataUnavailable,

    #[error("Invalid pagination token - data may be incomplete")]
    InvalidToken,

    #[error("Provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// Whether the surrounding scheduler may retry this failure
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::Timeout(_) | Self::ServiceUnavailable(_)
        )
    }

    /// Whether the failure indicates broken credentials, i.e. the account's
    /// connection status should flip to error rather than just this quota
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
    }
}
