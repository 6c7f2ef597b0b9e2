//! Connection testing interface

use std::fmt::Debug;

use async_trait::async_trait;

use super::error::ProviderError;
use crate::domain::credentials::AwsCredentials;

/// Result of probing a credential set against the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub region: String,
    /// Claude model ids visible to these credentials
    pub claude_model_ids: Vec<String>,
}

impl ConnectionReport {
    pub fn models_count(&self) -> usize {
        self.claude_model_ids.len()
    }
}

/// Probes whether a credential set can reach the provider at all,
/// used on account creation and by the health check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionTester: Send + Sync + Debug {
    async fn test_connection(
        &self,
        credentials: &AwsCredentials,
    ) -> Result<ConnectionReport, ProviderError>;
}
