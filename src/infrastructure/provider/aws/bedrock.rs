//! AWS Bedrock connection tester

use async_trait::async_trait;
use aws_sdk_bedrock::Client;
use tracing::instrument;

use crate::domain::credentials::AwsCredentials;
use crate::domain::provider::{ConnectionReport, ConnectionTester, ProviderError};

use super::{normalize_sdk_error, sdk_config_for, DEFAULT_TIMEOUT_SECS};

/// Probes credentials by listing Bedrock foundation models
///
/// A successful listing proves the key pair is valid and Bedrock is
/// reachable in the account's region; the Claude model ids double as a
/// capability report.
#[derive(Debug)]
pub struct BedrockConnectionTester {
    timeout_secs: u64,
}

impl BedrockConnectionTester {
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BedrockConnectionTester {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionTester for BedrockConnectionTester {
    #[instrument(skip(self, credentials), fields(region = credentials.region()))]
    async fn test_connection(
        &self,
        credentials: &AwsCredentials,
    ) -> Result<ConnectionReport, ProviderError> {
        let config = sdk_config_for(credentials, credentials.region(), self.timeout_secs).await;
        let client = Client::new(&config);

        let output = client
            .list_foundation_models()
            .send()
            .await
            .map_err(normalize_sdk_error)?;

        let claude_model_ids: Vec<String> = output
            .model_summaries()
            .iter()
            .map(|summary| summary.model_id().to_string())
            .filter(|id| id.to_lowercase().contains("claude"))
            .collect();

        Ok(ConnectionReport {
            region: credentials.region().to_string(),
            claude_model_ids,
        })
    }
}
