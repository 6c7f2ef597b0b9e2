//! AWS Service Quotas provider adapter

use async_trait::async_trait;
use aws_sdk_servicequotas::Client;
use tracing::{debug, instrument};

use crate::domain::credentials::AwsCredentials;
use crate::domain::provider::{ProviderError, QuotaListing, QuotaObservation, QuotaProvider};

use super::{normalize_sdk_error, sdk_config_for, DEFAULT_TIMEOUT_SECS};

/// Quota provider backed by the AWS Service Quotas API
///
/// Builds a short-lived client per call, scoped to the account's own
/// credentials and region.
#[derive(Debug)]
pub struct ServiceQuotasProvider {
    timeout_secs: u64,
}

impl ServiceQuotasProvider {
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    async fn client_for(&self, credentials: &AwsCredentials) -> Client {
        let config = sdk_config_for(credentials, credentials.region(), self.timeout_secs).await;
        Client::new(&config)
    }

    /// Provider default for a quota the account has no applied entry for.
    /// Defaults are never account-adjusted, so adjustable is false.
    async fn get_default_quota(
        &self,
        client: &Client,
        service_code: &str,
        quota_code: &str,
    ) -> Result<QuotaObservation, ProviderError> {
        let output = client
            .get_aws_default_service_quota()
            .service_code(service_code)
            .quota_code(quota_code)
            .send()
            .await
            .map_err(normalize_sdk_error)?;

        let quota = output
            .quota()
            .ok_or_else(|| ProviderError::Other("empty default quota response".to_string()))?;
        let value = quota.value().ok_or_else(|| {
            ProviderError::Other(format!("default quota '{}' carries no value", quota_code))
        })?;

        Ok(QuotaObservation {
            value,
            default_value: Some(value),
            adjustable: false,
        })
    }
}

impl Default for ServiceQuotasProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuotaProvider for ServiceQuotasProvider {
    #[instrument(skip(self, credentials), fields(region = credentials.region()))]
    async fn get_quota_value(
        &self,
        credentials: &AwsCredentials,
        service_code: &str,
        quota_code: &str,
    ) -> Result<QuotaObservation, ProviderError> {
        let client = self.client_for(credentials).await;

        let result = client
            .get_service_quota()
            .service_code(service_code)
            .quota_code(quota_code)
            .send()
            .await;

        match result {
            Ok(output) => {
                let quota = output
                    .quota()
                    .ok_or_else(|| ProviderError::Other("empty quota response".to_string()))?;
                let value = quota.value().ok_or_else(|| {
                    ProviderError::Other(format!("quota '{}' carries no value", quota_code))
                })?;

                Ok(QuotaObservation {
                    value,
                    default_value: None,
                    adjustable: quota.adjustable(),
                })
            }
            Err(err) => {
                let normalized = normalize_sdk_error(err);
                // Accounts with no applied entry report NoSuchResource; the
                // AWS default is the effective value in that case
                if matches!(normalized, ProviderError::NotFound(_)) {
                    debug!(quota_code, "no applied quota, falling back to AWS default");
                    self.get_default_quota(&client, service_code, quota_code)
                        .await
                } else {
                    Err(normalized)
                }
            }
        }
    }

    #[instrument(skip(self, credentials), fields(region = credentials.region()))]
    async fn list_quotas(
        &self,
        credentials: &AwsCredentials,
        service_code: &str,
    ) -> Result<Vec<QuotaListing>, ProviderError> {
        let client = self.client_for(credentials).await;

        let mut listings = Vec::new();
        let mut pages = client
            .list_service_quotas()
            .service_code(service_code)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(normalize_sdk_error)?;
            for quota in page.quotas() {
                listings.push(QuotaListing {
                    quota_code: quota.quota_code().unwrap_or_default().to_string(),
                    quota_name: quota.quota_name().unwrap_or_default().to_string(),
                });
            }
        }

        Ok(listings)
    }
}
