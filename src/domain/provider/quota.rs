//! Cloud quota provider interface

use std::fmt::Debug;

use async_trait::async_trait;

use super::error::ProviderError;
use crate::domain::credentials::AwsCredentials;

/// Service code for Bedrock quotas in AWS Service Quotas
pub const BEDROCK_SERVICE_CODE: &str = "bedrock";

/// One observed quota value from the provider
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaObservation {
    /// The account's current applied value
    pub value: f64,
    /// The provider default, when reported alongside the applied value
    pub default_value: Option<f64>,
    pub adjustable: bool,
}

/// A quota discovered via listing, used for one-time code discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaListing {
    pub quota_code: String,
    pub quota_name: String,
}

/// External quota data source (AWS Service Quotas)
///
/// Implementations must normalize every failure into [`ProviderError`] and
/// fall back to the provider default value when the account carries no
/// explicit quota entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuotaProvider: Send + Sync + Debug {
    /// Current value for one quota code under the given credentials
    async fn get_quota_value(
        &self,
        credentials: &AwsCredentials,
        service_code: &str,
        quota_code: &str,
    ) -> Result<QuotaObservation, ProviderError>;

    /// All quotas the provider knows for a service code
    async fn list_quotas(
        &self,
        credentials: &AwsCredentials,
        service_code: &str,
    ) -> Result<Vec<QuotaListing>, ProviderError>;
}
