//! AWS Cost Explorer provider adapter

use async_trait::async_trait;
use aws_sdk_costexplorer::types::{
    DateInterval, Granularity, GroupDefinition, GroupDefinitionType,
};
use aws_sdk_costexplorer::Client;
use chrono::NaiveDate;
use tracing::instrument;

use crate::domain::cost::DateRange;
use crate::domain::credentials::AwsCredentials;
use crate::domain::provider::{CostProvider, DailyServiceCosts, ProviderError};

use super::{normalize_sdk_error, sdk_config_for, DEFAULT_TIMEOUT_SECS};

const UNBLENDED_COST: &str = "UnblendedCost";

/// Cost provider backed by the AWS Cost Explorer API
///
/// Cost Explorer is a global service served out of us-east-1, independent
/// of the account's home region.
#[derive(Debug)]
pub struct CostExplorerProvider {
    timeout_secs: u64,
}

impl CostExplorerProvider {
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
        let config = sdk_config_for(credentials, "us-east-1", self.timeout_secs).await;
        Client::new(&config)
    }

    fn parse_day(result: &aws_sdk_costexplorer::types::ResultByTime) -> Option<NaiveDate> {
        let start = result.time_period()?.start();
        NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()
    }
}

impl Default for CostExplorerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CostProvider for CostExplorerProvider {
    #[instrument(skip(self, credentials), fields(range = %range))]
    async fn get_cost_and_usage(
        &self,
        credentials: &AwsCredentials,
        range: &DateRange,
    ) -> Result<Vec<DailyServiceCosts>, ProviderError> {
        let client = self.client_for(credentials).await;

        // Cost Explorer treats the end date as exclusive
        let interval = DateInterval::builder()
            .start(range.start().format("%Y-%m-%d").to_string())
            .end(range.exclusive_end().format("%Y-%m-%d").to_string())
            .build()
            .map_err(|e| ProviderError::InvalidParameters(e.to_string()))?;

        let mut days = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = client
                .get_cost_and_usage()
                .time_period(interval.clone())
                .granularity(Granularity::Daily)
                .metrics(UNBLENDED_COST)
                .group_by(
                    GroupDefinition::builder()
                        .r#type(GroupDefinitionType::Dimension)
                        .key("SERVICE")
                        .build(),
                );
            if let Some(token) = &next_token {
                request = request.next_page_token(token);
            }

            let output = request.send().await.map_err(normalize_sdk_error)?;

            for result in output.results_by_time() {
                let Some(date) = Self::parse_day(result) else {
                    continue;
                };

                let mut per_service = Vec::new();
                for group in result.groups() {
                    let service = group
                        .keys()
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string());
                    let amount = group
                        .metrics()
                        .and_then(|m| m.get(UNBLENDED_COST))
                        .and_then(|v| v.amount())
                        .and_then(|a| a.parse::<f64>().ok())
                        .unwrap_or(0.0);
                    per_service.push((service, amount));
                }

                days.push(DailyServiceCosts { date, per_service });
            }

            match output.next_page_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(days)
    }
}
