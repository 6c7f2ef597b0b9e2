//! Cloud cost provider interface

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::ProviderError;
use crate::domain::cost::DateRange;
use crate::domain::credentials::AwsCredentials;

/// Costs for one day, broken down per service
#[derive(Debug, Clone, PartialEq)]
pub struct DailyServiceCosts {
    pub date: NaiveDate,
    /// (service name, unblended cost amount) pairs
    pub per_service: Vec<(String, f64)>,
}

impl DailyServiceCosts {
    /// Total across all services for the day
    pub fn total(&self) -> f64 {
        self.per_service.iter().map(|(_, amount)| amount).sum()
    }
}

/// External cost data source (AWS Cost Explorer), daily granularity
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostProvider: Send + Sync + Debug {
    /// Daily cost-and-usage for the range, grouped by service
    async fn get_cost_and_usage(
        &self,
        credentials: &AwsCredentials,
        range: &DateRange,
    ) -> Result<Vec<DailyServiceCosts>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_total_sums_services() {
        let day = DailyServiceCosts {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            per_service: vec![
                ("Amazon Bedrock".to_string(), 10.5),
                ("AWS Lambda".to_string(), 0.25),
                ("Amazon S3".to_string(), 1.25),
            ],
        };
        assert_eq!(day.total(), 12.0);
    }

    #[test]
    fn test_empty_day_totals_zero() {
        let day = DailyServiceCosts {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            per_service: vec![],
        };
        assert_eq!(day.total(), 0.0);
    }
}
