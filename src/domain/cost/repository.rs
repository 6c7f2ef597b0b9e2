//! Cost persistence traits

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::entity::{CostSyncLog, CostSyncLogId, DailyCost};
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Persistence for daily cost facts
#[async_trait]
pub trait DailyCostRepository: Send + Sync + Debug {
    /// Insert or replace the fact for (account, date)
    async fn upsert(&self, cost: DailyCost) -> Result<DailyCost, DomainError>;

    /// Facts for one account within an inclusive date range, date ordered
    async fn list_for_account(
        &self,
        account_id: &AccountId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyCost>, DomainError>;

    /// Sum of costs for one account within an inclusive date range
    async fn total_for_account(
        &self,
        account_id: &AccountId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<f64, DomainError> {
        Ok(self
            .list_for_account(account_id, from, to)
            .await?
            .iter()
            .map(|c| c.cost_amount)
            .sum())
    }
}

/// Persistence for cost sync log records
#[async_trait]
pub trait CostSyncLogRepository: Send + Sync + Debug {
    async fn get(&self, id: &CostSyncLogId) -> Result<Option<CostSyncLog>, DomainError>;

    async fn create(&self, log: CostSyncLog) -> Result<CostSyncLog, DomainError>;

    async fn update(&self, log: &CostSyncLog) -> Result<CostSyncLog, DomainError>;

    /// Logs for one account, most recent first
    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<CostSyncLog>, DomainError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Conformance suite for DailyCostRepository implementations
    pub async fn test_upsert_replaces_same_day<R: DailyCostRepository>(repo: &R) {
        let account_id = AccountId::generate();
        let day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        repo.upsert(DailyCost::new(account_id.clone(), day, 10.0))
            .await
            .unwrap();
        repo.upsert(DailyCost::new(account_id.clone(), day, 12.5))
            .await
            .unwrap();

        let listed = repo.list_for_account(&account_id, day, day).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].cost_amount, 12.5);
    }

    pub async fn test_range_query_and_total<R: DailyCostRepository>(repo: &R) {
        let account_id = AccountId::generate();
        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        for offset in 0..5 {
            let day = start + chrono::Duration::days(offset);
            repo.upsert(DailyCost::new(account_id.clone(), day, 1.0 + offset as f64))
                .await
                .unwrap();
        }

        let middle = repo
            .list_for_account(
                &account_id,
                start + chrono::Duration::days(1),
                start + chrono::Duration::days(3),
            )
            .await
            .unwrap();
        assert_eq!(middle.len(), 3);
        assert!(middle.windows(2).all(|w| w[0].date < w[1].date));

        let total = repo
            .total_for_account(&account_id, start, start + chrono::Duration::days(4))
            .await
            .unwrap();
        assert_eq!(total, 1.0 + 2.0 + 3.0 + 4.0 + 5.0);
    }
}
