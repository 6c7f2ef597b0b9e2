//! Storage-backed cost repository implementations

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::account::AccountId;
use crate::domain::cost::{
    CostSyncLog, CostSyncLogId, CostSyncLogRepository, DailyCost, DailyCostRepository,
};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of DailyCostRepository
#[derive(Debug)]
pub struct StorageDailyCostRepository {
    storage: Arc<dyn Storage<DailyCost>>,
}

impl StorageDailyCostRepository {
    pub fn new(storage: Arc<dyn Storage<DailyCost>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl DailyCostRepository for StorageDailyCostRepository {
    async fn upsert(&self, cost: DailyCost) -> Result<DailyCost, DomainError> {
        self.storage.upsert(cost).await
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyCost>, DomainError> {
        let all = self.storage.list().await?;
        let mut rows: Vec<_> = all
            .into_iter()
            .filter(|c| c.account_id() == account_id && c.date >= from && c.date <= to)
            .collect();
        rows.sort_by_key(|c| c.date);
        Ok(rows)
    }
}

/// Storage-backed implementation of CostSyncLogRepository
#[derive(Debug)]
pub struct StorageCostSyncLogRepository {
    storage: Arc<dyn Storage<CostSyncLog>>,
}

impl StorageCostSyncLogRepository {
    pub fn new(storage: Arc<dyn Storage<CostSyncLog>>) -> Self {
        Self { storage }
    }

    /// Batch-level logs (no account id), newest first
    pub async fn list_batch(&self) -> Result<Vec<CostSyncLog>, DomainError> {
        let all = self.storage.list().await?;
        let mut rows: Vec<_> = all.into_iter().filter(|l| l.account_id.is_none()).collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[async_trait]
impl CostSyncLogRepository for StorageCostSyncLogRepository {
    async fn get(&self, id: &CostSyncLogId) -> Result<Option<CostSyncLog>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, log: CostSyncLog) -> Result<CostSyncLog, DomainError> {
        self.storage.create(log).await
    }

    async fn update(&self, log: &CostSyncLog) -> Result<CostSyncLog, DomainError> {
        if !self.storage.exists(log.id()).await? {
            return Err(DomainError::not_found(format!(
                "Cost sync log '{}' not found",
                log.id()
            )));
        }

        self.storage.update(log.clone()).await
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<CostSyncLog>, DomainError> {
        let all = self.storage.list().await?;
        let mut rows: Vec<_> = all
            .into_iter()
            .filter(|l| l.account_id.as_ref() == Some(account_id))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost::tests;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_cost_repo() -> StorageDailyCostRepository {
        let storage = Arc::new(InMemoryStorage::<DailyCost>::new());
        StorageDailyCostRepository::new(storage)
    }

    fn create_log_repo() -> StorageCostSyncLogRepository {
        let storage = Arc::new(InMemoryStorage::<CostSyncLog>::new());
        StorageCostSyncLogRepository::new(storage)
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_day() {
        let repo = create_cost_repo();
        tests::test_upsert_replaces_same_day(&repo).await;
    }

    #[tokio::test]
    async fn test_range_query_and_total() {
        let repo = create_cost_repo();
        tests::test_range_query_and_total(&repo).await;
    }

    #[tokio::test]
    async fn test_log_lifecycle_roundtrip() {
        let repo = create_log_repo();
        let account_id = AccountId::generate();

        let log = CostSyncLog::single_account(account_id.clone());
        let id = log.id().clone();
        repo.create(log).await.unwrap();

        let mut fetched = repo.get(&id).await.unwrap().unwrap();
        fetched.mark_running();
        fetched.mark_completed(14);
        repo.update(&fetched).await.unwrap();

        let listed = repo.list_for_account(&account_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].synced_days_count, 14);
    }

    #[tokio::test]
    async fn test_batch_logs_not_listed_per_account() {
        let repo = create_log_repo();
        let account_id = AccountId::generate();

        repo.create(CostSyncLog::batch()).await.unwrap();
        repo.create(CostSyncLog::single_account(account_id.clone()))
            .await
            .unwrap();

        let listed = repo.list_for_account(&account_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].account_id.is_some());
    }
}
