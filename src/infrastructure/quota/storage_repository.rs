//! Storage-backed account quota repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::AccountId;
use crate::domain::catalog::QuotaCode;
use crate::domain::quota::{AccountQuota, AccountQuotaId, AccountQuotaRepository, SyncStatus};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of AccountQuotaRepository
#[derive(Debug)]
pub struct StorageAccountQuotaRepository {
    storage: Arc<dyn Storage<AccountQuota>>,
}

impl StorageAccountQuotaRepository {
    pub fn new(storage: Arc<dyn Storage<AccountQuota>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AccountQuotaRepository for StorageAccountQuotaRepository {
    async fn get(&self, id: &AccountQuotaId) -> Result<Option<AccountQuota>, DomainError> {
        self.storage.get(id).await
    }

    async fn ensure_exists(
        &self,
        account_id: &AccountId,
        quota_code: &QuotaCode,
    ) -> Result<AccountQuota, DomainError> {
        let id = AccountQuotaId::new(account_id, quota_code);
        if let Some(existing) = self.storage.get(&id).await? {
            return Ok(existing);
        }

        let fresh = AccountQuota::new(account_id.clone(), quota_code.clone());
        match self.storage.create(fresh).await {
            Ok(created) => Ok(created),
            // Lost a race against a concurrent ensure; the row exists now
            Err(DomainError::Conflict { .. }) => {
                self.storage.get(&id).await?.ok_or_else(|| {
                    DomainError::storage(format!("Quota row '{}' vanished after conflict", id))
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn update(&self, quota: &AccountQuota) -> Result<AccountQuota, DomainError> {
        if !self.storage.exists(quota.id()).await? {
            return Err(DomainError::not_found(format!(
                "Account quota '{}' not found",
                quota.id()
            )));
        }

        self.storage.update(quota.clone()).await
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountQuota>, DomainError> {
        let all = self.storage.list().await?;
        let mut rows: Vec<_> = all
            .into_iter()
            .filter(|q| q.account_id() == account_id)
            .collect();
        rows.sort_by(|a, b| a.quota_code().as_str().cmp(b.quota_code().as_str()));
        Ok(rows)
    }

    async fn list_failed(&self) -> Result<Vec<AccountQuota>, DomainError> {
        let all = self.storage.list().await?;
        Ok(all
            .into_iter()
            .filter(|q| q.sync_status == SyncStatus::Failed)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quota::tests;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageAccountQuotaRepository {
        let storage = Arc::new(InMemoryStorage::<AccountQuota>::new());
        StorageAccountQuotaRepository::new(storage)
    }

    #[tokio::test]
    async fn test_ensure_exists_is_idempotent() {
        let repo = create_repo();
        tests::test_ensure_exists_is_idempotent(&repo).await;
    }

    #[tokio::test]
    async fn test_list_for_account_is_code_ordered() {
        let repo = create_repo();
        tests::test_list_for_account_is_code_ordered(&repo).await;
    }

    #[tokio::test]
    async fn test_list_failed() {
        let repo = create_repo();
        tests::test_list_failed(&repo).await;
    }
}
