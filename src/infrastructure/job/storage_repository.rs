//! Storage-backed refresh job repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::account::AccountId;
use crate::domain::job::{
    JobStatus, JobTarget, JobType, RefreshJob, RefreshJobId, RefreshJobRepository,
};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of RefreshJobRepository
#[derive(Debug)]
pub struct StorageRefreshJobRepository {
    storage: Arc<dyn Storage<RefreshJob>>,
}

impl StorageRefreshJobRepository {
    pub fn new(storage: Arc<dyn Storage<RefreshJob>>) -> Self {
        Self { storage }
    }

    fn targets_account(job: &RefreshJob, account_id: &AccountId) -> bool {
        match job.target() {
            JobTarget::Account { account_id: id } => id == account_id,
            JobTarget::Batch { account_ids } => account_ids.contains(account_id),
            JobTarget::AllAccounts => false,
        }
    }

    fn latest(mut jobs: Vec<RefreshJob>) -> Option<RefreshJob> {
        jobs.sort_by_key(|j| j.created_at);
        jobs.pop()
    }
}

#[async_trait]
impl RefreshJobRepository for StorageRefreshJobRepository {
    async fn get(&self, id: &RefreshJobId) -> Result<Option<RefreshJob>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, job: RefreshJob) -> Result<RefreshJob, DomainError> {
        self.storage.create(job).await
    }

    async fn update(&self, job: &RefreshJob) -> Result<RefreshJob, DomainError> {
        if !self.storage.exists(job.id()).await? {
            return Err(DomainError::not_found(format!(
                "Refresh job '{}' not found",
                job.id()
            )));
        }

        self.storage.update(job.clone()).await
    }

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<RefreshJob>, DomainError> {
        let all = self.storage.list().await?;
        Ok(all.into_iter().filter(|j| j.status() == status).collect())
    }

    async fn latest_for_account(
        &self,
        account_id: &AccountId,
        job_type: JobType,
    ) -> Result<Option<RefreshJob>, DomainError> {
        let all = self.storage.list().await?;
        let matching: Vec<_> = all
            .into_iter()
            .filter(|j| j.job_type() == job_type && Self::targets_account(j, account_id))
            .collect();
        Ok(Self::latest(matching))
    }

    async fn latest_of_type(&self, job_type: JobType) -> Result<Option<RefreshJob>, DomainError> {
        let all = self.storage.list().await?;
        let matching: Vec<_> = all
            .into_iter()
            .filter(|j| j.job_type() == job_type)
            .collect();
        Ok(Self::latest(matching))
    }

    async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<RefreshJob>, DomainError> {
        let all = self.storage.list().await?;
        Ok(all.into_iter().filter(|j| j.created_at >= since).collect())
    }

    async fn delete_older_than(&self, before: DateTime<Utc>) -> Result<u64, DomainError> {
        let all = self.storage.list().await?;
        let mut deleted = 0u64;

        for job in all {
            if job.created_at < before && self.storage.delete(job.id()).await? {
                deleted += 1;
            }
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::tests;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageRefreshJobRepository {
        let storage = Arc::new(InMemoryStorage::<RefreshJob>::new());
        StorageRefreshJobRepository::new(storage)
    }

    #[tokio::test]
    async fn test_basic_crud() {
        let repo = create_repo();
        tests::test_basic_crud(&repo).await;
    }

    #[tokio::test]
    async fn test_latest_for_account() {
        let repo = create_repo();
        tests::test_latest_for_account(&repo).await;
    }

    #[tokio::test]
    async fn test_latest_of_type_sees_batch_jobs() {
        let repo = create_repo();
        tests::test_latest_of_type_sees_batch_jobs(&repo).await;
    }

    #[tokio::test]
    async fn test_delete_older_than() {
        let repo = create_repo();
        tests::test_delete_older_than(&repo).await;
    }
}
