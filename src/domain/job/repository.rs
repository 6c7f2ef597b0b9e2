//! Refresh job repository trait

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{JobStatus, JobType, RefreshJob, RefreshJobId};
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Persistence for refresh job records
///
/// The orchestrator owning a job is the sole writer of its status fields.
#[async_trait]
pub trait RefreshJobRepository: Send + Sync + Debug {
    async fn get(&self, id: &RefreshJobId) -> Result<Option<RefreshJob>, DomainError>;

    async fn create(&self, job: RefreshJob) -> Result<RefreshJob, DomainError>;

    async fn update(&self, job: &RefreshJob) -> Result<RefreshJob, DomainError>;

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<RefreshJob>, DomainError>;

    /// Most recent job of a given type targeting a specific account
    async fn latest_for_account(
        &self,
        account_id: &AccountId,
        job_type: JobType,
    ) -> Result<Option<RefreshJob>, DomainError>;

    /// Most recent job of a given type, regardless of target
    async fn latest_of_type(&self, job_type: JobType) -> Result<Option<RefreshJob>, DomainError>;

    /// Jobs created at or after the given instant
    async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<RefreshJob>, DomainError>;

    /// Delete jobs created before the given instant, returning the count
    async fn delete_older_than(&self, before: DateTime<Utc>) -> Result<u64, DomainError>;
}
