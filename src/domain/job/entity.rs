//! Refresh job entities and state machine

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::JobError;
use crate::domain::account::AccountId;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Regex pattern for valid refresh job IDs: job-{uuid}
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^job-[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").unwrap()
});

/// Validated refresh job identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RefreshJobId(String);

impl RefreshJobId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if !ID_PATTERN.is_match(&id) {
            return Err(DomainError::invalid_id(format!(
                "Invalid refresh job ID '{}': must be in format job-{{uuid}}",
                id
            )));
        }
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(format!("job-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RefreshJobId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RefreshJobId> for String {
    fn from(id: RefreshJobId) -> Self {
        id.0
    }
}

impl fmt::Display for RefreshJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for RefreshJobId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// How the refresh was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Manual,
    Automatic,
    Scheduled,
    BulkRefresh,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Automatic => write!(f, "automatic"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::BulkRefresh => write!(f, "bulk_refresh"),
        }
    }
}

/// What the job refreshes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobTarget {
    /// One specific account
    Account { account_id: AccountId },
    /// An explicit set of accounts
    Batch { account_ids: Vec<AccountId> },
    /// Every active account at execution time
    AllAccounts,
}

impl JobTarget {
    pub fn account(account_id: AccountId) -> Self {
        Self::Account { account_id }
    }

    pub fn batch(account_ids: Vec<AccountId>) -> Self {
        Self::Batch { account_ids }
    }

    pub fn is_batch(&self) -> bool {
        !matches!(self, Self::Account { .. })
    }
}

/// Refresh job lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    PartiallyCompleted,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Cancelled | Self::PartiallyCompleted
        )
    }

    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        match (self, target) {
            (Self::Pending, Self::Running) => true,
            (Self::Pending, Self::Cancelled) => true,
            // A job can abort before it ever starts running
            (Self::Pending, Self::Failed) => true,

            (Self::Running, Self::Completed) => true,
            (Self::Running, Self::PartiallyCompleted) => true,
            (Self::Running, Self::Failed) => true,
            (Self::Running, Self::Cancelled) => true,

            // Terminal states are immutable
            _ => false,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::PartiallyCompleted => write!(f, "partially_completed"),
        }
    }
}

/// Per-unit failure detail inside a batch job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUnitError {
    pub account_id: AccountId,
    pub account_name: String,
    pub error: String,
}

/// Orchestration record tracking one refresh operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshJob {
    id: RefreshJobId,
    job_type: JobType,
    target: JobTarget,
    status: JobStatus,
    /// Accounts the job covers; fixed at start for batch jobs
    pub total_accounts: u32,
    processed_accounts: u32,
    /// Percentage 0-100, monotone while running
    progress: f64,
    pub successful_accounts: u32,
    pub failed_accounts: u32,
    pub unit_errors: Vec<JobUnitError>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl RefreshJob {
    /// New pending job for a single account
    pub fn single(account_id: AccountId, job_type: JobType) -> Self {
        Self::new(JobTarget::account(account_id), job_type, 1)
    }

    /// New pending batch job
    pub fn batch(target: JobTarget, job_type: JobType, total_accounts: u32) -> Self {
        Self::new(target, job_type, total_accounts)
    }

    fn new(target: JobTarget, job_type: JobType, total_accounts: u32) -> Self {
        Self {
            id: RefreshJobId::generate(),
            job_type,
            target,
            status: JobStatus::Pending,
            total_accounts,
            processed_accounts: 0,
            progress: 0.0,
            successful_accounts: 0,
            failed_accounts: 0,
            unit_errors: Vec::new(),
            error_message: None,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &RefreshJobId {
        &self.id
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn target(&self) -> &JobTarget {
        &self.target
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn processed_accounts(&self) -> u32 {
        self.processed_accounts
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status, JobStatus::Pending | JobStatus::Running)
    }

    /// Seconds between start and completion (or now, while running)
    pub fn duration_secs(&self) -> Option<f64> {
        let started = self.started_at?;
        let end = self.completed_at.unwrap_or_else(Utc::now);
        Some((end - started).num_milliseconds() as f64 / 1000.0)
    }

    // Transitions

    /// Pending -> Running
    pub fn start(&mut self) -> Result<(), JobError> {
        if !self.status.can_transition_to(JobStatus::Running) {
            return Err(JobError::invalid_transition(
                &self.status.to_string(),
                "running",
                "job is not pending",
            ));
        }
        self.status = JobStatus::Running;
        self.started_at = Some(Utc::now());
        Ok(())
    }

    /// Record that `processed` accounts have completed; only legal while
    /// running, and the resulting percentage never decreases
    pub fn update_progress(&mut self, processed: u32) -> Result<(), JobError> {
        if self.status != JobStatus::Running {
            return Err(JobError::not_running(format!(
                "cannot update progress in state '{}'",
                self.status
            )));
        }

        self.processed_accounts = processed.min(self.total_accounts);
        let pct = if self.total_accounts == 0 {
            100.0
        } else {
            (f64::from(self.processed_accounts) / f64::from(self.total_accounts) * 100.0).min(100.0)
        };
        if pct > self.progress {
            self.progress = pct;
        }
        Ok(())
    }

    /// Running -> Completed (no failures) or PartiallyCompleted (some failed)
    pub fn complete(&mut self, success_count: u32, failure_count: u32) -> Result<(), JobError> {
        let target_status = if failure_count == 0 {
            JobStatus::Completed
        } else {
            JobStatus::PartiallyCompleted
        };

        if !self.status.can_transition_to(target_status) {
            return Err(JobError::invalid_transition(
                &self.status.to_string(),
                &target_status.to_string(),
                "job is not running",
            ));
        }

        self.status = target_status;
        self.successful_accounts = success_count;
        self.failed_accounts = failure_count;
        self.progress = 100.0;
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Any non-terminal state -> Failed; for whole-job aborts, not
    /// individual account failures
    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), JobError> {
        if !self.status.can_transition_to(JobStatus::Failed) {
            return Err(JobError::invalid_transition(
                &self.status.to_string(),
                "failed",
                "job is already terminal",
            ));
        }
        self.status = JobStatus::Failed;
        self.error_message = Some(error.into());
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Pending/Running -> Cancelled
    pub fn cancel(&mut self) -> Result<(), JobError> {
        if !self.can_cancel() {
            return Err(JobError::cannot_cancel(format!(
                "job in '{}' state cannot be cancelled",
                self.status
            )));
        }
        self.status = JobStatus::Cancelled;
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Record one account failure inside a batch without failing the job
    pub fn record_unit_error(
        &mut self,
        account_id: AccountId,
        account_name: impl Into<String>,
        error: impl Into<String>,
    ) {
        self.unit_errors.push(JobUnitError {
            account_id,
            account_name: account_name.into(),
            error: error.into(),
        });
    }
}

impl StorageEntity for RefreshJob {
    type Key = RefreshJobId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn entity_type() -> &'static str {
        "refresh_jobs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_generate() {
        let id = RefreshJobId::generate();
        assert!(id.as_str().starts_with("job-"));
        assert_eq!(id.as_str().len(), 40); // "job-" + 36 char UUID
    }

    #[test]
    fn test_job_id_invalid() {
        assert!(RefreshJobId::new("").is_err());
        assert!(RefreshJobId::new("job-nope").is_err());
        assert!(RefreshJobId::new("12345678-1234-1234-1234-123456789abc").is_err());
    }

    #[test]
    fn test_status_terminal() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(JobStatus::PartiallyCompleted.is_terminal());
    }

    #[test]
    fn test_lifecycle_happy_path() {
        let mut job = RefreshJob::batch(JobTarget::AllAccounts, JobType::Automatic, 4);
        assert_eq!(job.status(), JobStatus::Pending);

        job.start().unwrap();
        assert_eq!(job.status(), JobStatus::Running);
        assert!(job.started_at().is_some());

        job.update_progress(2).unwrap();
        assert_eq!(job.progress(), 50.0);

        job.complete(4, 0).unwrap();
        assert_eq!(job.status(), JobStatus::Completed);
        assert_eq!(job.progress(), 100.0);
        assert!(job.completed_at().is_some());
    }

    #[test]
    fn test_complete_with_failures_is_partial() {
        let mut job = RefreshJob::batch(JobTarget::AllAccounts, JobType::Manual, 3);
        job.start().unwrap();
        job.complete(2, 1).unwrap();
        assert_eq!(job.status(), JobStatus::PartiallyCompleted);
        assert_eq!(job.successful_accounts, 2);
        assert_eq!(job.failed_accounts, 1);
    }

    #[test]
    fn test_progress_requires_running() {
        let mut job = RefreshJob::single(AccountId::generate(), JobType::Manual);
        assert!(job.update_progress(1).is_err());

        job.start().unwrap();
        job.complete(1, 0).unwrap();
        assert!(job.update_progress(1).is_err());
    }

    #[test]
    fn test_progress_is_monotone_and_clamped() {
        let mut job = RefreshJob::batch(JobTarget::AllAccounts, JobType::Automatic, 4);
        job.start().unwrap();

        job.update_progress(3).unwrap();
        assert_eq!(job.progress(), 75.0);

        // A lower processed count never reduces the percentage
        job.update_progress(1).unwrap();
        assert_eq!(job.progress(), 75.0);

        // Overshoot clamps to 100
        job.update_progress(10).unwrap();
        assert_eq!(job.progress(), 100.0);
        assert_eq!(job.processed_accounts(), 4);
    }

    #[test]
    fn test_fail_from_pending_and_running() {
        let mut pending = RefreshJob::single(AccountId::generate(), JobType::Manual);
        pending.fail("boom").unwrap();
        assert_eq!(pending.status(), JobStatus::Failed);
        assert_eq!(pending.error_message.as_deref(), Some("boom"));

        let mut running = RefreshJob::single(AccountId::generate(), JobType::Manual);
        running.start().unwrap();
        running.fail("boom").unwrap();
        assert_eq!(running.status(), JobStatus::Failed);
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        let mut job = RefreshJob::single(AccountId::generate(), JobType::Manual);
        job.start().unwrap();
        job.complete(1, 0).unwrap();

        assert!(job.start().is_err());
        assert!(job.fail("late").is_err());
        assert!(job.cancel().is_err());
        assert!(job.complete(1, 0).is_err());
    }

    #[test]
    fn test_cancel_from_pending_and_running_only() {
        let mut job = RefreshJob::single(AccountId::generate(), JobType::Manual);
        assert!(job.can_cancel());
        job.cancel().unwrap();
        assert_eq!(job.status(), JobStatus::Cancelled);

        let mut failed = RefreshJob::single(AccountId::generate(), JobType::Manual);
        failed.fail("boom").unwrap();
        assert!(failed.cancel().is_err());
    }

    #[test]
    fn test_zero_account_batch_progress() {
        let mut job = RefreshJob::batch(JobTarget::AllAccounts, JobType::Automatic, 0);
        job.start().unwrap();
        job.update_progress(0).unwrap();
        assert_eq!(job.progress(), 100.0);
    }

    #[test]
    fn test_target_serialization_is_tagged() {
        let target = JobTarget::account(AccountId::generate());
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["kind"], "account");

        let all = serde_json::to_value(&JobTarget::AllAccounts).unwrap();
        assert_eq!(all["kind"], "all_accounts");
    }
}
