//! Cost sync entities

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Key for one (account, date) daily cost fact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DailyCostId(String);

impl DailyCostId {
    pub fn new(account_id: &AccountId, date: NaiveDate) -> Self {
        Self(format!("{}::{}", account_id, date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DailyCostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<DailyCostId> for String {
    fn from(id: DailyCostId) -> Self {
        id.0
    }
}

impl StorageKey for DailyCostId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Summed daily spend for one account, across all services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCost {
    id: DailyCostId,
    account_id: AccountId,
    pub date: NaiveDate,
    /// Total unblended cost for the day, in `currency`; non-negative
    pub cost_amount: f64,
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

impl DailyCost {
    pub fn new(account_id: AccountId, date: NaiveDate, cost_amount: f64) -> Self {
        Self {
            id: DailyCostId::new(&account_id, date),
            account_id,
            date,
            cost_amount,
            currency: "USD".to_string(),
            updated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &DailyCostId {
        &self.id
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }
}

impl StorageEntity for DailyCost {
    type Key = DailyCostId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn entity_type() -> &'static str {
        "daily_costs"
    }
}

/// Identifier for a cost sync log record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CostSyncLogId(String);

impl CostSyncLogId {
    pub fn generate() -> Self {
        Self(format!("costsync-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CostSyncLogId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<CostSyncLogId> for String {
    fn from(id: CostSyncLogId) -> Self {
        id.0
    }
}

impl fmt::Display for CostSyncLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CostSyncLogId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Scope of a cost sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncType {
    SingleAccount,
    BatchSync,
}

/// Cost sync log lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostSyncStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for CostSyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Audit record for one cost sync run (per-account or batch level)
///
/// Always created pending before any work begins, moved to running at
/// start, and to a terminal state at end, including on unexpected errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSyncLog {
    id: CostSyncLogId,
    pub sync_type: SyncType,
    /// None for batch-level logs
    pub account_id: Option<AccountId>,
    pub status: CostSyncStatus,
    pub synced_days_count: u32,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl CostSyncLog {
    pub fn single_account(account_id: AccountId) -> Self {
        Self::new(SyncType::SingleAccount, Some(account_id))
    }

    pub fn batch() -> Self {
        Self::new(SyncType::BatchSync, None)
    }

    fn new(sync_type: SyncType, account_id: Option<AccountId>) -> Self {
        Self {
            id: CostSyncLogId::generate(),
            sync_type,
            account_id,
            status: CostSyncStatus::Pending,
            synced_days_count: 0,
            error_message: None,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
        }
    }

    pub fn id(&self) -> &CostSyncLogId {
        &self.id
    }

    pub fn mark_running(&mut self) {
        self.status = CostSyncStatus::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self, synced_days: u32) {
        self.status = CostSyncStatus::Completed;
        self.synced_days_count = synced_days;
        self.completed_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, error: impl Into<String>, synced_days: u32) {
        self.status = CostSyncStatus::Failed;
        self.error_message = Some(error.into());
        self.synced_days_count = synced_days;
        self.completed_at = Some(Utc::now());
    }

    pub fn duration_secs(&self) -> Option<f64> {
        let started = self.started_at?;
        let completed = self.completed_at?;
        Some((completed - started).num_milliseconds() as f64 / 1000.0)
    }
}

impl StorageEntity for CostSyncLog {
    type Key = CostSyncLogId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn entity_type() -> &'static str {
        "cost_sync_logs"
    }
}
