//! Per-account materialized quota facts

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::level::QuotaLevel;
use crate::domain::account::AccountId;
use crate::domain::catalog::QuotaCode;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Composite key for one (account, quota definition) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AccountQuotaId(String);

impl AccountQuotaId {
    pub fn new(account_id: &AccountId, quota_code: &QuotaCode) -> Self {
        Self(format!("{}::{}", account_id, quota_code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountQuotaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<AccountQuotaId> for String {
    fn from(id: AccountQuotaId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountQuotaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AccountQuotaId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of the most recent sync of one account quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Pending,
    Success,
    Failed,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Current value and classification of one quota definition for one account
///
/// Unique per (account, quota definition); overwritten in place on every
/// refresh. There is deliberately no point-in-time history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountQuota {
    id: AccountQuotaId,
    account_id: AccountId,
    quota_code: QuotaCode,
    /// Most recently observed value; `None` until the first successful sync
    pub current_quota: Option<f64>,
    pub quota_level: QuotaLevel,
    pub is_adjustable: bool,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub sync_status: SyncStatus,
    pub sync_error: Option<String>,
}

impl AccountQuota {
    /// New, never-synced row with level `Unknown`
    pub fn new(account_id: AccountId, quota_code: QuotaCode) -> Self {
        Self {
            id: AccountQuotaId::new(&account_id, &quota_code),
            account_id,
            quota_code,
            current_quota: None,
            quota_level: QuotaLevel::Unknown,
            is_adjustable: false,
            last_sync_at: None,
            sync_status: SyncStatus::Pending,
            sync_error: None,
        }
    }

    pub fn id(&self) -> &AccountQuotaId {
        &self.id
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn quota_code(&self) -> &QuotaCode {
        &self.quota_code
    }

    /// Apply a successful fetch: update value, level and adjustability,
    /// mark Success and clear any previous error
    pub fn apply_success(&mut self, value: f64, level: QuotaLevel, adjustable: bool) {
        self.current_quota = Some(value);
        self.quota_level = level;
        self.is_adjustable = adjustable;
        self.last_sync_at = Some(Utc::now());
        self.sync_status = SyncStatus::Success;
        self.sync_error = None;
    }

    /// Apply a failed fetch: the previous value and level stay in place,
    /// stale but flagged, with the error recorded
    pub fn apply_failure(&mut self, error: impl Into<String>) {
        self.last_sync_at = Some(Utc::now());
        self.sync_status = SyncStatus::Failed;
        self.sync_error = Some(error.into());
    }

    pub fn sync_succeeded(&self) -> bool {
        self.sync_status == SyncStatus::Success
    }
}

impl StorageEntity for AccountQuota {
    type Key = AccountQuotaId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn entity_type() -> &'static str {
        "account_quotas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_quota() -> AccountQuota {
        AccountQuota::new(AccountId::generate(), QuotaCode::new("L-254CACF4"))
    }

    #[test]
    fn test_new_quota_is_unknown_pending() {
        let quota = new_quota();
        assert_eq!(quota.quota_level, QuotaLevel::Unknown);
        assert_eq!(quota.sync_status, SyncStatus::Pending);
        assert!(quota.current_quota.is_none());
        assert!(quota.last_sync_at.is_none());
    }

    #[test]
    fn test_apply_success_clears_error() {
        let mut quota = new_quota();
        quota.apply_failure("rate limited");
        assert_eq!(quota.sync_status, SyncStatus::Failed);

        quota.apply_success(100.0, QuotaLevel::High, true);
        assert_eq!(quota.current_quota, Some(100.0));
        assert_eq!(quota.quota_level, QuotaLevel::High);
        assert_eq!(quota.sync_status, SyncStatus::Success);
        assert!(quota.sync_error.is_none());
        assert!(quota.is_adjustable);
    }

    #[test]
    fn test_apply_failure_keeps_stale_value() {
        let mut quota = new_quota();
        quota.apply_success(100.0, QuotaLevel::High, true);

        quota.apply_failure("rate limited");
        assert_eq!(quota.current_quota, Some(100.0));
        assert_eq!(quota.quota_level, QuotaLevel::High);
        assert_eq!(quota.sync_status, SyncStatus::Failed);
        assert_eq!(quota.sync_error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_composite_id() {
        let account_id = AccountId::generate();
        let quota = AccountQuota::new(account_id.clone(), QuotaCode::new("L-254CACF4"));
        assert_eq!(
            quota.id().as_str(),
            format!("{}::L-254CACF4", account_id)
        );
    }
}
