//! Account quota repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{AccountQuota, AccountQuotaId};
use crate::domain::account::AccountId;
use crate::domain::catalog::QuotaCode;
use crate::domain::DomainError;

/// Persistence for per-account quota facts
#[async_trait]
pub trait AccountQuotaRepository: Send + Sync + Debug {
    async fn get(&self, id: &AccountQuotaId) -> Result<Option<AccountQuota>, DomainError>;

    /// Fetch-or-create the row for (account, quota code); new rows start
    /// with level Unknown and status Pending
    async fn ensure_exists(
        &self,
        account_id: &AccountId,
        quota_code: &QuotaCode,
    ) -> Result<AccountQuota, DomainError>;

    async fn update(&self, quota: &AccountQuota) -> Result<AccountQuota, DomainError>;

    /// All quota rows for one account, in stable quota-code order
    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountQuota>, DomainError>;

    /// Rows whose last sync failed
    async fn list_failed(&self) -> Result<Vec<AccountQuota>, DomainError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::domain::quota::{QuotaLevel, SyncStatus};

    /// Conformance suite for AccountQuotaRepository implementations
    pub async fn test_ensure_exists_is_idempotent<R: AccountQuotaRepository>(repo: &R) {
        let account_id = AccountId::generate();
        let code = QuotaCode::new("L-254CACF4");

        let first = repo
            .ensure_exists(&account_id, &code)
            .await
            .expect("ensure should succeed");
        assert_eq!(first.quota_level, QuotaLevel::Unknown);
        assert_eq!(first.sync_status, SyncStatus::Pending);

        // Mutate and re-ensure: the existing row must be returned, not reset
        let mut updated = first.clone();
        updated.apply_success(100.0, QuotaLevel::High, true);
        repo.update(&updated).await.expect("update should succeed");

        let again = repo
            .ensure_exists(&account_id, &code)
            .await
            .expect("ensure should succeed");
        assert_eq!(again.current_quota, Some(100.0));
        assert_eq!(again.quota_level, QuotaLevel::High);

        let rows = repo
            .list_for_account(&account_id)
            .await
            .expect("list should succeed");
        assert_eq!(rows.len(), 1);
    }

    pub async fn test_list_for_account_is_code_ordered<R: AccountQuotaRepository>(repo: &R) {
        let account_id = AccountId::generate();
        let other_account = AccountId::generate();

        for code in ["L-9EB71894", "L-254CACF4", "L-6E888CC2"] {
            repo.ensure_exists(&account_id, &QuotaCode::new(code))
                .await
                .unwrap();
        }
        repo.ensure_exists(&other_account, &QuotaCode::new("L-254CACF4"))
            .await
            .unwrap();

        let rows = repo.list_for_account(&account_id).await.unwrap();
        let codes: Vec<_> = rows.iter().map(|q| q.quota_code().as_str()).collect();
        assert_eq!(codes, vec!["L-254CACF4", "L-6E888CC2", "L-9EB71894"]);
    }

    pub async fn test_list_failed<R: AccountQuotaRepository>(repo: &R) {
        let account_id = AccountId::generate();
        let mut ok = repo
            .ensure_exists(&account_id, &QuotaCode::new("L-254CACF4"))
            .await
            .unwrap();
        ok.apply_success(50.0, QuotaLevel::Medium, true);
        repo.update(&ok).await.unwrap();

        let mut bad = repo
            .ensure_exists(&account_id, &QuotaCode::new("L-A50569E5"))
            .await
            .unwrap();
        bad.apply_failure("timeout");
        repo.update(&bad).await.unwrap();

        let failed = repo.list_failed().await.unwrap();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].quota_code().as_str(), "L-A50569E5");
    }
}
