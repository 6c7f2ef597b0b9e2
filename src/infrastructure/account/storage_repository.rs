//! Storage-backed account repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of AccountRepository
#[derive(Debug)]
pub struct StorageAccountRepository {
    storage: Arc<dyn Storage<Account>>,
}

impl StorageAccountRepository {
    pub fn new(storage: Arc<dyn Storage<Account>>) -> Self {
        Self { storage }
    }

    async fn list_sorted(&self) -> Result<Vec<Account>, DomainError> {
        let mut all = self.storage.list().await?;
        all.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(all)
    }
}

#[async_trait]
impl AccountRepository for StorageAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        if let Some(identifier) = &account.account_identifier {
            if self.find_by_identifier(identifier).await?.is_some() {
                return Err(DomainError::conflict(format!(
                    "Account with identifier '{}' already exists",
                    identifier
                )));
            }
        }

        self.storage.create(account).await
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        if !self.storage.exists(account.id()).await? {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                account.id()
            )));
        }

        self.storage.update(account.clone()).await
    }

    async fn list_active(&self) -> Result<Vec<Account>, DomainError> {
        let all = self.list_sorted().await?;
        Ok(all.into_iter().filter(|a| a.is_active()).collect())
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        let all = self.list_sorted().await?;
        Ok(all.into_iter().filter(|a| !a.is_deleted()).collect())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, DomainError> {
        let all = self.storage.list().await?;
        Ok(all
            .into_iter()
            .find(|a| !a.is_deleted() && a.account_identifier.as_deref() == Some(identifier)))
    }

    async fn soft_delete(&self, id: &AccountId) -> Result<Account, DomainError> {
        let mut account = self
            .storage
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

        account.mark_deleted();
        self.storage.update(account).await
    }
}
