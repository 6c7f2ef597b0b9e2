//! Storage-backed catalog repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::{CatalogRepository, QuotaCode, QuotaDefinition};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of CatalogRepository
#[derive(Debug)]
pub struct StorageCatalogRepository {
    storage: Arc<dyn Storage<QuotaDefinition>>,
}

impl StorageCatalogRepository {
    pub fn new(storage: Arc<dyn Storage<QuotaDefinition>>) -> Self {
        Self { storage }
    }

    async fn list_sorted(&self) -> Result<Vec<QuotaDefinition>, DomainError> {
        let mut all = self.storage.list().await?;
        all.sort_by(|a, b| a.quota_code().as_str().cmp(b.quota_code().as_str()));
        Ok(all)
    }
}

#[async_trait]
impl CatalogRepository for StorageCatalogRepository {
    async fn get(&self, code: &QuotaCode) -> Result<Option<QuotaDefinition>, DomainError> {
        self.storage.get(code).await
    }

    async fn all_definitions(&self) -> Result<Vec<QuotaDefinition>, DomainError> {
        self.list_sorted().await
    }

    async fn active_definitions(&self) -> Result<Vec<QuotaDefinition>, DomainError> {
        let all = self.list_sorted().await?;
        Ok(all.into_iter().filter(|d| d.is_active).collect())
    }

    async fn definitions_for_model(
        &self,
        model_name: &str,
    ) -> Result<Vec<QuotaDefinition>, DomainError> {
        let all = self.list_sorted().await?;
        Ok(all
            .into_iter()
            .filter(|d| d.claude_model_name == model_name)
            .collect())
    }

    async fn upsert(&self, definition: QuotaDefinition) -> Result<QuotaDefinition, DomainError> {
        self.storage.upsert(definition).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageCatalogRepository {
        let storage = Arc::new(InMemoryStorage::<QuotaDefinition>::new());
        StorageCatalogRepository::new(storage)
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let repo = create_repo();
        tests::test_seeding_is_idempotent(&repo).await;
    }

    #[tokio::test]
    async fn test_definitions_for_model() {
        let repo = create_repo();
        tests::test_definitions_for_model(&repo).await;
    }

    #[tokio::test]
    async fn test_active_filtering() {
        let repo = create_repo();
        tests::test_active_filtering(&repo).await;
    }
}
