//! Catalog seeding

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::catalog::seed::seed_definitions;
use crate::domain::catalog::CatalogRepository;
use crate::domain::DomainError;

/// Counts from one seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: u32,
    /// Known codes absent from the seed catalog, deactivated in place
    pub deactivated: u32,
}

/// Upserts the built-in quota definition catalog into storage
///
/// Idempotent: re-running refreshes every definition and deactivates
/// stored codes the catalog no longer carries, without touching account
/// quota rows.
#[derive(Debug)]
pub struct SeedService {
    catalog: Arc<dyn CatalogRepository>,
}

impl SeedService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self))]
    pub async fn seed_catalog(&self) -> Result<SeedReport, DomainError> {
        let definitions = seed_definitions();
        let mut seeded = 0u32;
        for definition in &definitions {
            self.catalog.upsert(definition.clone()).await?;
            seeded += 1;
        }

        let mut deactivated = 0u32;
        let known: Vec<_> = definitions.iter().map(|d| d.quota_code().clone()).collect();
        for stored in self.catalog.all_definitions().await? {
            if stored.is_active && !known.contains(stored.quota_code()) {
                self.catalog.upsert(stored.deactivated()).await?;
                deactivated += 1;
            }
        }

        info!(seeded, deactivated, "quota definition catalog seeded");
        Ok(SeedReport {
            seeded,
            deactivated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CallType, QuotaDefinition, QuotaType};
    use crate::infrastructure::catalog::StorageCatalogRepository;
    use crate::infrastructure::storage::InMemoryStorage;

    fn build_service() -> (SeedService, Arc<StorageCatalogRepository>) {
        let catalog = Arc::new(StorageCatalogRepository::new(Arc::new(
            InMemoryStorage::new(),
        )));
        (SeedService::new(catalog.clone()), catalog)
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (service, catalog) = build_service();

        let first = service.seed_catalog().await.unwrap();
        let second = service.seed_catalog().await.unwrap();
        assert_eq!(first.seeded, second.seeded);
        assert_eq!(second.deactivated, 0);

        let all = catalog.all_definitions().await.unwrap();
        assert_eq!(all.len(), first.seeded as usize);
    }

    #[tokio::test]
    async fn test_unknown_stored_code_is_deactivated() {
        let (service, catalog) = build_service();

        // A code retired from the catalog
        catalog
            .upsert(QuotaDefinition::new(
                "L-DEADBEEF",
                "Claude 2.1",
                QuotaType::RequestsPerMinute,
                "On-demand model inference requests per minute for Anthropic Claude 2.1",
                CallType::OnDemand,
                25.0,
            ))
            .await
            .unwrap();

        let report = service.seed_catalog().await.unwrap();
        assert_eq!(report.deactivated, 1);

        let retired = catalog
            .get(&crate::domain::catalog::QuotaCode::new("L-DEADBEEF"))
            .await
            .unwrap()
            .unwrap();
        assert!(!retired.is_active);

        // Active set is exactly the seed catalog
        let active = catalog.active_definitions().await.unwrap();
        assert_eq!(active.len(), report.seeded as usize);
    }
}
