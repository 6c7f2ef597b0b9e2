//! Quota definition catalog repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{QuotaCode, QuotaDefinition};
use crate::domain::DomainError;

/// Read/seed access to the quota definition catalog
///
/// The catalog is read-only at runtime apart from idempotent seeding. An
/// unseeded catalog is an empty result set, never an error.
#[async_trait]
pub trait CatalogRepository: Send + Sync + Debug {
    /// Get one definition by quota code
    async fn get(&self, code: &QuotaCode) -> Result<Option<QuotaDefinition>, DomainError>;

    /// All definitions, in stable catalog order (by quota code)
    async fn all_definitions(&self) -> Result<Vec<QuotaDefinition>, DomainError>;

    /// Active definitions only, in stable catalog order
    async fn active_definitions(&self) -> Result<Vec<QuotaDefinition>, DomainError>;

    /// Definitions for one Claude model name
    async fn definitions_for_model(
        &self,
        model_name: &str,
    ) -> Result<Vec<QuotaDefinition>, DomainError>;

    /// Insert-or-update one definition by quota code
    async fn upsert(&self, definition: QuotaDefinition) -> Result<QuotaDefinition, DomainError>;
}
