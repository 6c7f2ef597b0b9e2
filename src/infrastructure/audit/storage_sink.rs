//! Storage-backed audit sink

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::audit::{AuditEvent, AuditRecord, AuditSink};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Audit sink that persists events through the generic storage layer
///
/// Each event becomes one immutable record; the trail survives process
/// restarts when backed by PostgreSQL.
#[derive(Debug)]
pub struct StorageAuditSink {
    storage: Arc<dyn Storage<AuditRecord>>,
}

impl StorageAuditSink {
    pub fn new(storage: Arc<dyn Storage<AuditRecord>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AuditSink for StorageAuditSink {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError> {
        self.storage.create(AuditRecord::from_event(event)).await?;
        Ok(())
    }
}
