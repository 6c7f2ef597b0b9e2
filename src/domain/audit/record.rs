//! Persisted audit record

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};

use super::event::AuditEvent;

/// Identifier for a persisted audit record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AuditRecordId(String);

impl AuditRecordId {
    pub fn generate() -> Self {
        Self(format!("audit-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuditRecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<AuditRecordId> for String {
    fn from(id: AuditRecordId) -> Self {
        id.0
    }
}

impl fmt::Display for AuditRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AuditRecordId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// An [`AuditEvent`] wrapped with a storage key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    id: AuditRecordId,
    pub event: AuditEvent,
}

impl AuditRecord {
    pub fn from_event(event: AuditEvent) -> Self {
        Self {
            id: AuditRecordId::generate(),
            event,
        }
    }

    pub fn id(&self) -> &AuditRecordId {
        &self.id
    }
}

impl StorageEntity for AuditRecord {
    type Key = AuditRecordId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn entity_type() -> &'static str {
        "audit_records"
    }
}
