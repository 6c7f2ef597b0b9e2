//! Tracing-backed audit sink

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::audit::{AuditEvent, AuditSink};
use crate::domain::DomainError;

/// Audit sink that emits events as structured log records
///
/// Each event becomes one record on the `audit` target, so downstream log
/// pipelines can route the trail separately from application logs.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError> {
        let actor = event
            .actor
            .as_ref()
            .map(|a| a.admin_id.clone())
            .unwrap_or_else(|| "system".to_string());
        let target = serde_json::to_string(&event.target).unwrap_or_else(|_| "?".to_string());

        if event.success {
            info!(
                target: "audit",
                action = %event.action,
                %actor,
                %target,
                metadata = %event.metadata,
                "audit event"
            );
        } else {
            warn!(
                target: "audit",
                action = %event.action,
                %actor,
                %target,
                error = event.error.as_deref().unwrap_or("unknown"),
                metadata = %event.metadata,
                "audit event failed"
            );
        }

        Ok(())
    }
}
