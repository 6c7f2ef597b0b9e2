//! Audit sink trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::event::AuditEvent;
use crate::domain::DomainError;

/// Destination for audit events
///
/// Sinks must be non-fatal: refresh and sync work proceeds even when the
/// sink fails, so implementations should swallow their own I/O errors and
/// report them through logging only.
#[async_trait]
pub trait AuditSink: Send + Sync + Debug {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Collecting sink for tests
    #[derive(Debug, Default)]
    pub struct MockAuditSink {
        events: Mutex<Vec<AuditEvent>>,
    }

    impl MockAuditSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<AuditEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn actions(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.action.clone())
                .collect()
        }
    }

    #[async_trait]
    impl AuditSink for MockAuditSink {
        async fn record(&self, event: AuditEvent) -> Result<(), DomainError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }
}
