//! Audit domain: structured action events with explicit attribution

mod event;
mod record;
mod sink;

pub use event::{Actor, AuditEvent, AuditTarget};
pub use record::{AuditRecord, AuditRecordId};
pub use sink::AuditSink;

#[cfg(test)]
pub use sink::mock;
